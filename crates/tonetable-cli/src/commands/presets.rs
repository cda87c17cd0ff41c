//! Presets command implementation
//!
//! Lists the built-in parameter sets.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use tonetable_spec::Preset;

use super::json_output::{CommandOutput, PresetInfo};

/// Run the presets command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON (includes each preset's spec)
///
/// # Returns
/// Exit code: always 0
pub fn run(json_output: bool) -> Result<ExitCode> {
    if json_output {
        let presets = Preset::all()
            .iter()
            .map(|preset| {
                Ok(PresetInfo {
                    name: preset.name().to_string(),
                    description: preset.description().to_string(),
                    spec: preset
                        .to_spec()
                        .to_value()
                        .with_context(|| format!("Failed to serialize preset: {}", preset))?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        CommandOutput::success(presets, vec![]).print()?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Presets:".cyan().bold());
    for preset in Preset::all() {
        println!(
            "  {:<12} {}",
            preset.name().green(),
            preset.description().dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run() {
        assert_eq!(run(false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(true).unwrap(), ExitCode::SUCCESS);
    }
}
