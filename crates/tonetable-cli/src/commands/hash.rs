//! Hash command implementation
//!
//! Prints the BLAKE3 hash of every generated table. Hashes cover the exact
//! bytes stored in firmware, so they serve as golden values in CI.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use tonetable_backend::{generate, GenerateResult};
use tonetable_spec::canonical_spec_hash;

use super::json_output::{
    load_error_to_json, table_error_to_json, CommandOutput, HashResult, TableHash,
};
use super::reporting::diagnostic_lines;
use crate::input::{load_input, LoadResult};

/// Run the hash command
///
/// # Arguments
/// * `spec_path` - Path to the spec JSON file
/// * `preset` - Built-in preset name (used when no spec file is given)
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(spec_path: Option<&str>, preset: Option<&str>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(spec_path, preset);
    }

    let LoadResult { spec, source, .. } =
        load_input(spec_path, preset).context("Failed to load spec")?;
    println!("{} {} ({})", "Hashing:".cyan().bold(), spec.name, source);

    let result = match generate(&spec) {
        Ok(result) => result,
        Err(e) => {
            for line in diagnostic_lines(&e.validation_errors(), &[]) {
                println!("{}", line);
            }
            println!("\n{} Generation failed", "FAILED".red().bold());
            return Ok(ExitCode::from(1));
        }
    };

    let spec_hash = canonical_spec_hash(&spec).context("Failed to hash spec")?;
    println!("  {:<18} {:>6}  {}", "spec".dimmed(), "", spec_hash);
    for entry in table_hashes(&result) {
        println!("  {:<18} {:>6}  {}", entry.table, entry.len, entry.hash);
    }

    Ok(ExitCode::SUCCESS)
}

fn run_json(spec_path: Option<&str>, preset: Option<&str>) -> Result<ExitCode> {
    let spec = match load_input(spec_path, preset) {
        Ok(LoadResult { spec, .. }) => spec,
        Err(e) => {
            let output: CommandOutput<HashResult> =
                CommandOutput::failure(vec![load_error_to_json(&e, spec_path, preset)], vec![]);
            output.print()?;
            return Ok(ExitCode::from(1));
        }
    };

    let output = match generate(&spec) {
        Ok(result) => CommandOutput::success(
            HashResult {
                name: spec.name.clone(),
                spec_hash: canonical_spec_hash(&spec).context("Failed to hash spec")?,
                tables: table_hashes(&result),
            },
            vec![],
        ),
        Err(e) => CommandOutput::failure(table_error_to_json(&e), vec![]),
    };

    output.print()?;
    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

/// Per-table hashes in a fixed order: frequency, each waveform, the whole
/// bank, then the drawbar table.
pub fn table_hashes(result: &GenerateResult) -> Vec<TableHash> {
    let mut hashes = Vec::new();

    if let Some(ref frequency) = result.frequency {
        hashes.push(TableHash {
            table: "frequency".to_string(),
            len: frequency.len(),
            hash: frequency.hash(),
        });
    }

    if let Some(ref bank) = result.waveforms {
        for table in &bank.tables {
            hashes.push(TableHash {
                table: format!("waveform.{}", table.kind),
                len: table.len(),
                hash: table.hash(),
            });
        }
        hashes.push(TableHash {
            table: "waveform".to_string(),
            len: bank.flattened().len(),
            hash: bank.hash(),
        });
    }

    if let Some(ref drawbar) = result.drawbar {
        hashes.push(TableHash {
            table: "drawbar".to_string(),
            len: drawbar.samples.len(),
            hash: drawbar.hash(),
        });
    }

    hashes
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tonetable_spec::Preset;

    #[test]
    fn test_table_hashes_order() {
        let result = generate(&Preset::Organ.to_spec()).unwrap();
        let names: Vec<String> = table_hashes(&result).into_iter().map(|h| h.table).collect();
        assert_eq!(
            names,
            vec![
                "frequency",
                "waveform.triangle",
                "waveform.sine",
                "waveform.square",
                "waveform.sawtooth",
                "waveform",
                "drawbar",
            ]
        );
    }

    #[test]
    fn test_table_hashes_are_stable() {
        let first = table_hashes(&generate(&Preset::Organ20k.to_spec()).unwrap());
        let second = table_hashes(&generate(&Preset::Organ20k.to_spec()).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_presets_differ_only_where_configured() {
        let organ = table_hashes(&generate(&Preset::Organ.to_spec()).unwrap());
        let organ_20k = table_hashes(&generate(&Preset::Organ20k.to_spec()).unwrap());
        assert_ne!(organ[0].hash, organ_20k[0].hash);
        assert_eq!(organ[1..].to_vec(), organ_20k[1..].to_vec());
    }

    #[test]
    fn test_run_preset() {
        assert_eq!(run(None, Some("legacy"), false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run(None, Some("legacy"), true).unwrap(), ExitCode::SUCCESS);
    }
}
