//! Validate command implementation
//!
//! Validates a spec file, including the tick-count range check that needs a
//! dry-run of the frequency generator.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tonetable_spec::canonical_spec_hash;

use super::json_output::{
    input_error_to_json, validation_error_to_json, validation_warning_to_json, CommandOutput,
    ValidateResult,
};
use super::reporting::{check_spec, declared_sections, diagnostic_lines};
use crate::input::{load_spec, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the spec JSON file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path)
    } else {
        run_human(spec_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(spec_path: &str) -> Result<ExitCode> {
    let start = Instant::now();
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    let LoadResult {
        spec,
        source_kind,
        source_hash,
        ..
    } = load_spec(Path::new(spec_path))
        .with_context(|| format!("Failed to load spec file: {}", spec_path))?;

    println!(
        "{} {} ({})",
        "Source:".dimmed(),
        source_kind,
        &source_hash[..16]
    );

    let diagnostics = check_spec(&spec);
    let duration_ms = start.elapsed().as_millis() as u64;

    for line in diagnostic_lines(&diagnostics.errors, &diagnostics.warnings) {
        println!("{}", line);
    }

    if diagnostics.is_ok() {
        println!(
            "\n{} Spec is valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Spec has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            diagnostics.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(spec_path: &str) -> Result<ExitCode> {
    let LoadResult { spec, source_kind, .. } = match load_spec(Path::new(spec_path)) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output: CommandOutput<ValidateResult> =
                CommandOutput::failure(vec![input_error_to_json(&e, Some(spec_path))], vec![]);
            output.print()?;
            return Ok(ExitCode::from(1));
        }
    };

    let diagnostics = check_spec(&spec);
    let warnings = diagnostics
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    let output = if diagnostics.is_ok() {
        let result = ValidateResult {
            name: spec.name.clone(),
            source_kind: source_kind.as_str().to_string(),
            spec_hash: canonical_spec_hash(&spec).context("Failed to hash spec")?,
            sections: declared_sections(&spec),
        };
        CommandOutput::success(result, warnings)
    } else {
        let errors = diagnostics
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect();
        CommandOutput::failure(errors, warnings)
    };

    output.print()?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_spec(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_valid_spec() {
        let file = write_spec(
            r#"{"spec_version": 1, "name": "organ", "frequency": {"sample_hz": 12500.0, "a4_offset": 57, "octave_count": 8}}"#,
        );
        let code = run(file.path().to_str().unwrap(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_overflowing_spec_fails() {
        let file = write_spec(
            r#"{"spec_version": 1, "name": "slow", "frequency": {"sample_hz": 3000.0, "a4_offset": 57, "octave_count": 8}}"#,
        );
        let code = run(file.path().to_str().unwrap(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_missing_file_is_an_error_in_human_mode() {
        assert!(run("/nonexistent/spec.json", false).is_err());
    }

    #[test]
    fn test_missing_file_is_reported_in_json_mode() {
        let code = run("/nonexistent/spec.json", true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }
}
