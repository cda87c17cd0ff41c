//! Generate command implementation
//!
//! Generates the tables a spec declares and renders them as C headers or
//! JSON. With an output directory the files are written there; without one
//! the rendered text goes to stdout and status lines go to stderr.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tempfile::NamedTempFile;
use tonetable_backend::generate;
use tonetable_spec::canonical_spec_hash;

use super::json_output::{
    error_codes, load_error_to_json, table_error_to_json, validation_warning_to_json,
    CommandOutput, GenerateSummary, JsonError, OutputEntry,
};
use super::reporting::diagnostic_lines;
use crate::input::{load_input, LoadResult};
use crate::render::{render, OutputFormat, RenderedFile};

/// Run the generate command
///
/// # Arguments
/// * `spec_path` - Path to the spec JSON file
/// * `preset` - Built-in preset name (used when no spec file is given)
/// * `out_dir` - Output directory (default: print to stdout)
/// * `format` - Output format ("c" or "json")
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    spec_path: Option<&str>,
    preset: Option<&str>,
    out_dir: Option<&str>,
    format: &str,
    json_output: bool,
) -> Result<ExitCode> {
    let format: OutputFormat = format.parse().map_err(anyhow::Error::msg)?;
    if json_output {
        run_json(spec_path, preset, out_dir, format)
    } else {
        run_human(spec_path, preset, out_dir, format)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(
    spec_path: Option<&str>,
    preset: Option<&str>,
    out_dir: Option<&str>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let start = Instant::now();
    // Stdout carries the tables when there is no output directory.
    let status = |line: String| {
        if out_dir.is_some() {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    };

    let LoadResult {
        spec,
        source_kind,
        source,
        ..
    } = load_input(spec_path, preset).context("Failed to load spec")?;

    status(format!(
        "{} {} ({} {})",
        "Generating:".cyan().bold(),
        spec.name,
        source_kind,
        source
    ));

    let result = match generate(&spec) {
        Ok(result) => result,
        Err(e) => {
            for line in diagnostic_lines(&e.validation_errors(), &[]) {
                status(line);
            }
            status(format!("\n{} Generation failed", "FAILED".red().bold()));
            return Ok(ExitCode::from(1));
        }
    };

    let files = render(&spec, &result, format).context("Failed to render tables")?;

    match out_dir {
        Some(dir) => {
            for path in write_files(Path::new(dir), &files)? {
                status(format!("  {} {}", "Wrote:".dimmed(), path));
            }
        }
        None => {
            for file in &files {
                print!("{}", file.contents);
            }
        }
    }

    for line in diagnostic_lines(&[], &result.warnings) {
        status(line);
    }

    status(format!(
        "\n{} Generated {} table(s) into {} file(s) ({}ms)",
        "SUCCESS".green().bold(),
        result.table_count(),
        files.len(),
        start.elapsed().as_millis()
    ));
    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(
    spec_path: Option<&str>,
    preset: Option<&str>,
    out_dir: Option<&str>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let LoadResult { spec, source_kind, .. } = match load_input(spec_path, preset) {
        Ok(loaded) => loaded,
        Err(e) => {
            let output: CommandOutput<GenerateSummary> =
                CommandOutput::failure(vec![load_error_to_json(&e, spec_path, preset)], vec![]);
            output.print()?;
            return Ok(ExitCode::from(1));
        }
    };

    let result = match generate(&spec) {
        Ok(result) => result,
        Err(e) => {
            let output: CommandOutput<GenerateSummary> =
                CommandOutput::failure(table_error_to_json(&e), vec![]);
            output.print()?;
            return Ok(ExitCode::from(1));
        }
    };
    let warnings = result
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    let files = match render(&spec, &result, format) {
        Ok(files) => files,
        Err(e) => {
            let error = JsonError::new(
                error_codes::RENDER,
                format!("Failed to render tables: {}", e),
            );
            let output: CommandOutput<GenerateSummary> =
                CommandOutput::failure(vec![error], warnings);
            output.print()?;
            return Ok(ExitCode::from(1));
        }
    };

    let paths: Vec<Option<String>> = match out_dir {
        Some(dir) => match write_files(Path::new(dir), &files) {
            Ok(paths) => paths.into_iter().map(Some).collect(),
            Err(e) => {
                let error = JsonError::new(error_codes::FILE_WRITE, format!("{:#}", e))
                    .with_file(dir);
                let output: CommandOutput<GenerateSummary> =
                    CommandOutput::failure(vec![error], warnings);
                output.print()?;
                return Ok(ExitCode::from(1));
            }
        },
        None => vec![None; files.len()],
    };

    let outputs = files
        .iter()
        .zip(paths)
        .map(|(file, path)| OutputEntry {
            file: file.file_name.clone(),
            kind: file.kind.to_string(),
            hash: blake3::hash(file.contents.as_bytes()).to_hex().to_string(),
            content: path.is_none().then(|| file.contents.clone()),
            path,
        })
        .collect();

    let summary = GenerateSummary {
        name: spec.name.clone(),
        source_kind: source_kind.as_str().to_string(),
        spec_hash: canonical_spec_hash(&spec).context("Failed to hash spec")?,
        format: format.as_str().to_string(),
        outputs,
    };
    CommandOutput::success(summary, warnings).print()?;
    Ok(ExitCode::SUCCESS)
}

/// Writes every rendered file under `dir`, or none of them.
///
/// All files are staged as temporary files in `dir` before any final name
/// is touched. If moving one into place fails, the files already moved are
/// removed again.
fn write_files(dir: &Path, files: &[RenderedFile]) -> Result<Vec<String>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut staged = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.file_name);
        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
        tmp.write_all(file.contents.as_bytes())
            .with_context(|| format!("Failed to write to: {}", path.display()))?;
        staged.push((tmp, path));
    }

    let mut written: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for (tmp, path) in staged {
        if let Err(e) = tmp.persist(&path) {
            for done in &written {
                let _ = fs::remove_file(done);
            }
            return Err(e.error).with_context(|| format!("Failed to write to: {}", path.display()));
        }
        written.push(path);
    }

    Ok(written
        .iter()
        .map(|path| path.display().to_string())
        .collect())
}
