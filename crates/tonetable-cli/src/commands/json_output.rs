//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and then prints exactly one
//! [`CommandOutput`] envelope to stdout instead of colored status lines.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tonetable_backend::TableError;
use tonetable_spec::{ValidationError, ValidationWarning};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors; validation errors pass their
/// E0XX codes through.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Unknown preset name
    pub const UNKNOWN_PRESET: &str = "CLI_003";
    /// Neither a spec file nor a preset was given
    pub const MISSING_INPUT: &str = "CLI_004";
    /// Invalid spec (post-parse)
    pub const INVALID_SPEC: &str = "CLI_005";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_006";
    /// Rendering error
    pub const RENDER: &str = "CLI_007";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E009")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W002")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// The envelope every `--json` command prints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<R> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Warnings encountered
    pub warnings: Vec<JsonWarning>,
    /// Command-specific result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<R>,
}

impl<R: Serialize> CommandOutput<R> {
    /// Creates a successful output.
    pub fn success(result: R, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }

    /// Prints the envelope as pretty JSON to stdout.
    pub fn print(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize JSON output")?;
        println!("{}", json);
        Ok(())
    }
}

/// Result of the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Spec name
    pub name: String,
    /// Where the spec came from ("file" or "preset")
    pub source_kind: String,
    /// Canonical spec hash
    pub spec_hash: String,
    /// Declared table sections
    pub sections: Vec<String>,
}

/// One file produced by `generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputEntry {
    /// File name
    pub file: String,
    /// Table the file holds
    pub kind: String,
    /// BLAKE3 hash of the file contents
    pub hash: String,
    /// Path written to (absent when printing to stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// File contents (only when no output directory was given)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Result of the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSummary {
    /// Spec name
    pub name: String,
    /// Where the spec came from ("file" or "preset")
    pub source_kind: String,
    /// Canonical spec hash
    pub spec_hash: String,
    /// Output format ("c" or "json")
    pub format: String,
    /// Files produced
    pub outputs: Vec<OutputEntry>,
}

/// Hash of one generated table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableHash {
    /// Table name (e.g., "frequency", "waveform.sine", "drawbar")
    pub table: String,
    /// Number of entries
    pub len: usize,
    /// BLAKE3 hash of the table bytes
    pub hash: String,
}

/// Result of the `hash` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashResult {
    /// Spec name
    pub name: String,
    /// Canonical spec hash
    pub spec_hash: String,
    /// Per-table hashes
    pub tables: Vec<TableHash>,
}

/// A built-in preset as listed by `presets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetInfo {
    /// Preset name
    pub name: String,
    /// One-line description
    pub description: String,
    /// The preset's full spec
    pub spec: serde_json::Value,
}

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::UnknownPreset { .. } => error_codes::UNKNOWN_PRESET,
        InputError::MissingInput => error_codes::MISSING_INPUT,
        InputError::InvalidSpec { .. } => error_codes::INVALID_SPEC,
    };

    let mut error = JsonError::new(code, err.to_string());
    if let Some(f) = file {
        error = error.with_file(f);
    }
    error
}

/// Converts an InputError from `load_input`, naming the spec file or the
/// preset that failed to load.
pub fn load_error_to_json(
    err: &InputError,
    spec_path: Option<&str>,
    preset: Option<&str>,
) -> JsonError {
    input_error_to_json(err, spec_path.or(preset))
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &ValidationWarning) -> JsonWarning {
    JsonWarning {
        code: warn.code.to_string(),
        message: warn.message.clone(),
        path: warn.path.clone(),
    }
}

/// Converts a TableError to JsonErrors, one per underlying problem.
pub fn table_error_to_json(err: &TableError) -> Vec<JsonError> {
    err.validation_errors()
        .iter()
        .map(validation_error_to_json)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonetable_spec::{ErrorCode, WarningCode};

    #[test]
    fn test_failure_envelope_omits_result() {
        let output: CommandOutput<HashResult> =
            CommandOutput::failure(vec![JsonError::new(error_codes::FILE_READ, "missing")], vec![]);
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0]["code"], "CLI_001");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_validation_error_keeps_code_and_path() {
        let err = ValidationError::with_path(
            ErrorCode::InvalidSampleHz,
            "sample_hz must be positive",
            "frequency.sample_hz",
        );
        let json = validation_error_to_json(&err);
        assert_eq!(json.code, "E003");
        assert_eq!(json.path.as_deref(), Some("frequency.sample_hz"));
    }

    #[test]
    fn test_warning_conversion() {
        let warn = ValidationWarning::with_path(WarningCode::ZeroTickCount, "C0 is 0", "frequency[4]");
        let json = validation_warning_to_json(&warn);
        assert_eq!(json.code, "W002");
        assert_eq!(json.path.as_deref(), Some("frequency[4]"));
    }

    #[test]
    fn test_input_error_codes() {
        let err = InputError::UnknownPreset {
            name: "piano".to_string(),
        };
        let json = input_error_to_json(&err, None);
        assert_eq!(json.code, error_codes::UNKNOWN_PRESET);
        assert!(json.file.is_none());
    }

    #[test]
    fn test_load_error_names_the_preset() {
        let err = InputError::UnknownPreset {
            name: "piano".to_string(),
        };
        let json = load_error_to_json(&err, None, Some("piano"));
        assert_eq!(json.code, error_codes::UNKNOWN_PRESET);
        assert_eq!(json.file.as_deref(), Some("piano"));

        let json = load_error_to_json(&InputError::MissingInput, Some("organ.json"), None);
        assert_eq!(json.file.as_deref(), Some("organ.json"));
    }
}
