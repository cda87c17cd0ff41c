//! Input abstraction for loading specs from files or built-in presets.
//!
//! Every command accepts either a JSON spec file or a preset name. Both are
//! loaded into the same [`LoadResult`] with source provenance attached.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tonetable_spec::{canonical_spec_hash, Preset, SpecError, TableSpec};

/// Identifies where a spec came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON spec file.
    File,
    /// Built-in preset.
    Preset,
}

impl SourceKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::File => "file",
            SourceKind::Preset => "preset",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A loaded spec with its provenance.
#[derive(Debug)]
pub struct LoadResult {
    /// The parsed spec.
    pub spec: TableSpec,
    /// Source type.
    pub source_kind: SourceKind,
    /// File path or preset name.
    pub source: String,
    /// BLAKE3 hash of the file content, or the canonical hash of a preset spec.
    pub source_hash: String,
}

/// Errors that can occur during spec loading.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { message: String },

    /// No preset with this name.
    UnknownPreset { name: String },

    /// Neither a spec file nor a preset was given.
    MissingInput,

    /// The spec could not be hashed.
    InvalidSpec { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { message } => write!(f, "JSON parse error: {}", message),
            InputError::UnknownPreset { name } => {
                let names: Vec<&str> = Preset::all().iter().map(|p| p.name()).collect();
                write!(
                    f,
                    "unknown preset '{}' (expected one of: {})",
                    name,
                    names.join(", ")
                )
            }
            InputError::MissingInput => write!(f, "either a spec file or a preset is required"),
            InputError::InvalidSpec { message } => write!(f, "invalid spec: {}", message),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loads a spec from a JSON file.
pub fn load_spec(path: &Path) -> Result<LoadResult, InputError> {
    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let spec = TableSpec::from_json(&content).map_err(|e| match e {
        SpecError::JsonParse(e) => InputError::JsonParse {
            message: e.to_string(),
        },
        other => InputError::InvalidSpec {
            message: other.to_string(),
        },
    })?;

    Ok(LoadResult {
        spec,
        source_kind: SourceKind::File,
        source: path.display().to_string(),
        source_hash: blake3::hash(content.as_bytes()).to_hex().to_string(),
    })
}

/// Loads a built-in preset by name.
pub fn load_preset(name: &str) -> Result<LoadResult, InputError> {
    let preset = Preset::by_name(name).map_err(|_| InputError::UnknownPreset {
        name: name.to_string(),
    })?;
    let spec = preset.to_spec();
    let source_hash = canonical_spec_hash(&spec).map_err(|e| InputError::InvalidSpec {
        message: e.to_string(),
    })?;

    Ok(LoadResult {
        spec,
        source_kind: SourceKind::Preset,
        source: preset.name().to_string(),
        source_hash,
    })
}

/// Loads from whichever of `spec_path` or `preset` is given, preferring the file.
pub fn load_input(spec_path: Option<&str>, preset: Option<&str>) -> Result<LoadResult, InputError> {
    match (spec_path, preset) {
        (Some(path), _) => load_spec(Path::new(path)),
        (None, Some(name)) => load_preset(name),
        (None, None) => Err(InputError::MissingInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_preset() {
        let result = load_preset("organ").unwrap();
        assert_eq!(result.source_kind, SourceKind::Preset);
        assert_eq!(result.spec.name, "organ");
        assert_eq!(result.source_hash.len(), 64);
    }

    #[test]
    fn test_unknown_preset() {
        let err = load_preset("piano").unwrap_err();
        assert!(matches!(err, InputError::UnknownPreset { ref name } if name == "piano"));
        assert!(err.to_string().contains("organ-20k"));
    }

    #[test]
    fn test_load_spec_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"spec_version": 1, "name": "tiny", "waveform": {{"step_count": 16, "max_value": 15}}}}"#
        )
        .unwrap();

        let result = load_spec(file.path()).unwrap();
        assert_eq!(result.source_kind, SourceKind::File);
        assert_eq!(result.spec.name, "tiny");
        assert_eq!(result.spec.waveform.unwrap().step_count, 16);
    }

    #[test]
    fn test_load_spec_rejects_unknown_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"spec_version": 1, "name": "x", "tempo": 120}}"#).unwrap();
        assert!(matches!(
            load_spec(file.path()),
            Err(InputError::JsonParse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_spec(Path::new("/nonexistent/spec.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
    }

    #[test]
    fn test_load_input_requires_a_source() {
        assert!(matches!(load_input(None, None), Err(InputError::MissingInput)));
        assert_eq!(load_input(None, Some("legacy")).unwrap().spec.name, "legacy");
    }
}
