//! Error types for table generation.

use thiserror::Error;
use tonetable_spec::{BackendError, ErrorCode, ValidationError};

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that abort table generation.
///
/// A failed generation never yields a partial table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Configuration failed validation before generation started.
    #[error("invalid table configuration: {}", join_errors(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// A computed tick count does not fit the 16-bit table.
    #[error(
        "tick count {tick_count} for entry {array_index} ({label}, {frequency_hz:.3} Hz) exceeds {max}"
    )]
    TickOverflow {
        /// Flattened index of the offending entry.
        array_index: usize,
        /// Note label of the offending entry.
        label: String,
        /// Exact frequency of the note.
        frequency_hz: f64,
        /// Quantized tick count that overflowed.
        tick_count: u64,
        /// Largest representable tick count.
        max: u32,
    },
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl TableError {
    /// Expresses the error as validation errors with codes and JSON paths.
    pub fn validation_errors(&self) -> Vec<ValidationError> {
        match self {
            TableError::InvalidConfig(errors) => errors.clone(),
            TableError::TickOverflow { array_index, .. } => vec![ValidationError::with_path(
                ErrorCode::TickOverflow,
                self.to_string(),
                format!("frequency[{}]", array_index),
            )],
        }
    }
}

impl From<Vec<ValidationError>> for TableError {
    fn from(errors: Vec<ValidationError>) -> Self {
        TableError::InvalidConfig(errors)
    }
}

impl BackendError for TableError {
    fn code(&self) -> &'static str {
        match self {
            TableError::InvalidConfig(_) => "TABLE_001",
            TableError::TickOverflow { .. } => "TABLE_002",
        }
    }

    fn category(&self) -> &'static str {
        "table"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message() {
        let err = TableError::TickOverflow {
            array_index: 123,
            label: "G7".to_string(),
            frequency_hz: 3135.9635,
            tick_count: 68506,
            max: 65535,
        };
        let message = err.to_string();
        assert!(message.contains("123"));
        assert!(message.contains("G7"));
        assert!(message.contains("68506"));
        assert_eq!(err.code(), "TABLE_002");

        let errors = err.validation_errors();
        assert_eq!(errors[0].code, ErrorCode::TickOverflow);
        assert_eq!(errors[0].path.as_deref(), Some("frequency[123]"));
    }

    #[test]
    fn test_invalid_config_lists_errors() {
        let err = TableError::from(vec![
            ValidationError::new(ErrorCode::InvalidSampleHz, "bad rate"),
            ValidationError::new(ErrorCode::InvalidOctaveCount, "bad octaves"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid table configuration: E003: bad rate; E004: bad octaves"
        );
        assert_eq!(err.category(), "table");
    }
}
