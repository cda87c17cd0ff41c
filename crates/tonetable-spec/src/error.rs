//! Error types for table spec validation and processing.

use thiserror::Error;

/// Error codes for table spec validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Contract errors (E001-E002)
    /// E001: Unsupported spec_version
    UnsupportedSpecVersion,
    /// E002: Invalid table name
    InvalidName,

    // Frequency table errors (E003-E009)
    /// E003: Timer frequency is not a positive finite number
    InvalidSampleHz,
    /// E004: Octave count is zero or too large
    InvalidOctaveCount,
    /// E005: A4 offset lies outside the table
    A4OffsetOutOfRange,
    /// E006: Too many silent slots per octave
    TooManySilentSlots,
    /// E007: Timer resolution outside 1..=65536
    InvalidTimerResolution,
    /// E008: Pitch reference frequency is not a positive finite number
    InvalidReferenceFrequency,
    /// E009: A computed tick count does not fit in 16 bits
    TickOverflow,

    // Waveform table errors (E010-E012)
    /// E010: Step count outside 2..=65536
    InvalidStepCount,
    /// E011: Max amplitude does not fit in 8 bits
    InvalidMaxValue,
    /// E012: Drawbar level outside 0..=8
    InvalidDrawbarLevel,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedSpecVersion => "E001",
            ErrorCode::InvalidName => "E002",
            ErrorCode::InvalidSampleHz => "E003",
            ErrorCode::InvalidOctaveCount => "E004",
            ErrorCode::A4OffsetOutOfRange => "E005",
            ErrorCode::TooManySilentSlots => "E006",
            ErrorCode::InvalidTimerResolution => "E007",
            ErrorCode::InvalidReferenceFrequency => "E008",
            ErrorCode::TickOverflow => "E009",
            ErrorCode::InvalidStepCount => "E010",
            ErrorCode::InvalidMaxValue => "E011",
            ErrorCode::InvalidDrawbarLevel => "E012",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for table spec validation and generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Spec declares no table sections
    EmptySpec,
    /// W002: A pitched entry quantized to zero ticks
    ZeroTickCount,
    /// W003: A pitched entry lies above the timer's Nyquist frequency
    AboveNyquist,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::EmptySpec => "W001",
            WarningCode::ZeroTickCount => "W002",
            WarningCode::AboveNyquist => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "frequency.sample_hz").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for spec operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Unknown preset name.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of spec validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Moves all errors and warnings of `other` into this result.
    pub fn merge(&mut self, other: ValidationResult) {
        for error in other.errors {
            self.add_error(error);
        }
        self.warnings.extend(other.warnings);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Each generator error type implements this trait so the CLI can report
/// stable codes without knowing the concrete error type.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "TABLE_001". These codes are stable
    /// and can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
