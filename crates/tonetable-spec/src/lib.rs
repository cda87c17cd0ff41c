//! tonetable Table Spec Library
//!
//! This crate provides the types, presets, validation, and hashing for
//! tonetable specs: JSON documents describing the static lookup tables an
//! embedded synthesizer needs.
//!
//! # Overview
//!
//! A spec declares up to three table sections:
//!
//! - **frequency**: note index to 16-bit timer tick count, one row per octave
//!   with reserved "off" slots
//! - **waveform**: 8-bit single-cycle triangle, sine, square and sawtooth tables
//! - **drawbars**: a static organ registration mixed from the sine table
//!
//! # Example
//!
//! ```
//! use tonetable_spec::{FrequencyConfig, TableSpec, WaveformConfig};
//! use tonetable_spec::validation::validate_spec;
//! use tonetable_spec::hash::canonical_spec_hash;
//!
//! let spec = TableSpec::new("organ")
//!     .frequency(FrequencyConfig::new(12500.0, 4 * 12 + 9, 8))
//!     .waveform(WaveformConfig::default());
//!
//! let result = validate_spec(&spec);
//! assert!(result.is_ok());
//!
//! let hash = canonical_spec_hash(&spec).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Generator parameters and firmware constants
//! - [`error`]: Error and warning types for validation
//! - [`hash`]: Canonical spec hashing
//! - [`note`]: Semitone indices, octaves and pitch classes
//! - [`preset`]: Built-in parameter sets
//! - [`spec`]: The spec document
//! - [`validation`]: Spec validation functions

pub mod config;
pub mod error;
pub mod hash;
pub mod note;
pub mod preset;
pub mod spec;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::{
    DrawbarRegistration, FrequencyConfig, PitchReference, RoundingMode, WaveformConfig,
    WaveformKind,
};
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::canonical_spec_hash;
pub use note::{Chroma, Note, SEMITONES_PER_OCTAVE};
pub use preset::Preset;
pub use spec::{TableSpec, SPEC_VERSION};
pub use validation::{
    validate_drawbars, validate_frequency_config, validate_spec, validate_waveform_config,
};
