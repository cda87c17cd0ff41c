//! Table spec validation.
//!
//! All configuration is checked eagerly, before any table is generated. Each
//! problem is reported with a stable code and the JSON path of the offending
//! field; validation never stops at the first error.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::{
    DrawbarRegistration, FrequencyConfig, WaveformConfig, MAX_AMPLITUDE, MAX_DRAWBAR_LEVEL,
    MAX_OCTAVE_COUNT, MAX_SILENT_SLOTS, MAX_STEP_COUNT, MAX_TIMER_RESOLUTION,
};
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::note::SEMITONES_PER_OCTAVE;
use crate::spec::{TableSpec, SPEC_VERSION};

/// Pattern a table name must match.
pub const NAME_PATTERN: &str = r"^[a-z][a-z0-9_-]{0,63}$";

static NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_REGEX.get_or_init(|| Regex::new(NAME_PATTERN).expect("invalid regex pattern"))
}

/// Checks whether a table name is valid.
///
/// ```
/// use tonetable_spec::validation::is_valid_name;
///
/// assert!(is_valid_name("organ"));
/// assert!(is_valid_name("organ-20k"));
/// assert!(!is_valid_name("Organ"));
/// assert!(!is_valid_name(""));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    name_regex().is_match(name)
}

/// Validates a complete table spec.
pub fn validate_spec(spec: &TableSpec) -> ValidationResult {
    let mut result = ValidationResult::success();

    if spec.spec_version != SPEC_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!(
                "spec_version must be {}, got {}",
                SPEC_VERSION, spec.spec_version
            ),
            "spec_version",
        ));
    }

    if !is_valid_name(&spec.name) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidName,
            format!("name must match pattern '{}', got '{}'", NAME_PATTERN, spec.name),
            "name",
        ));
    }

    if spec.is_empty() {
        result.add_warning(ValidationWarning::new(
            WarningCode::EmptySpec,
            "spec declares no frequency, waveform or drawbars section; nothing will be generated",
        ));
    }

    if let Some(ref frequency) = spec.frequency {
        result.merge(validate_frequency_at(frequency, "frequency"));
    }
    if let Some(ref waveform) = spec.waveform {
        result.merge(validate_waveform_at(waveform, "waveform"));
    }
    if let Some(ref drawbars) = spec.drawbars {
        result.merge(validate_drawbars_at(drawbars, "drawbars"));
    }

    result
}

/// Validates frequency table parameters.
///
/// Tick overflow depends on the computed frequencies and is checked by the
/// generator, not here.
pub fn validate_frequency_config(config: &FrequencyConfig) -> ValidationResult {
    validate_frequency_at(config, "frequency")
}

/// Validates waveform table parameters.
pub fn validate_waveform_config(config: &WaveformConfig) -> ValidationResult {
    validate_waveform_at(config, "waveform")
}

/// Validates a drawbar registration.
pub fn validate_drawbars(registration: &DrawbarRegistration) -> ValidationResult {
    validate_drawbars_at(registration, "drawbars")
}

fn validate_frequency_at(config: &FrequencyConfig, prefix: &str) -> ValidationResult {
    let mut result = ValidationResult::success();

    if !config.sample_hz.is_finite() || config.sample_hz <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleHz,
            format!(
                "sample_hz must be a positive finite number, got {}",
                config.sample_hz
            ),
            format!("{}.sample_hz", prefix),
        ));
    }

    let octaves_ok = (1..=MAX_OCTAVE_COUNT).contains(&config.octave_count);
    if !octaves_ok {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidOctaveCount,
            format!(
                "octave_count must be in 1..={}, got {}",
                MAX_OCTAVE_COUNT, config.octave_count
            ),
            format!("{}.octave_count", prefix),
        ));
    }

    // Only meaningful once the table size itself is known to be valid.
    if octaves_ok {
        let note_count = config.octave_count * SEMITONES_PER_OCTAVE;
        if config.a4_offset >= note_count {
            result.add_error(ValidationError::with_path(
                ErrorCode::A4OffsetOutOfRange,
                format!(
                    "a4_offset must be in [0, {}) for {} octave(s), got {}",
                    note_count, config.octave_count, config.a4_offset
                ),
                format!("{}.a4_offset", prefix),
            ));
        }
    }

    if config.silent_slots_per_octave > MAX_SILENT_SLOTS {
        result.add_error(ValidationError::with_path(
            ErrorCode::TooManySilentSlots,
            format!(
                "silent_slots_per_octave must be at most {}, got {}",
                MAX_SILENT_SLOTS, config.silent_slots_per_octave
            ),
            format!("{}.silent_slots_per_octave", prefix),
        ));
    }

    if !(1..=MAX_TIMER_RESOLUTION).contains(&config.timer_resolution) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidTimerResolution,
            format!(
                "timer_resolution must be in 1..={}, got {}",
                MAX_TIMER_RESOLUTION, config.timer_resolution
            ),
            format!("{}.timer_resolution", prefix),
        ));
    }

    let hz = config.reference.hz();
    if !hz.is_finite() || hz <= 0.0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidReferenceFrequency,
            format!("reference.hz must be a positive finite number, got {}", hz),
            format!("{}.reference.hz", prefix),
        ));
    }

    result
}

fn validate_waveform_at(config: &WaveformConfig, prefix: &str) -> ValidationResult {
    let mut result = ValidationResult::success();

    if !(2..=MAX_STEP_COUNT).contains(&config.step_count) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidStepCount,
            format!(
                "step_count must be in 2..={}, got {}",
                MAX_STEP_COUNT, config.step_count
            ),
            format!("{}.step_count", prefix),
        ));
    }

    if config.max_value > MAX_AMPLITUDE {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidMaxValue,
            format!(
                "max_value must fit in 8 bits (at most {}), got {}",
                MAX_AMPLITUDE, config.max_value
            ),
            format!("{}.max_value", prefix),
        ));
    }

    result
}

fn validate_drawbars_at(registration: &DrawbarRegistration, prefix: &str) -> ValidationResult {
    let mut result = ValidationResult::success();

    for (i, &level) in registration.levels.iter().enumerate() {
        if level > MAX_DRAWBAR_LEVEL {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidDrawbarLevel,
                format!(
                    "drawbar level must be in 0..={}, got {}",
                    MAX_DRAWBAR_LEVEL, level
                ),
                format!("{}.levels[{}]", prefix, i),
            ));
        }
    }

    result
}
