//! Built-in parameter sets.
//!
//! Each preset reproduces a parameter set the organ firmware has shipped
//! with, so the tables can be regenerated without a spec file.

use crate::config::{
    DrawbarRegistration, FrequencyConfig, PitchReference, WaveformConfig, C0_HZ,
};
use crate::error::SpecError;
use crate::spec::TableSpec;

/// Named built-in table parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// 12.5 kHz sample timer, A4-anchored, eight octaves.
    Organ,
    /// 20 kHz sample timer (8 MHz / 8 / 50), otherwise as `Organ`.
    Organ20k,
    /// 10 kHz timer, C0-anchored, 65535 resolution, seven octaves.
    Legacy,
}

impl Preset {
    /// Returns all presets.
    pub fn all() -> &'static [Preset] {
        &[Preset::Organ, Preset::Organ20k, Preset::Legacy]
    }

    /// Returns the preset name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Organ => "organ",
            Preset::Organ20k => "organ-20k",
            Preset::Legacy => "legacy",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            Preset::Organ => "12.5 kHz timer, A4 = 440 Hz at index 57, 8 octaves",
            Preset::Organ20k => "20 kHz timer, A4 = 440 Hz at index 57, 8 octaves",
            Preset::Legacy => "10 kHz timer, C0 = 16.35 Hz base, 65535 resolution, 7 octaves",
        }
    }

    /// Looks a preset up by name.
    pub fn by_name(name: &str) -> Result<Self, SpecError> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.name() == name)
            .ok_or_else(|| SpecError::UnknownPreset(name.to_string()))
    }

    /// Frequency table parameters of the preset.
    pub fn frequency_config(&self) -> FrequencyConfig {
        match self {
            Preset::Organ => FrequencyConfig::new(12500.0, 4 * 12 + 9, 8),
            Preset::Organ20k => FrequencyConfig::new(20000.0, 4 * 12 + 9, 8),
            Preset::Legacy => FrequencyConfig::new(10000.0, 4 * 12 + 9, 7)
                .with_timer_resolution(65535)
                .with_reference(PitchReference::Base { hz: C0_HZ }),
        }
    }

    /// Builds the full table spec of the preset.
    pub fn to_spec(&self) -> TableSpec {
        let spec = TableSpec::new(self.name())
            .frequency(self.frequency_config())
            .waveform(WaveformConfig::default());
        match self {
            Preset::Organ | Preset::Organ20k => spec.drawbars(DrawbarRegistration::default()),
            Preset::Legacy => spec,
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
