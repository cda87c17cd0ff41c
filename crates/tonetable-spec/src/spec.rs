//! Table spec document.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{DrawbarRegistration, FrequencyConfig, WaveformConfig};
use crate::error::SpecError;

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// A table spec: which tables to generate and with which parameters.
///
/// Every section is optional; only the declared tables are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    /// Schema version; must be 1.
    pub spec_version: u32,

    /// Table set name, used as the output file stem.
    /// Format: `[a-z][a-z0-9_-]{0,63}`
    pub name: String,

    /// Note-frequency table parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<FrequencyConfig>,

    /// Waveform table parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waveform: Option<WaveformConfig>,

    /// Drawbar registration for the mixed organ waveform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawbars: Option<DrawbarRegistration>,
}

impl TableSpec {
    /// Creates an empty spec with the current version.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            spec_version: SPEC_VERSION,
            name: name.into(),
            frequency: None,
            waveform: None,
            drawbars: None,
        }
    }

    /// Sets the frequency table section.
    pub fn frequency(mut self, config: FrequencyConfig) -> Self {
        self.frequency = Some(config);
        self
    }

    /// Sets the waveform table section.
    pub fn waveform(mut self, config: WaveformConfig) -> Self {
        self.waveform = Some(config);
        self
    }

    /// Sets the drawbar registration.
    pub fn drawbars(mut self, registration: DrawbarRegistration) -> Self {
        self.drawbars = Some(registration);
        self
    }

    /// True when no table section is declared.
    pub fn is_empty(&self) -> bool {
        self.frequency.is_none() && self.waveform.is_none() && self.drawbars.is_none()
    }

    /// Parses a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a spec file.
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, SpecError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes the spec to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
