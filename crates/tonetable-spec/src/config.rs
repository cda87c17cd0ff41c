//! Generator configuration types.
//!
//! Every constant the firmware tables depend on (silent slots, timer width,
//! waveform step count) is a named, validated field here rather than a literal
//! inside a generator.

use serde::{Deserialize, Serialize};

use crate::note::SEMITONES_PER_OCTAVE;

/// Default number of reserved "off" entries at the start of each octave row.
pub const DEFAULT_SILENT_SLOTS: u32 = 4;

/// Default wraparound range of the 16-bit hardware phase accumulator.
pub const DEFAULT_TIMER_RESOLUTION: u32 = 65536;

/// Largest timer resolution accepted.
pub const MAX_TIMER_RESOLUTION: u32 = 65536;

/// Largest tick count representable by the firmware's `uint16_t` table.
pub const MAX_TICK_COUNT: u32 = u16::MAX as u32;

/// Largest octave count accepted.
///
/// Note indices, labels and table sizes are computed in `u32`, and octave 32
/// already starts near 7e10 Hz, so no 16-bit tick table can reach it.
pub const MAX_OCTAVE_COUNT: u32 = 32;

/// Largest number of silent slots per octave accepted.
pub const MAX_SILENT_SLOTS: u32 = 64;

/// Concert pitch of A4 in Hz.
pub const A4_HZ: f64 = 440.0;

/// Frequency of C0 in Hz, used by base-anchored tables.
pub const C0_HZ: f64 = 16.3515976563;

/// Default number of phase steps per waveform cycle.
pub const DEFAULT_STEP_COUNT: u32 = 256;

/// Default maximum amplitude of a waveform sample.
pub const DEFAULT_MAX_VALUE: u32 = 255;

/// Largest step count accepted.
pub const MAX_STEP_COUNT: u32 = 65536;

/// Largest amplitude that fits in a `uint8_t` sample.
pub const MAX_AMPLITUDE: u32 = u8::MAX as u32;

/// Number of drawbars on the organ.
pub const DRAWBAR_COUNT: usize = 9;

/// Maximum drawbar level.
pub const MAX_DRAWBAR_LEVEL: u8 = 8;

/// Phase increment per sample for each drawbar, in Hammond drawbar order:
/// 16', 5 1/3', 8', 4', 2 2/3', 2', 1 3/5', 1 1/3', 1'.
pub const DRAWBAR_HARMONICS: [u32; DRAWBAR_COUNT] = [1, 3, 2, 4, 6, 8, 10, 12, 16];

/// How a note's frequency is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PitchReference {
    /// `hz` is the frequency of the note at `a4_offset`.
    A4 {
        /// Frequency of A4 in Hz.
        hz: f64,
    },
    /// `hz` is the frequency of note index 0.
    Base {
        /// Frequency of the lowest table note in Hz.
        hz: f64,
    },
}

impl PitchReference {
    /// Returns the reference frequency in Hz.
    pub fn hz(&self) -> f64 {
        match self {
            PitchReference::A4 { hz } | PitchReference::Base { hz } => *hz,
        }
    }

    /// Equal-tempered frequency of `freq_index`.
    ///
    /// ```
    /// use tonetable_spec::PitchReference;
    ///
    /// let reference = PitchReference::default();
    /// assert_eq!(reference.frequency(57, 57), 440.0);
    /// assert!((reference.frequency(69, 57) - 880.0).abs() < 1e-9);
    /// ```
    pub fn frequency(&self, freq_index: u32, a4_offset: u32) -> f64 {
        match self {
            PitchReference::A4 { hz } => {
                let semitones = freq_index as f64 - a4_offset as f64;
                hz * 2.0_f64.powf(semitones / SEMITONES_PER_OCTAVE as f64)
            }
            PitchReference::Base { hz } => {
                hz * 2.0_f64.powf(freq_index as f64 / SEMITONES_PER_OCTAVE as f64)
            }
        }
    }
}

impl Default for PitchReference {
    fn default() -> Self {
        PitchReference::A4 { hz: A4_HZ }
    }
}

/// Rule used to quantize a fractional tick count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to nearest, ties away from zero (2306.5 -> 2307).
    #[default]
    HalfAwayFromZero,
    /// Drop the fractional part.
    Truncate,
}

impl RoundingMode {
    /// Applies the rounding rule to a non-negative value.
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfAwayFromZero => value.round(),
            RoundingMode::Truncate => value.trunc(),
        }
    }

    /// Returns the mode as its serialized string.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::HalfAwayFromZero => "half_away_from_zero",
            RoundingMode::Truncate => "truncate",
        }
    }
}

fn default_silent_slots() -> u32 {
    DEFAULT_SILENT_SLOTS
}

fn default_timer_resolution() -> u32 {
    DEFAULT_TIMER_RESOLUTION
}

/// Parameters of the note-frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrequencyConfig {
    /// Frequency of the timer interrupt that advances the oscillators, in Hz.
    pub sample_hz: f64,
    /// Semitone index of A4, counted from the table's lowest C.
    pub a4_offset: u32,
    /// Number of octave rows to emit.
    pub octave_count: u32,
    /// Reserved zero entries prepended to each octave row.
    #[serde(default = "default_silent_slots")]
    pub silent_slots_per_octave: u32,
    /// Wraparound range of the phase accumulator.
    #[serde(default = "default_timer_resolution")]
    pub timer_resolution: u32,
    /// Pitch anchor.
    #[serde(default)]
    pub reference: PitchReference,
    /// Tick quantization rule.
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl FrequencyConfig {
    /// Creates a config with the default slots, resolution, reference and rounding.
    pub fn new(sample_hz: f64, a4_offset: u32, octave_count: u32) -> Self {
        Self {
            sample_hz,
            a4_offset,
            octave_count,
            silent_slots_per_octave: DEFAULT_SILENT_SLOTS,
            timer_resolution: DEFAULT_TIMER_RESOLUTION,
            reference: PitchReference::default(),
            rounding: RoundingMode::default(),
        }
    }

    /// Sets the number of silent slots per octave.
    pub fn with_silent_slots(mut self, slots: u32) -> Self {
        self.silent_slots_per_octave = slots;
        self
    }

    /// Sets the timer resolution.
    pub fn with_timer_resolution(mut self, resolution: u32) -> Self {
        self.timer_resolution = resolution;
        self
    }

    /// Sets the pitch reference.
    pub fn with_reference(mut self, reference: PitchReference) -> Self {
        self.reference = reference;
        self
    }

    /// Sets the rounding mode.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Number of entries in one octave row.
    pub fn row_width(&self) -> usize {
        self.silent_slots_per_octave as usize + SEMITONES_PER_OCTAVE as usize
    }

    /// Total number of table entries.
    pub fn entry_count(&self) -> usize {
        self.octave_count as usize * self.row_width()
    }

    /// Flattened array index of the A4 entry.
    ///
    /// ```
    /// use tonetable_spec::FrequencyConfig;
    ///
    /// let config = FrequencyConfig::new(12500.0, 4 * 12 + 9, 8);
    /// assert_eq!(config.a4_index(), 77);
    /// ```
    pub fn a4_index(&self) -> usize {
        let octave = (self.a4_offset / SEMITONES_PER_OCTAVE) as usize;
        let chroma = (self.a4_offset % SEMITONES_PER_OCTAVE) as usize;
        octave * self.row_width() + chroma + self.silent_slots_per_octave as usize
    }
}

/// Waveform identifiers shared with the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveformKind {
    /// Linear ramp up then down.
    Triangle = 0,
    /// Raised sine starting at its minimum.
    Sine = 1,
    /// 50% duty cycle, low then high.
    Square = 2,
    /// Linear ramp up.
    Sawtooth = 3,
}

impl WaveformKind {
    /// All kinds in firmware selector order.
    pub const ALL: [WaveformKind; 4] = [
        WaveformKind::Triangle,
        WaveformKind::Sine,
        WaveformKind::Square,
        WaveformKind::Sawtooth,
    ];

    /// Firmware selector id.
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Looks a kind up by its selector id.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Returns the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveformKind::Triangle => "triangle",
            WaveformKind::Sine => "sine",
            WaveformKind::Square => "square",
            WaveformKind::Sawtooth => "sawtooth",
        }
    }
}

impl std::fmt::Display for WaveformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WaveformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "triangle" => Ok(WaveformKind::Triangle),
            "sine" => Ok(WaveformKind::Sine),
            "square" => Ok(WaveformKind::Square),
            "sawtooth" | "saw" => Ok(WaveformKind::Sawtooth),
            _ => Err(format!("unknown waveform kind: {}", s)),
        }
    }
}

fn default_step_count() -> u32 {
    DEFAULT_STEP_COUNT
}

fn default_max_value() -> u32 {
    DEFAULT_MAX_VALUE
}

/// Parameters of the waveform tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveformConfig {
    /// Samples per cycle.
    #[serde(default = "default_step_count")]
    pub step_count: u32,
    /// Largest amplitude.
    #[serde(default = "default_max_value")]
    pub max_value: u32,
}

impl WaveformConfig {
    /// Creates a config with explicit step count and amplitude range.
    pub fn new(step_count: u32, max_value: u32) -> Self {
        Self {
            step_count,
            max_value,
        }
    }

    /// True when a sawtooth can use the phase index directly as amplitude.
    pub fn is_identity_ramp(&self) -> bool {
        self.step_count.checked_sub(1) == Some(self.max_value)
    }
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_COUNT, DEFAULT_MAX_VALUE)
    }
}

/// A static drawbar registration mixed into a single organ waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawbarRegistration {
    /// Level of each drawbar, in Hammond order, `0..=8`.
    pub levels: [u8; DRAWBAR_COUNT],
}

impl DrawbarRegistration {
    /// Creates a registration from drawbar levels.
    pub fn new(levels: [u8; DRAWBAR_COUNT]) -> Self {
        Self { levels }
    }

    /// Sum of all drawbar levels.
    pub fn total_level(&self) -> u32 {
        self.levels.iter().map(|&l| l as u32).sum()
    }
}

impl Default for DrawbarRegistration {
    /// The 8' drawbar alone, as the organ powers up.
    fn default() -> Self {
        let mut levels = [0; DRAWBAR_COUNT];
        levels[2] = 1;
        Self { levels }
    }
}
