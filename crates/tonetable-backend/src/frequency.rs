//! Note-frequency table generation.
//!
//! The table maps note indices to the increment a 16-bit phase accumulator
//! needs per timer interrupt to play that note:
//!
//! ```text
//! freq = 440 * 2^((index - a4_offset) / 12)
//! tick = round(freq * timer_resolution / sample_hz)
//! ```
//!
//! Entries are laid out one octave per row. Each row starts with
//! `silent_slots_per_octave` zero entries, which the firmware selects to
//! silence a voice, followed by the twelve pitched entries C..B.

use serde::Serialize;
use tonetable_spec::config::MAX_TICK_COUNT;
use tonetable_spec::{
    validate_frequency_config, Chroma, FrequencyConfig, Note, ValidationWarning, WarningCode,
    SEMITONES_PER_OCTAVE,
};

use crate::error::{TableError, TableResult};
use crate::hash::hash_u16_table;

/// Label of the reserved silent entries.
pub const OFF_LABEL: &str = "off";

/// A single entry of the frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTableEntry {
    /// Position in the flattened table.
    pub array_index: usize,
    /// Phase increment per timer interrupt; 0 for silent slots.
    pub tick_count: u16,
    /// Note label (`"A4"`) or `"off"`.
    pub label: String,
    /// The note, for pitched entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<Note>,
    /// Exact, unquantized frequency in Hz, for pitched entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<f64>,
}

impl FrequencyTableEntry {
    fn silent(array_index: usize) -> Self {
        Self {
            array_index,
            tick_count: 0,
            label: OFF_LABEL.to_string(),
            note: None,
            frequency_hz: None,
        }
    }

    /// True for the reserved "off" slots.
    pub fn is_silent(&self) -> bool {
        self.note.is_none()
    }
}

/// A generated note-frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    /// All entries, ordered by `array_index`.
    pub entries: Vec<FrequencyTableEntry>,
    /// Flattened index of the A4 entry.
    pub a4_index: usize,
    /// Entries per octave row.
    pub row_width: usize,
    /// Silent entries at the start of each row.
    pub silent_slots: usize,
    /// Non-fatal findings (zero ticks, notes above Nyquist).
    #[serde(skip)]
    pub warnings: Vec<ValidationWarning>,
}

impl FrequencyTable {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of octave rows.
    pub fn octave_count(&self) -> usize {
        self.entries.len() / self.row_width
    }

    /// Tick counts in table order, as emitted into firmware.
    pub fn tick_counts(&self) -> Vec<u16> {
        self.entries.iter().map(|e| e.tick_count).collect()
    }

    /// Iterates over octave rows.
    pub fn rows(&self) -> std::slice::Chunks<'_, FrequencyTableEntry> {
        self.entries.chunks(self.row_width)
    }

    /// The A4 entry.
    pub fn a4_entry(&self) -> Option<&FrequencyTableEntry> {
        self.entries.get(self.a4_index)
    }

    /// Looks up the pitched entry for a note, using the firmware's indexing
    /// `octave * row_width + silent_slots + chroma`.
    pub fn entry_for(&self, note: Note) -> Option<&FrequencyTableEntry> {
        let index = note.octave() as usize * self.row_width
            + self.silent_slots
            + note.chroma().semitone() as usize;
        self.entries.get(index)
    }

    /// Looks up the pitched entry for an octave and pitch class.
    pub fn entry(&self, octave: u32, chroma: Chroma) -> Option<&FrequencyTableEntry> {
        self.entry_for(Note::from_parts(octave, chroma))
    }

    /// BLAKE3 hash of the tick counts (little-endian `u16`s).
    pub fn hash(&self) -> String {
        hash_u16_table(&self.tick_counts())
    }
}

/// Generates the note-frequency table.
///
/// The configuration is validated first; any error, including a tick count
/// above 65535, aborts generation without returning a partial table.
///
/// # Example
/// ```
/// use tonetable_backend::frequency::generate_frequency_table;
/// use tonetable_spec::FrequencyConfig;
///
/// let table = generate_frequency_table(&FrequencyConfig::new(12500.0, 57, 8)).unwrap();
/// let a4 = table.a4_entry().unwrap();
/// assert_eq!((a4.array_index, a4.tick_count, a4.label.as_str()), (77, 2307, "A4"));
/// ```
pub fn generate_frequency_table(config: &FrequencyConfig) -> TableResult<FrequencyTable> {
    let warnings = validate_frequency_config(config).into_result()?;

    let mut table = FrequencyTable {
        entries: Vec::with_capacity(config.entry_count()),
        a4_index: config.a4_index(),
        row_width: config.row_width(),
        silent_slots: config.silent_slots_per_octave as usize,
        warnings,
    };

    let nyquist_hz = config.sample_hz / 2.0;
    let ticks_per_hz = config.timer_resolution as f64 / config.sample_hz;

    for octave in 0..config.octave_count {
        for _ in 0..config.silent_slots_per_octave {
            let array_index = table.entries.len();
            table.entries.push(FrequencyTableEntry::silent(array_index));
        }

        for semitone in 0..SEMITONES_PER_OCTAVE {
            let array_index = table.entries.len();
            let note = Note::new(octave * SEMITONES_PER_OCTAVE + semitone);
            let frequency_hz = config.reference.frequency(note.index(), config.a4_offset);
            let ticks = config.rounding.apply(frequency_hz * ticks_per_hz);

            if ticks > MAX_TICK_COUNT as f64 {
                return Err(TableError::TickOverflow {
                    array_index,
                    label: note.label(),
                    frequency_hz,
                    tick_count: ticks as u64,
                    max: MAX_TICK_COUNT,
                });
            }
            let tick_count = ticks as u16;

            if tick_count == 0 {
                table.warnings.push(ValidationWarning::with_path(
                    WarningCode::ZeroTickCount,
                    format!(
                        "{} ({:.3} Hz) quantizes to 0 ticks and will play as silence",
                        note, frequency_hz
                    ),
                    format!("frequency[{}]", array_index),
                ));
            }
            if frequency_hz > nyquist_hz {
                table.warnings.push(ValidationWarning::with_path(
                    WarningCode::AboveNyquist,
                    format!(
                        "{} ({:.3} Hz) is above the timer Nyquist frequency {:.3} Hz and will alias",
                        note, frequency_hz, nyquist_hz
                    ),
                    format!("frequency[{}]", array_index),
                ));
            }

            table.entries.push(FrequencyTableEntry {
                array_index,
                tick_count,
                label: note.label(),
                note: Some(note),
                frequency_hz: Some(frequency_hz),
            });
        }
    }

    Ok(table)
}
