//! tonetable Table Backend
//!
//! This crate generates the static lookup tables declared by a
//! [`tonetable_spec::TableSpec`]:
//!
//! - [`frequency`] - note index to 16-bit phase-accumulator tick count
//! - [`waveform`] - 8-bit triangle, sine, square and sawtooth cycles
//! - [`drawbar`] - a drawbar organ registration mixed from the sine cycle
//!
//! # Determinism
//!
//! Every generator is a pure function of its configuration. Generating twice
//! from the same spec yields identical tables and identical BLAKE3 hashes.
//!
//! # Example
//!
//! ```
//! use tonetable_backend::generate;
//! use tonetable_spec::{Preset, WaveformKind};
//!
//! let result = generate(&Preset::Organ.to_spec()).unwrap();
//!
//! let frequency = result.frequency.unwrap();
//! assert_eq!(frequency.entries[frequency.a4_index].tick_count, 2307);
//!
//! let waves = result.waveforms.unwrap();
//! assert_eq!(waves.get(WaveformKind::Square).amplitude(128), Some(255));
//! ```

pub mod drawbar;
pub mod error;
pub mod frequency;
pub mod generate;
pub mod hash;
pub mod waveform;

// Re-export main types at crate root
pub use drawbar::{generate_drawbar_table, DrawbarTable};
pub use error::{TableError, TableResult};
pub use frequency::{generate_frequency_table, FrequencyTable, FrequencyTableEntry};
pub use generate::{generate, GenerateResult};
pub use waveform::{
    generate_waveform, generate_waveform_bank, WaveformBank, WaveformSample, WaveformTable,
};
