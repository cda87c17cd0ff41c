//! Drawbar organ waveform.
//!
//! Mixes the sine table at the nine Hammond drawbar harmonics into a single
//! cycle, weighted by a static registration:
//!
//! ```text
//! mix[i] = sum_h(sine[(i * step_h) mod n] * level_h) / sum_h(level_h)
//! ```
//!
//! Integer division; the divisor is 1 when all levels are zero.

use serde::Serialize;
use tonetable_spec::config::DRAWBAR_HARMONICS;
use tonetable_spec::{
    validate_drawbars, validate_waveform_config, DrawbarRegistration, WaveformConfig, WaveformKind,
};

use crate::error::TableResult;
use crate::hash::hash_u8_table;
use crate::waveform::{generate_waveform, WaveformSample};

/// A mixed organ waveform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawbarTable {
    /// Registration the table was mixed from.
    pub registration: DrawbarRegistration,
    /// Samples ordered by phase index.
    pub samples: Vec<WaveformSample>,
}

impl DrawbarTable {
    /// Amplitudes in phase order.
    pub fn amplitudes(&self) -> Vec<u8> {
        self.samples.iter().map(|s| s.amplitude).collect()
    }

    /// BLAKE3 hash of the amplitudes.
    pub fn hash(&self) -> String {
        hash_u8_table(&self.amplitudes())
    }
}

/// Mixes a drawbar registration into a single waveform.
pub fn generate_drawbar_table(
    registration: &DrawbarRegistration,
    config: &WaveformConfig,
) -> TableResult<DrawbarTable> {
    let mut validation = validate_waveform_config(config);
    validation.merge(validate_drawbars(registration));
    validation.into_result()?;

    let sine = generate_waveform(WaveformKind::Sine, config)?.amplitudes();
    let n = sine.len();
    let total = registration.total_level().max(1);

    let samples = (0..n)
        .map(|i| {
            let mix: u32 = DRAWBAR_HARMONICS
                .iter()
                .zip(registration.levels.iter())
                .map(|(&step, &level)| {
                    let phase = (i * step as usize) % n;
                    sine[phase] as u32 * level as u32
                })
                .sum();
            WaveformSample {
                phase_index: i as u32,
                // Each term is at most max_value * level, so the quotient fits.
                amplitude: (mix / total) as u8,
            }
        })
        .collect();

    Ok(DrawbarTable {
        registration: *registration,
        samples,
    })
}
