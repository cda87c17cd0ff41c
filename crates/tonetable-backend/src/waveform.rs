//! Single-cycle waveform table generation.
//!
//! Each table samples one period at `step_count` equally spaced phase points
//! and quantizes to `0..=max_value`. With `n = step_count`, `m = max_value`
//! and `half = n / 2`:
//!
//! | kind     | amplitude at phase `i`                                   |
//! |----------|----------------------------------------------------------|
//! | sine     | `round(m/2 * (1 + sin(2πi/n - π/2)))`                    |
//! | triangle | `m` at `half`, else `round(i * (m+1)/half)` rising and   |
//! |          | `round((n-i) * (m+1)/half)` falling                      |
//! | square   | `0` below `half`, `m` from `half` on                     |
//! | sawtooth | `i` when `n - 1 == m`, else `round(i * m / (n-1))`       |
//!
//! For the default 256 steps and 255 maximum the triangle is exactly `2i`
//! rising and `256 - 2(i - 128)` falling; the peak at 128 is pinned to 255
//! since `2 * 128` does not fit in a byte.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::Serialize;
use tonetable_spec::{validate_waveform_config, WaveformConfig, WaveformKind};

use crate::error::TableResult;
use crate::hash::hash_u8_table;

/// One quantized sample of a waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WaveformSample {
    /// Phase step, `0..step_count`.
    pub phase_index: u32,
    /// Quantized amplitude, `0..=max_value`.
    pub amplitude: u8,
}

/// One generated waveform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveformTable {
    /// Waveform kind.
    pub kind: WaveformKind,
    /// Samples ordered by phase index.
    pub samples: Vec<WaveformSample>,
}

impl WaveformTable {
    /// Amplitudes in phase order, as emitted into firmware.
    pub fn amplitudes(&self) -> Vec<u8> {
        self.samples.iter().map(|s| s.amplitude).collect()
    }

    /// Amplitude at a phase index.
    pub fn amplitude(&self, phase_index: usize) -> Option<u8> {
        self.samples.get(phase_index).map(|s| s.amplitude)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the table has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// BLAKE3 hash of the amplitudes.
    pub fn hash(&self) -> String {
        hash_u8_table(&self.amplitudes())
    }
}

/// All four waveforms, in firmware selector order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveformBank {
    /// Parameters the tables were generated with.
    pub config: WaveformConfig,
    /// Tables indexed by [`WaveformKind::id`].
    pub tables: Vec<WaveformTable>,
}

impl WaveformBank {
    /// The table for a kind.
    pub fn get(&self, kind: WaveformKind) -> &WaveformTable {
        &self.tables[kind.id() as usize]
    }

    /// Amplitudes of all tables concatenated, i.e. `WAVE[kind][phase]` flattened.
    pub fn flattened(&self) -> Vec<u8> {
        self.tables.iter().flat_map(|t| t.amplitudes()).collect()
    }

    /// BLAKE3 hash of the flattened bank.
    pub fn hash(&self) -> String {
        hash_u8_table(&self.flattened())
    }
}

/// Generates one waveform table.
///
/// # Example
/// ```
/// use tonetable_backend::waveform::generate_waveform;
/// use tonetable_spec::{WaveformConfig, WaveformKind};
///
/// let triangle = generate_waveform(WaveformKind::Triangle, &WaveformConfig::default()).unwrap();
/// assert_eq!(triangle.amplitude(0), Some(0));
/// assert_eq!(triangle.amplitude(128), Some(255));
/// ```
pub fn generate_waveform(kind: WaveformKind, config: &WaveformConfig) -> TableResult<WaveformTable> {
    validate_waveform_config(config).into_result()?;
    Ok(build_table(kind, config))
}

/// Generates all four waveform tables in selector order.
pub fn generate_waveform_bank(config: &WaveformConfig) -> TableResult<WaveformBank> {
    validate_waveform_config(config).into_result()?;
    let tables = WaveformKind::ALL
        .iter()
        .map(|&kind| build_table(kind, config))
        .collect();
    Ok(WaveformBank {
        config: *config,
        tables,
    })
}

fn build_table(kind: WaveformKind, config: &WaveformConfig) -> WaveformTable {
    let samples = (0..config.step_count)
        .map(|phase_index| WaveformSample {
            phase_index,
            amplitude: amplitude(kind, phase_index, config),
        })
        .collect();
    WaveformTable { kind, samples }
}

/// Amplitude of `kind` at phase `i`. Assumes a validated config.
fn amplitude(kind: WaveformKind, i: u32, config: &WaveformConfig) -> u8 {
    let n = config.step_count;
    let m = config.max_value;
    let half = n / 2;

    let value = match kind {
        WaveformKind::Sine => {
            let phase = TAU * i as f64 / n as f64 - FRAC_PI_2;
            (m as f64 * 0.5 * (1.0 + phase.sin())).round() as u32
        }
        WaveformKind::Triangle => {
            if i == half {
                m
            } else {
                let slope = (m + 1) as f64 / half as f64;
                let distance = if i < half { i } else { n - i };
                (distance as f64 * slope).round() as u32
            }
        }
        WaveformKind::Square => {
            if i < half {
                0
            } else {
                m
            }
        }
        WaveformKind::Sawtooth => {
            if config.is_identity_ramp() {
                i
            } else {
                (i as f64 * m as f64 / (n - 1) as f64).round() as u32
            }
        }
    };

    value.min(m) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tonetable_spec::ErrorCode;

    use crate::error::TableError;

    fn default_table(kind: WaveformKind) -> WaveformTable {
        generate_waveform(kind, &WaveformConfig::default()).unwrap()
    }

    #[test]
    fn test_triangle_shape() {
        let triangle = default_table(WaveformKind::Triangle);
        assert_eq!(triangle.len(), 256);
        assert_eq!(triangle.amplitude(0), Some(0));
        assert_eq!(triangle.amplitude(1), Some(2));
        assert_eq!(triangle.amplitude(127), Some(254));
        assert_eq!(triangle.amplitude(128), Some(255));
        assert_eq!(triangle.amplitude(129), Some(254));
        assert_eq!(triangle.amplitude(255), Some(2));
        for i in 0..128u32 {
            assert_eq!(triangle.amplitude(i as usize), Some((2 * i) as u8));
        }
        for i in 129..256u32 {
            assert_eq!(triangle.amplitude(i as usize), Some((256 - 2 * (i - 128)) as u8));
        }
    }

    #[test]
    fn test_sine_shape() {
        let sine = default_table(WaveformKind::Sine);
        assert_eq!(sine.amplitude(0), Some(0));
        assert_eq!(sine.amplitude(1), Some(0));
        assert_eq!(sine.amplitude(32), Some(37));
        assert_eq!(sine.amplitude(64), Some(128));
        assert_eq!(sine.amplitude(128), Some(255));
        assert_eq!(sine.amplitude(192), Some(128));
    }

    #[test]
    fn test_square_shape() {
        let square = default_table(WaveformKind::Square);
        let amplitudes = square.amplitudes();
        assert!(amplitudes[..128].iter().all(|&a| a == 0));
        assert!(amplitudes[128..].iter().all(|&a| a == 255));
    }

    #[test]
    fn test_sawtooth_identity() {
        let saw = default_table(WaveformKind::Sawtooth);
        let expected: Vec<u8> = (0..=255).collect();
        assert_eq!(saw.amplitudes(), expected);
    }

    #[test]
    fn test_sawtooth_rescaled() {
        let saw = generate_waveform(WaveformKind::Sawtooth, &WaveformConfig::new(128, 255)).unwrap();
        assert_eq!(saw.amplitude(0), Some(0));
        assert_eq!(saw.amplitude(127), Some(255));
        // 64 * 255 / 127 = 128.5
        assert_eq!(saw.amplitude(64), Some(129));
    }

    #[test]
    fn test_small_range() {
        let config = WaveformConfig::new(16, 15);
        let bank = generate_waveform_bank(&config).unwrap();
        for table in &bank.tables {
            assert_eq!(table.len(), 16);
            assert!(table.amplitudes().iter().all(|&a| a <= 15), "{}", table.kind);
        }
        assert_eq!(bank.get(WaveformKind::Triangle).amplitude(8), Some(15));
        assert_eq!(bank.get(WaveformKind::Triangle).amplitude(7), Some(14));
    }

    #[test]
    fn test_bank_order() {
        let bank = generate_waveform_bank(&WaveformConfig::default()).unwrap();
        let kinds: Vec<WaveformKind> = bank.tables.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, WaveformKind::ALL.to_vec());
        assert_eq!(bank.flattened().len(), 4 * 256);
        assert_eq!(bank.flattened()[3 * 256 + 200], 200);
    }

    #[test]
    fn test_phase_indices_contiguous() {
        let sine = default_table(WaveformKind::Sine);
        for (i, sample) in sine.samples.iter().enumerate() {
            assert_eq!(sample.phase_index as usize, i);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = generate_waveform(WaveformKind::Sine, &WaveformConfig::new(0, 255)).unwrap_err();
        match err {
            TableError::InvalidConfig(errors) => {
                assert_eq!(errors[0].code, ErrorCode::InvalidStepCount)
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(generate_waveform_bank(&WaveformConfig::new(256, 300)).is_err());
    }
}
