//! Property-based tests for table generation using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tonetable-backend --test proptest_tables
//! ```

use proptest::prelude::*;

use tonetable_backend::frequency::OFF_LABEL;
use tonetable_backend::{generate_frequency_table, generate_waveform_bank, TableError};
use tonetable_spec::{Chroma, FrequencyConfig, WaveformConfig, WaveformKind};

// ============================================================================
// 1. Frequency Table Layout
// ============================================================================

/// Configs whose size and A4 position are valid; ticks may still overflow.
fn frequency_config() -> impl Strategy<Value = FrequencyConfig> {
    (1u32..=8, 0u32..=8, 1_000.0f64..100_000.0)
        .prop_flat_map(|(octaves, slots, sample_hz)| {
            (Just(octaves), Just(slots), Just(sample_hz), 0..octaves * 12)
        })
        .prop_map(|(octaves, slots, sample_hz, a4_offset)| {
            FrequencyConfig::new(sample_hz, a4_offset, octaves).with_silent_slots(slots)
        })
}

proptest! {
    /// Valid configs either yield a well-formed table or a tick overflow.
    #[test]
    fn frequency_table_layout(config in frequency_config()) {
        match generate_frequency_table(&config) {
            Ok(table) => {
                let slots = config.silent_slots_per_octave as usize;
                prop_assert_eq!(table.len(), config.octave_count as usize * (12 + slots));
                prop_assert_eq!(table.a4_index, config.a4_index());

                for (i, entry) in table.entries.iter().enumerate() {
                    prop_assert_eq!(entry.array_index, i);
                    let column = i % (12 + slots);
                    if column < slots {
                        prop_assert_eq!(entry.tick_count, 0);
                        prop_assert_eq!(entry.label.as_str(), OFF_LABEL);
                    } else {
                        let chroma = Chroma::from_semitone((column - slots) as u32);
                        let octave = i / (12 + slots);
                        prop_assert_eq!(&entry.label, &format!("{}{}", chroma.name(), octave));
                    }
                }

                let a4 = &table.entries[table.a4_index];
                prop_assert_eq!(a4.frequency_hz, Some(440.0));
            }
            Err(TableError::TickOverflow { array_index, tick_count, .. }) => {
                prop_assert!(tick_count > 65535);
                prop_assert!(array_index < config.entry_count());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Generation is a pure function of the config.
    #[test]
    fn frequency_table_deterministic(config in frequency_config()) {
        let first = generate_frequency_table(&config).ok().map(|t| t.hash());
        let second = generate_frequency_table(&config).ok().map(|t| t.hash());
        prop_assert_eq!(first, second);
    }

    /// Non-positive sample rates are always rejected.
    #[test]
    fn non_positive_sample_rate_rejected(sample_hz in -1.0e6f64..=0.0) {
        let result = generate_frequency_table(&FrequencyConfig::new(sample_hz, 57, 8));
        prop_assert!(matches!(result, Err(TableError::InvalidConfig(_))));
    }
}

// ============================================================================
// 2. Waveform Bounds
// ============================================================================

proptest! {
    /// Every sample of every kind stays within `0..=max_value`.
    #[test]
    fn waveform_within_bounds(step_count in 2u32..=1024, max_value in 0u32..=255) {
        let bank = generate_waveform_bank(&WaveformConfig::new(step_count, max_value)).unwrap();
        for table in &bank.tables {
            prop_assert_eq!(table.len(), step_count as usize);
            prop_assert!(table.amplitudes().iter().all(|&a| a as u32 <= max_value));
        }
    }

    /// Square tables are exactly two levels split at half the cycle.
    #[test]
    fn square_is_two_level(step_count in 2u32..=1024, max_value in 1u32..=255) {
        let bank = generate_waveform_bank(&WaveformConfig::new(step_count, max_value)).unwrap();
        let square = bank.get(WaveformKind::Square);
        let half = (step_count / 2) as usize;
        for (i, &a) in square.amplitudes().iter().enumerate() {
            let expected = if i < half { 0 } else { max_value as u8 };
            prop_assert_eq!(a, expected);
        }
    }

    /// Sawtooth tables never decrease and span the full range.
    #[test]
    fn sawtooth_monotonic(step_count in 2u32..=1024, max_value in 0u32..=255) {
        let bank = generate_waveform_bank(&WaveformConfig::new(step_count, max_value)).unwrap();
        let saw = bank.get(WaveformKind::Sawtooth).amplitudes();
        prop_assert!(saw.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(saw[0], 0);
        prop_assert_eq!(*saw.last().unwrap() as u32, max_value);
    }
}
