//! Waveform and drawbar table integration tests.

use pretty_assertions::assert_eq;
use tonetable_backend::{
    generate, generate_drawbar_table, generate_waveform, generate_waveform_bank,
};
use tonetable_spec::{
    DrawbarRegistration, ErrorCode, Preset, TableSpec, WaveformConfig, WaveformKind,
};

#[test]
fn test_default_bank_dimensions() {
    let bank = generate_waveform_bank(&WaveformConfig::default()).unwrap();
    assert_eq!(bank.tables.len(), 4);
    for (id, table) in bank.tables.iter().enumerate() {
        assert_eq!(table.kind.id() as usize, id);
        assert_eq!(table.len(), 256);
    }
}

#[test]
fn test_square_duty_cycle() {
    let square = generate_waveform(WaveformKind::Square, &WaveformConfig::default()).unwrap();
    let high = square.amplitudes().iter().filter(|&&a| a == 255).count();
    assert_eq!(high, 128);
    assert_eq!(square.amplitude(127), Some(0));
    assert_eq!(square.amplitude(128), Some(255));
}

#[test]
fn test_sine_is_symmetric_about_peak() {
    let sine = generate_waveform(WaveformKind::Sine, &WaveformConfig::default()).unwrap();
    let amplitudes = sine.amplitudes();
    assert_eq!(amplitudes[128], 255);
    for i in 1..128 {
        assert_eq!(amplitudes[128 - i], amplitudes[128 + i], "phase {}", i);
    }
}

#[test]
fn test_triangle_is_symmetric_about_peak() {
    let triangle = generate_waveform(WaveformKind::Triangle, &WaveformConfig::default()).unwrap();
    let amplitudes = triangle.amplitudes();
    for i in 1..128 {
        assert_eq!(amplitudes[128 - i], amplitudes[128 + i], "phase {}", i);
    }
}

#[test]
fn test_regeneration_is_identical() {
    let config = WaveformConfig::default();
    let first = generate_waveform_bank(&config).unwrap();
    let second = generate_waveform_bank(&config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.hash(), second.hash());
}

#[test]
fn test_kinds_hash_differently() {
    let bank = generate_waveform_bank(&WaveformConfig::default()).unwrap();
    let mut hashes: Vec<String> = bank.tables.iter().map(|t| t.hash()).collect();
    hashes.sort();
    hashes.dedup();
    assert_eq!(hashes.len(), 4);
}

#[test]
fn test_invalid_max_value_rejected() {
    let err = generate_waveform_bank(&WaveformConfig::new(256, 256)).unwrap_err();
    assert_eq!(err.validation_errors()[0].code, ErrorCode::InvalidMaxValue);
}

#[test]
fn test_drawbar_follows_waveform_resolution() {
    let spec = TableSpec::new("small-organ")
        .waveform(WaveformConfig::new(64, 127))
        .drawbars(DrawbarRegistration::default());
    let result = generate(&spec).unwrap();
    let drawbar = result.drawbar.unwrap();
    assert_eq!(drawbar.samples.len(), 64);
    assert!(drawbar.amplitudes().iter().all(|&a| a <= 127));
}

#[test]
fn test_drawbar_without_waveform_section_uses_default_resolution() {
    let spec = TableSpec::new("organ-only").drawbars(DrawbarRegistration::default());
    let result = generate(&spec).unwrap();
    assert!(result.waveforms.is_none());
    assert_eq!(result.drawbar.unwrap().samples.len(), 256);
}

#[test]
fn test_drawbar_preset_matches_direct_generation() {
    let spec = Preset::Organ.to_spec();
    let from_spec = generate(&spec).unwrap().drawbar.unwrap();
    let direct =
        generate_drawbar_table(&DrawbarRegistration::default(), &WaveformConfig::default()).unwrap();
    assert_eq!(from_spec.amplitudes(), direct.amplitudes());
}
