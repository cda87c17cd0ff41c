//! C header rendering in the organ firmware's syntax.
//!
//! Tables are placed in program memory with `__flash`. Every value gets its
//! own line with its index in a trailing comment, so a diff of two generated
//! headers shows exactly which entries moved.

use tonetable_backend::{DrawbarTable, FrequencyTable, WaveformBank};
use tonetable_spec::WaveformKind;

const GENERATED_NOTICE: &str = "// Generated by tonetable. Do not edit.";

/// Renders `FREQUENCIES[]` and `A4_INDEX`.
///
/// ```
/// use tonetable_backend::generate_frequency_table;
/// use tonetable_cli::render::c_header::render_frequency_header;
/// use tonetable_spec::FrequencyConfig;
///
/// let table = generate_frequency_table(&FrequencyConfig::new(12500.0, 57, 8)).unwrap();
/// let header = render_frequency_header("organ", &table);
/// assert!(header.contains("#define A4_INDEX 77"));
/// assert!(header.contains("   2307, // 77: A4 - 440.0"));
/// ```
pub fn render_frequency_header(name: &str, table: &FrequencyTable) -> String {
    let guard = include_guard(name, "FREQ");
    let mut lines = vec![
        GENERATED_NOTICE.to_string(),
        format!(
            "// Note-frequency table \"{}\": {} entries, {} octave(s), {} off slot(s) per octave.",
            name,
            table.len(),
            table.octave_count(),
            table.silent_slots
        ),
        format!("#ifndef {}", guard),
        format!("#define {}", guard),
        String::new(),
        "#include <stdint.h>".to_string(),
        String::new(),
        format!("#define A4_INDEX {}", table.a4_index),
        String::new(),
        "const static uint16_t __flash FREQUENCIES[] = {".to_string(),
    ];

    for entry in &table.entries {
        match entry.frequency_hz {
            Some(hz) => lines.push(format!(
                "  {:5}, // {:2}: {} - {:?}",
                entry.tick_count, entry.array_index, entry.label, hz
            )),
            None => lines.push(format!(
                "  {:5}, // {:2}: {}",
                entry.tick_count, entry.array_index, entry.label
            )),
        }
    }

    lines.push("};".to_string());
    lines.push(String::new());
    lines.push(format!("#endif // {}", guard));
    lines.push(String::new());
    lines.join("\n")
}

/// Renders `WAVE[kind][phase]`, the kind selectors and, if present,
/// `DRAWBAR_WAVE[]`.
pub fn render_waveform_header(
    name: &str,
    bank: Option<&WaveformBank>,
    drawbar: Option<&DrawbarTable>,
) -> String {
    let guard = include_guard(name, "WAVE");
    let mut lines = vec![
        GENERATED_NOTICE.to_string(),
        format!("#ifndef {}", guard),
        format!("#define {}", guard),
        String::new(),
        "#include <stdint.h>".to_string(),
        String::new(),
    ];

    if let Some(bank) = bank {
        for kind in WaveformKind::ALL {
            lines.push(format!("#define {} {}", kind_define(kind), kind.id()));
        }
        lines.push(format!("#define WAVE_COUNT {}", bank.tables.len()));
        lines.push(format!("#define WAVE_STEP_COUNT {}", bank.config.step_count));
        lines.push(String::new());
        lines.push(format!(
            "const static uint8_t __flash WAVE[{}][{}] = {{",
            bank.tables.len(),
            bank.config.step_count
        ));
        for table in &bank.tables {
            lines.push(format!("  {{ // {}", table.kind));
            for sample in &table.samples {
                lines.push(format!("    {}, // {}", sample.amplitude, sample.phase_index));
            }
            lines.push("  },".to_string());
        }
        lines.push("};".to_string());
        lines.push(String::new());
    }

    if let Some(drawbar) = drawbar {
        let levels: Vec<String> = drawbar
            .registration
            .levels
            .iter()
            .map(|l| l.to_string())
            .collect();
        lines.push(format!("// Drawbar registration: {}", levels.join(" ")));
        lines.push(format!(
            "const static uint8_t __flash DRAWBAR_WAVE[{}] = {{",
            drawbar.samples.len()
        ));
        for sample in &drawbar.samples {
            lines.push(format!("    {}, // {}", sample.amplitude, sample.phase_index));
        }
        lines.push("};".to_string());
        lines.push(String::new());
    }

    lines.push(format!("#endif // {}", guard));
    lines.push(String::new());
    lines.join("\n")
}

fn include_guard(name: &str, suffix: &str) -> String {
    format!("{}_{}_H", name.to_ascii_uppercase().replace('-', "_"), suffix)
}

fn kind_define(kind: WaveformKind) -> String {
    format!("WAVE_{}", kind.as_str().to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tonetable_backend::{
        generate_drawbar_table, generate_frequency_table, generate_waveform_bank,
    };
    use tonetable_spec::{DrawbarRegistration, FrequencyConfig, WaveformConfig};

    #[test]
    fn test_frequency_header_lines() {
        let table = generate_frequency_table(&FrequencyConfig::new(12500.0, 57, 8)).unwrap();
        let header = render_frequency_header("organ", &table);
        let lines: Vec<&str> = header.lines().collect();

        let start = lines
            .iter()
            .position(|l| *l == "const static uint16_t __flash FREQUENCIES[] = {")
            .unwrap();
        assert_eq!(lines[start + 1], "      0, //  0: off");
        assert!(lines[start + 5].starts_with("     86, //  4: C0 - 16.3515978"));
        assert_eq!(lines[start + 1 + 128], "};");
        assert!(header.contains("#ifndef ORGAN_FREQ_H"));
    }

    #[test]
    fn test_include_guard_sanitizes_name() {
        assert_eq!(include_guard("organ-20k", "FREQ"), "ORGAN_20K_FREQ_H");
    }

    #[test]
    fn test_waveform_header() {
        let bank = generate_waveform_bank(&WaveformConfig::default()).unwrap();
        let drawbar =
            generate_drawbar_table(&DrawbarRegistration::default(), &WaveformConfig::default())
                .unwrap();
        let header = render_waveform_header("organ", Some(&bank), Some(&drawbar));

        assert!(header.contains("#define WAVE_TRIANGLE 0"));
        assert!(header.contains("#define WAVE_SAWTOOTH 3"));
        assert!(header.contains("const static uint8_t __flash WAVE[4][256] = {"));
        assert!(header.contains("  { // sine"));
        assert!(header.contains("    255, // 128"));
        assert!(header.contains("// Drawbar registration: 0 0 1 0 0 0 0 0 0"));
        assert!(header.contains("const static uint8_t __flash DRAWBAR_WAVE[256] = {"));
    }

    #[test]
    fn test_waveform_header_without_bank() {
        let drawbar =
            generate_drawbar_table(&DrawbarRegistration::default(), &WaveformConfig::default())
                .unwrap();
        let header = render_waveform_header("organ", None, Some(&drawbar));
        assert!(!header.contains("WAVE_COUNT"));
        assert!(header.contains("DRAWBAR_WAVE[256]"));
    }
}
