//! Spec-level generation entry point.

use tonetable_spec::{validate_spec, TableSpec, ValidationWarning};

use crate::drawbar::{generate_drawbar_table, DrawbarTable};
use crate::error::TableResult;
use crate::frequency::{generate_frequency_table, FrequencyTable};
use crate::waveform::{generate_waveform_bank, WaveformBank};

/// Tables generated from one spec.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    /// Note-frequency table, if the spec declares one.
    pub frequency: Option<FrequencyTable>,
    /// The four waveform tables, if the spec declares them.
    pub waveforms: Option<WaveformBank>,
    /// Mixed organ waveform, if the spec declares a registration.
    pub drawbar: Option<DrawbarTable>,
    /// Spec and generation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl GenerateResult {
    /// Number of tables produced.
    pub fn table_count(&self) -> usize {
        self.frequency.is_some() as usize
            + self.waveforms.as_ref().map_or(0, |b| b.tables.len())
            + self.drawbar.is_some() as usize
    }
}

/// Validates a spec and generates every table it declares.
///
/// The whole spec is validated before any table is built, and the first
/// generation error aborts the run.
///
/// # Example
/// ```
/// use tonetable_backend::generate;
/// use tonetable_spec::Preset;
///
/// let result = generate(&Preset::Organ.to_spec()).unwrap();
/// assert_eq!(result.frequency.as_ref().unwrap().a4_index, 77);
/// assert_eq!(result.table_count(), 6);
/// ```
pub fn generate(spec: &TableSpec) -> TableResult<GenerateResult> {
    let mut warnings = validate_spec(spec).into_result()?;

    let frequency = spec
        .frequency
        .as_ref()
        .map(generate_frequency_table)
        .transpose()?;
    if let Some(ref table) = frequency {
        warnings.extend(table.warnings.iter().cloned());
    }

    let waveforms = spec
        .waveform
        .as_ref()
        .map(generate_waveform_bank)
        .transpose()?;

    // The organ mix reuses the declared waveform resolution, or the default one.
    let wave_config = spec.waveform.unwrap_or_default();
    let drawbar = spec
        .drawbars
        .as_ref()
        .map(|registration| generate_drawbar_table(registration, &wave_config))
        .transpose()?;

    Ok(GenerateResult {
        frequency,
        waveforms,
        drawbar,
        warnings,
    })
}
