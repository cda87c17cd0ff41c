//! Table renderers.
//!
//! Generated tables are rendered into files the firmware build consumes:
//! C headers in the firmware's own syntax, or a single JSON document for
//! other tooling. Rendering never changes a value or its order.

pub mod c_header;
pub mod json;

use std::str::FromStr;

use tonetable_backend::GenerateResult;
use tonetable_spec::{SpecError, TableSpec};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// C headers (`<name>_freq.h`, `<name>_wave.h`).
    CHeader,
    /// One JSON document (`<name>.json`).
    Json,
}

impl OutputFormat {
    /// Returns the name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::CHeader => "c",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(OutputFormat::CHeader),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected c or json)", other)),
        }
    }
}

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Table the file holds ("frequency", "waveform" or "tables").
    pub kind: &'static str,
    /// File contents.
    pub contents: String,
}

/// Renders every generated table of a spec in the given format.
pub fn render(
    spec: &TableSpec,
    result: &GenerateResult,
    format: OutputFormat,
) -> Result<Vec<RenderedFile>, SpecError> {
    let mut files = Vec::new();
    match format {
        OutputFormat::CHeader => {
            if let Some(ref frequency) = result.frequency {
                files.push(RenderedFile {
                    file_name: format!("{}_freq.h", spec.name),
                    kind: "frequency",
                    contents: c_header::render_frequency_header(&spec.name, frequency),
                });
            }
            if result.waveforms.is_some() || result.drawbar.is_some() {
                files.push(RenderedFile {
                    file_name: format!("{}_wave.h", spec.name),
                    kind: "waveform",
                    contents: c_header::render_waveform_header(
                        &spec.name,
                        result.waveforms.as_ref(),
                        result.drawbar.as_ref(),
                    ),
                });
            }
        }
        OutputFormat::Json => {
            if result.table_count() > 0 {
                files.push(RenderedFile {
                    file_name: format!("{}.json", spec.name),
                    kind: "tables",
                    contents: json::render_tables_json(spec, result)?,
                });
            }
        }
    }
    Ok(files)
}
