//! Shared diagnostics helpers for the commands.

use colored::Colorize;
use tonetable_backend::generate;
use tonetable_spec::{validate_spec, TableSpec, ValidationError, ValidationWarning};

/// Problems found in a spec, including those only generation can detect.
pub(crate) struct Diagnostics {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl Diagnostics {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates a spec, then dry-runs generation to catch tick overflow and
/// collect quantization warnings.
pub(crate) fn check_spec(spec: &TableSpec) -> Diagnostics {
    let validation = validate_spec(spec);
    if !validation.is_ok() {
        return Diagnostics {
            errors: validation.errors,
            warnings: validation.warnings,
        };
    }

    match generate(spec) {
        Ok(result) => Diagnostics {
            errors: Vec::new(),
            warnings: result.warnings,
        },
        Err(e) => Diagnostics {
            errors: e.validation_errors(),
            warnings: validation.warnings,
        },
    }
}

/// Colored error and warning lines, in the order they should be printed.
pub(crate) fn diagnostic_lines(
    errors: &[ValidationError],
    warnings: &[ValidationWarning],
) -> Vec<String> {
    let mut lines = Vec::new();

    if !errors.is_empty() {
        lines.push(format!("\n{}", "Errors:".red().bold()));
        for error in errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            lines.push(format!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            ));
        }
    }

    if !warnings.is_empty() {
        lines.push(format!("\n{}", "Warnings:".yellow().bold()));
        for warning in warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            lines.push(format!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            ));
        }
    }

    lines
}

/// Names of the sections a spec declares.
pub(crate) fn declared_sections(spec: &TableSpec) -> Vec<String> {
    let mut sections = Vec::new();
    if spec.frequency.is_some() {
        sections.push("frequency".to_string());
    }
    if spec.waveform.is_some() {
        sections.push("waveform".to_string());
    }
    if spec.drawbars.is_some() {
        sections.push("drawbars".to_string());
    }
    sections
}
