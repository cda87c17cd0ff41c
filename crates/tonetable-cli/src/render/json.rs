//! JSON table document rendering.

use serde_json::{json, Value};
use tonetable_backend::GenerateResult;
use tonetable_spec::{canonical_spec_hash, SpecError, TableSpec};

/// Builds the JSON document for every generated table.
///
/// Amplitudes are emitted as plain arrays indexed by phase; frequency
/// entries keep their index, tick count and label.
pub fn tables_value(spec: &TableSpec, result: &GenerateResult) -> Result<Value, SpecError> {
    let spec_hash = canonical_spec_hash(spec)?;
    let mut doc = json!({
        "name": spec.name,
        "spec_hash": spec_hash,
    });

    if let Some(ref frequency) = result.frequency {
        doc["frequency"] = json!({
            "a4_index": frequency.a4_index,
            "row_width": frequency.row_width,
            "silent_slots": frequency.silent_slots,
            "hash": frequency.hash(),
            "entries": serde_json::to_value(&frequency.entries)?,
        });
    }

    if let Some(ref bank) = result.waveforms {
        let tables: Vec<Value> = bank
            .tables
            .iter()
            .map(|table| {
                json!({
                    "kind": table.kind,
                    "id": table.kind.id(),
                    "hash": table.hash(),
                    "samples": table.amplitudes(),
                })
            })
            .collect();
        doc["waveforms"] = json!({
            "step_count": bank.config.step_count,
            "max_value": bank.config.max_value,
            "hash": bank.hash(),
            "tables": tables,
        });
    }

    if let Some(ref drawbar) = result.drawbar {
        doc["drawbar"] = json!({
            "levels": drawbar.registration.levels,
            "hash": drawbar.hash(),
            "samples": drawbar.amplitudes(),
        });
    }

    Ok(doc)
}

/// Renders the table document as pretty-printed JSON.
pub fn render_tables_json(spec: &TableSpec, result: &GenerateResult) -> Result<String, SpecError> {
    Ok(serde_json::to_string_pretty(&tables_value(spec, result)?)?)
}
