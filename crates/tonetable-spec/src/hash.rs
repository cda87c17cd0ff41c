//! Canonical spec hashing.
//!
//! `spec_hash = hex(BLAKE3(canonical_json(spec)))`, where the canonical form
//! has lexicographically sorted object keys and no whitespace. Two specs that
//! differ only in key order or formatting hash identically.

use crate::error::SpecError;
use crate::spec::TableSpec;

/// Computes the canonical BLAKE3 hash of a table spec.
///
/// ```
/// use tonetable_spec::{canonical_spec_hash, Preset};
///
/// let hash = canonical_spec_hash(&Preset::Organ.to_spec()).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_spec_hash(spec: &TableSpec) -> Result<String, SpecError> {
    let value = spec.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Renders a JSON value with sorted keys and no whitespace.
pub fn canonicalize_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_json).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut pairs: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));

            let items: Vec<String> = pairs
                .into_iter()
                .map(|(k, v)| {
                    let key = serde_json::Value::String(k.clone()).to_string();
                    format!("{}:{}", key, canonicalize_json(v))
                })
                .collect();
            format!("{{{}}}", items.join(","))
        }
        // Scalars already have a single compact serde_json rendering.
        scalar => scalar.to_string(),
    }
}
