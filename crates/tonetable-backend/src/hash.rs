//! Table content hashing.
//!
//! Hashes cover exactly the bytes the firmware stores: little-endian `u16`
//! tick counts and raw `u8` amplitudes. They change if and only if an emitted
//! value changes, so they double as golden checks.

/// BLAKE3 hash of a `u16` table, as 64 lowercase hex characters.
pub fn hash_u16_table(values: &[u16]) -> String {
    let mut hasher = blake3::Hasher::new();
    for value in values {
        hasher.update(&value.to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

/// BLAKE3 hash of a `u8` table, as 64 lowercase hex characters.
pub fn hash_u8_table(values: &[u8]) -> String {
    blake3::hash(values).to_hex().to_string()
}
