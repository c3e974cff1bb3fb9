//! Canonical parameter hashing.
//!
//! The hash identifies a parameter set independently of field order or
//! whitespace in the document it was loaded from.

use crate::error::SpecError;
use crate::params::WaveParams;

/// Computes the canonical BLAKE3 hash of a parameter set.
///
/// The hash is computed as:
/// ```text
/// params_hash = hex(BLAKE3(compact_json_with_sorted_keys(params)))
/// ```
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use wavegen_spec::{canonical_params_hash, WaveParams};
///
/// let hash = canonical_params_hash(&WaveParams::default()).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_params_hash(params: &WaveParams) -> Result<String, SpecError> {
    // serde_json::Value objects are BTreeMap-backed, so keys come out sorted.
    let value = serde_json::to_value(params)?;
    let canonical = serde_json::to_string(&value)?;
    Ok(blake3::hash(canonical.as_bytes()).to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Waveform;

    #[test]
    fn test_hash_ignores_document_layout() {
        let a = WaveParams::from_json(r#"{"waveform": "square", "frequency": 880.0}"#).unwrap();
        let b = WaveParams::from_json(
            r#"{
                "frequency": 880.0,
                "waveform": "square"
            }"#,
        )
        .unwrap();
        assert_eq!(
            canonical_params_hash(&a).unwrap(),
            canonical_params_hash(&b).unwrap()
        );
    }

    #[test]
    fn test_hash_changes_with_params() {
        let a = WaveParams::builder(Waveform::Sine).build();
        let b = WaveParams::builder(Waveform::Triangle).build();
        assert_ne!(
            canonical_params_hash(&a).unwrap(),
            canonical_params_hash(&b).unwrap()
        );
    }

    #[test]
    fn test_hash_is_hex() {
        let hash = canonical_params_hash(&WaveParams::default()).unwrap();
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
