//! Content hashing of resolved models.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::render::RenderInput;

/// Compute SHA256 hash of a serializable value.
///
/// The value is serialized to JSON before hashing. Returns a 64-character
/// lowercase hexadecimal string.
pub fn compute_hash<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// Fingerprint of the resolved model and aliases.
///
/// Templates and render options are not part of the fingerprint; two runs
/// over the same schema and resolver configuration agree on it.
pub fn fingerprint(input: &RenderInput) -> Result<String, serde_json::Error> {
    compute_hash(&(&input.model, &input.aliases))
}
