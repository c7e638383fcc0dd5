//! Content hashing utilities.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

/// Compute a content hash for arbitrary bytes
#[must_use]
pub fn content_hash(data: &[u8]) -> u64 {
    xxh3_64(data)
}

/// Stable fingerprint of a serializable value.
///
/// Hashes the compact JSON encoding. Maps in the hashed types must be ordered
/// (`BTreeMap`) for the encoding, and therefore the fingerprint, to be stable.
/// A value that cannot be encoded hashes as the empty input.
#[must_use]
pub fn fingerprint<T: Serialize>(value: &T) -> u64 {
    let encoded = serde_json::to_vec(value).unwrap_or_default();
    content_hash(&encoded)
}
