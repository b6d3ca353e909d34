//! Entity digests used by the hashing canonicalizer.
//!
//! - algorithm: SHA-256, truncated to the first 8 bytes
//! - input: the UTF-8 bytes of the vertex name
//! - output: `"sha256_64:<16 lowercase hex digits>"`
//!
//! The digest only has to be deterministic across processes and platforms so
//! canonical walks from separate runs stay comparable. Std's `Hasher` is
//! seeded per process and cannot be used here.

use sha2::{Digest, Sha256};

/// Prefix used in serialized entity digests.
pub const ENTITY_DIGEST_PREFIX: &str = "sha256_64:";

/// Digest of a vertex name.
pub fn entity_digest(name: &str) -> String {
    let hash = Sha256::digest(name.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash[..8]);
    let head = u64::from_be_bytes(head);

    format!("{ENTITY_DIGEST_PREFIX}{head:016x}")
}
