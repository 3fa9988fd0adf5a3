//! One-way hashing and verification for local credentials.
//!
//! Digests are unsalted SHA-256 hex: the same password always produces the
//! same digest, and stored digests remain valid across deployments.

use sha2::{Digest, Sha256};

/// Digest length in hex characters
pub const DIGEST_LEN: usize = 64;

/// Hash a plaintext password into its storable digest
pub fn hash(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}

/// Check a plaintext password against a stored digest.
///
/// The comparison is constant-time with respect to the digest contents so
/// response timing leaks nothing about how close a guess was.
pub fn verify(plaintext: &str, digest: &str) -> bool {
    constant_time_eq(hash(plaintext).as_bytes(), digest.as_bytes())
}

pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
