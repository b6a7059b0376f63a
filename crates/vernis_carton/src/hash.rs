//! Fast hashing utilities using xxHash3.
//!
//! Provides deterministic element ids for ARIA wiring (`aria-controls`,
//! `aria-labelledby`) and content hashes for gallery output.

use compact_str::{format_compact, CompactString};
use xxhash_rust::xxh3::xxh3_64;

/// Compute a 64-bit hash of the given bytes using xxHash3.
#[inline]
pub fn hash_bytes(data: &[u8]) -> u64 {
    xxh3_64(data)
}

/// Compute a 64-bit hash of the given string using xxHash3.
#[inline]
pub fn hash_str(data: &str) -> u64 {
    xxh3_64(data.as_bytes())
}

/// Convert a hash to a hex string (16 characters).
#[inline]
pub fn hash_to_hex(hash: u64) -> String {
    format!("{:016x}", hash)
}

/// Compute hash of a string and return as hex.
#[inline]
pub fn content_hash(content: &str) -> String {
    hash_to_hex(hash_str(content))
}

/// Build a deterministic element id, e.g. `vernis-dialog-3f2a9c01`.
///
/// The same `(prefix, seed, index)` always yields the same id, so server
/// output is stable across renders.
pub fn stable_id(prefix: &str, seed: &str, index: u32) -> CompactString {
    let mut buf = Vec::with_capacity(seed.len() + 4);
    buf.extend_from_slice(seed.as_bytes());
    buf.extend_from_slice(&index.to_le_bytes());
    let short = (hash_bytes(&buf) >> 32) as u32;
    format_compact!("vernis-{}-{:08x}", prefix, short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_consistency() {
        let content = "Hello, World!";
        assert_eq!(hash_str(content), hash_str(content));
    }

    #[test]
    fn test_hash_difference() {
        assert_ne!(hash_str("Hello"), hash_str("World"));
    }

    #[test]
    fn test_hex_format() {
        let hex = hash_to_hex(hash_str("test"));
        assert_eq!(hex.len(), 16);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_stable_id() {
        let a = stable_id("dialog", "root", 0);
        let b = stable_id("dialog", "root", 0);
        let c = stable_id("dialog", "root", 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("vernis-dialog-"));
        assert_eq!(a.len(), "vernis-dialog-".len() + 8);
    }
}
