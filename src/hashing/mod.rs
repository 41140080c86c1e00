//! Stable keys derived from normalized targets.

#[inline]
pub fn hash_target(target: &str) -> [u8; 32] {
    *blake3::hash(target.as_bytes()).as_bytes()
}

/// Returns the storage key (lowercase BLAKE3 hex) for a normalized target.
///
/// Targets are user-influenced strings, so they never reach the filesystem directly. The hex
/// digest is always a valid file stem regardless of what the target contains.
#[inline]
pub fn target_storage_key(target: &str) -> String {
    blake3::hash(target.as_bytes()).to_hex().to_string()
}
