//! Byte-to-hex encoding and SHA-1 hex digests.
//!
//! Hex encoding is an explicit per-byte lookup into a 16-entry digit
//! table rather than a `format!("{:x}")` loop, so the two nibbles of each
//! byte map straight onto table indices. The uppercase table is shared
//! with [`crate::core::escape`], which emits `%XX` escapes.

/// Uppercase hex digits, indexed by nibble value.
pub const UPPER_DIGITS: [u8; 16] = *b"0123456789ABCDEF";

/// Lowercase hex digits, indexed by nibble value.
pub const LOWER_DIGITS: [u8; 16] = *b"0123456789abcdef";

/// Encode bytes as a hex string.
///
/// Produces exactly `2 * bytes.len()` characters with no separators;
/// `lowercase` selects the digit case. Total over all inputs, including
/// the empty slice.
///
/// # Examples
///
/// ```
/// use sync_support_rs::hex_string;
///
/// assert_eq!(hex_string(&[0x00, 0xff], true), "00ff");
/// assert_eq!(hex_string(&[0x00, 0xff], false), "00FF");
/// ```
#[must_use]
pub fn hex_string(bytes: &[u8], lowercase: bool) -> String {
    let digits = if lowercase { LOWER_DIGITS } else { UPPER_DIGITS };
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(digits[(byte >> 4) as usize] as char);
        out.push(digits[(byte & 0x0f) as usize] as char);
    }
    out
}

/// SHA-1 digest of `input`, as 40 lowercase hex characters.
///
/// Deterministic over all inputs. The empty input digests to
/// `da39a3ee5e6b4b0d3255bfef95601890afd80709`.
///
/// # Examples
///
/// ```
/// use sync_support_rs::hex_sha1_digest;
///
/// assert_eq!(
///     hex_sha1_digest(b""),
///     "da39a3ee5e6b4b0d3255bfef95601890afd80709"
/// );
/// ```
#[must_use]
pub fn hex_sha1_digest(input: &[u8]) -> String {
    use sha1::{Digest, Sha1};
    let mut hasher = Sha1::new();
    hasher.update(input);
    hex_string(&hasher.finalize(), true)
}
