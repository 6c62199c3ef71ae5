//! Unique identifier generation.

use uuid::Uuid;

/// Generate a fresh random identifier in standard UUID form.
///
/// Hyphenated lowercase, 36 characters, version-4 (122 random bits from
/// the OS entropy source). Uniqueness is probabilistic; two calls
/// returning the same value is negligible.
///
/// # Examples
///
/// ```
/// use sync_support_rs::create_uuid;
///
/// let id = create_uuid();
/// assert_eq!(id.len(), 36);
/// assert_ne!(id, create_uuid());
/// ```
#[must_use]
pub fn create_uuid() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_format() {
        let id = create_uuid();
        assert_eq!(id.len(), 36);
        for (i, c) in id.chars().enumerate() {
            match i {
                8 | 13 | 18 | 23 => assert_eq!(c, '-'),
                _ => assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            }
        }
    }

    #[test]
    fn test_uuid_version_and_variant() {
        let id = create_uuid();
        let bytes = id.as_bytes();
        // Version nibble right after the second hyphen, variant after the third.
        assert_eq!(bytes[14], b'4');
        assert!(matches!(bytes[19], b'8' | b'9' | b'a' | b'b'));
    }

    #[test]
    fn test_uuid_no_collisions() {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(create_uuid()));
        }
    }
}
