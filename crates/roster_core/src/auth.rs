//! Keyed credential hashing.
//!
//! # Responsibility
//! - Turn plaintext credentials into stored digests before persistence.
//!
//! # Invariants
//! - Identical `(plain, salt, position)` inputs produce identical digests.
//! - The digest never round-trips back to the plaintext.

use sha2::{Digest, Sha256};

/// Computes the stored digest for a plaintext credential.
///
/// The salt is interleaved into the plaintext at char `position` (clamped
/// to the plaintext length) and the result is SHA-256 digested and
/// hex-encoded.
pub fn keyed_hash(plain: &str, salt: &str, position: usize) -> String {
    let split = position.min(plain.chars().count());

    let mut salted = String::with_capacity(plain.len() + salt.len());
    salted.extend(plain.chars().take(split));
    salted.push_str(salt);
    salted.extend(plain.chars().skip(split));

    let mut hasher = Sha256::new();
    hasher.update(salted.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::keyed_hash;

    #[test]
    fn identical_inputs_hash_identically() {
        assert_eq!(
            keyed_hash("hunter2", "pepper", 3),
            keyed_hash("hunter2", "pepper", 3)
        );
    }

    #[test]
    fn digest_is_hex_sha256() {
        let digest = keyed_hash("hunter2", "pepper", 3);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn salt_and_position_both_change_the_digest() {
        let base = keyed_hash("hunter2", "pepper", 3);
        assert_ne!(base, keyed_hash("hunter2", "paprika", 3));
        assert_ne!(base, keyed_hash("hunter2", "pepper", 0));
    }

    #[test]
    fn position_beyond_plaintext_appends_the_salt() {
        assert_eq!(
            keyed_hash("abc", "pepper", 3),
            keyed_hash("abc", "pepper", 99)
        );
    }

    #[test]
    fn interleaving_is_char_based_for_multibyte_plaintext() {
        // Must not panic on a non-ASCII boundary.
        let digest = keyed_hash("héllo", "pepper", 2);
        assert_eq!(digest.len(), 64);
    }
}
