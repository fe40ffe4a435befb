//! API key secret generation and format checks.
//!
//! Secrets are a fixed `key_` prefix followed by a random lowercase
//! base-36 suffix. Uniqueness is ultimately enforced by the database's
//! unique index on the secret column; the registry re-rolls on collision
//! up to [`MAX_GENERATION_ATTEMPTS`] times.

use rand::Rng;

/// Fixed prefix every generated secret starts with.
pub const KEY_PREFIX: &str = "key_";

/// Number of random characters after the prefix.
pub const KEY_SUFFIX_LENGTH: usize = 12;

/// Upper bound on re-rolls when an insert hits the unique index.
///
/// Collisions are astronomically unlikely at this key space; the bound
/// exists so a broken store cannot spin the registry forever.
pub const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// Lowercase base-36 alphabet for the secret suffix.
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a new candidate secret: `key_` + [`KEY_SUFFIX_LENGTH`] random
/// base-36 characters.
pub fn generate_key_secret() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..KEY_SUFFIX_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{KEY_PREFIX}{suffix}")
}

/// Check whether a string has the shape of a generated secret.
pub fn is_well_formed(secret: &str) -> bool {
    secret
        .strip_prefix(KEY_PREFIX)
        .is_some_and(|suffix| {
            suffix.len() == KEY_SUFFIX_LENGTH
                && suffix.bytes().all(|b| ALPHABET.contains(&b))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_secret_has_correct_length() {
        let secret = generate_key_secret();
        assert_eq!(secret.len(), KEY_PREFIX.len() + KEY_SUFFIX_LENGTH);
    }

    #[test]
    fn generated_secret_starts_with_prefix() {
        let secret = generate_key_secret();
        assert!(secret.starts_with(KEY_PREFIX));
    }

    #[test]
    fn generated_secret_is_well_formed() {
        for _ in 0..100 {
            let secret = generate_key_secret();
            assert!(is_well_formed(&secret), "bad secret: {secret}");
        }
    }

    #[test]
    fn successive_secrets_differ() {
        let a = generate_key_secret();
        let b = generate_key_secret();
        let c = generate_key_secret();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn rejects_wrong_prefix() {
        assert!(!is_well_formed("api_abcdef123456"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_well_formed("key_short"));
        assert!(!is_well_formed("key_abcdef1234567890"));
    }

    #[test]
    fn rejects_uppercase_suffix() {
        assert!(!is_well_formed("key_ABCDEF123456"));
    }
}
