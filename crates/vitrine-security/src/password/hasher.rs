//! Argon2id password hashing.

use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier};
use vitrine_core::{VitrineError, VitrineResult};

/// Hashes and verifies passwords with Argon2id.
#[derive(Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes a password with a fresh random salt.
    pub fn hash(&self, password: &str) -> VitrineResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| VitrineError::internal(format!("Failed to hash password: {e}")))
    }

    /// Verifies a password against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; only a malformed hash is an error.
    pub fn verify(&self, password: &str, hash: &str) -> VitrineResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| VitrineError::internal(format!("Malformed password hash: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(VitrineError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("hunter22").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("hunter22", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_is_false() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("hunter22").unwrap();

        assert!(!hasher.verify("hunter23", &hash).unwrap());
    }

    #[test]
    fn test_distinct_salts() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash("hunter22").unwrap();
        let b = hasher.hash("hunter22").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_error() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("hunter22", "not-a-hash").is_err());
    }
}
