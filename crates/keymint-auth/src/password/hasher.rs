//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use keymint_core::error::PasswordError;
use keymint_core::result::PasswordResult;
use keymint_core::traits::PasswordHasher;

/// Hashes and verifies passwords using Argon2id with random salts.
///
/// Output is a PHC-format string carrying the salt and parameters, so
/// verification needs no stored state beyond the hash itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> PasswordResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| PasswordError::Hash(e.to_string()))?;

        Ok(hash.to_string())
    }

    fn verify(&self, hash: &str, password: &str) -> PasswordResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::InvalidHashFormat(e.to_string()))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordError::Hash(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("correct horse battery staple").expect("hash");

        assert!(hash.starts_with("$argon2"));
        assert!(
            hasher
                .verify(&hash, "correct horse battery staple")
                .expect("verify")
        );
        assert!(!hasher.verify(&hash, "wrong password").expect("verify"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = Argon2Hasher::new();
        let first = hasher.hash("password").expect("hash");
        let second = hasher.hash("password").expect("hash");
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        let hasher = Argon2Hasher::new();
        let err = hasher.verify("not-a-phc-string", "password").expect_err("should reject");
        assert!(matches!(err, PasswordError::InvalidHashFormat(_)));
    }
}
