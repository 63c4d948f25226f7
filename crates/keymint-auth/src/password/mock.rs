//! Deterministic password hasher for tests.

use keymint_core::result::PasswordResult;
use keymint_core::traits::PasswordHasher;

/// Password hasher double returning fixed values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPasswordHasher;

impl MockPasswordHasher {
    /// Creates a new mock instance.
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, _password: &str) -> PasswordResult<String> {
        Ok("hashed_password".to_string())
    }

    fn verify(&self, _hash: &str, _password: &str) -> PasswordResult<bool> {
        Ok(true)
    }
}
