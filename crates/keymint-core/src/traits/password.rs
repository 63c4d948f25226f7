//! Password hashing capability trait.

use crate::result::PasswordResult;

/// Hashes and verifies login secrets.
///
/// Used at account-creation and login time only; the token layer never
/// calls this.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password, returning an encoded digest string.
    fn hash(&self, password: &str) -> PasswordResult<String>;

    /// Verifies a plaintext password against a stored digest.
    ///
    /// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch.
    fn verify(&self, hash: &str, password: &str) -> PasswordResult<bool>;
}
