//! Error taxonomy for Keymint.
//!
//! Token validation failures form a closed set of expected,
//! caller-recoverable outcomes. The verifier always surfaces the specific
//! variant for the first failing stage; no kind is ever collapsed into a
//! generic "invalid token".

use thiserror::Error;

/// Failure kinds produced when constructing a token manager or issuing
/// and validating signed tokens.
///
/// Callers branch on the variant to distinguish "ask for new credentials"
/// ([`TokenError::Expired`]) from "reject, possibly an attack"
/// ([`TokenError::InvalidSignature`], [`TokenError::InvalidSigningMethod`])
/// from "misconfigured environment" ([`TokenError::InvalidAudience`],
/// [`TokenError::InvalidIssuer`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The signing secret was empty at construction time.
    #[error("signing key not set")]
    SigningKeyNotSet,
    /// The token header declares an algorithm other than HMAC-SHA-256.
    #[error("invalid signing method")]
    InvalidSigningMethod,
    /// The audience claim does not match the configured audience.
    #[error("invalid token audience")]
    InvalidAudience,
    /// The issuer claim does not match the configured issuer.
    #[error("invalid token issuer")]
    InvalidIssuer,
    /// The signature does not verify under the configured secret.
    #[error("invalid token signature")]
    InvalidSignature,
    /// The token's expiry timestamp is in the past.
    #[error("token expired")]
    Expired,
    /// The string is not structurally a JWT; carries the underlying
    /// parse failure.
    #[error("malformed token: {0}")]
    Malformed(String),
    /// Signing failed while issuing a token.
    #[error("token signing failed: {0}")]
    SigningFailed(String),
}

/// Failure kinds produced by the password hashing capability.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Hashing or verification could not be performed.
    #[error("password hashing failed: {0}")]
    Hash(String),
    /// The stored hash is not a valid PHC string.
    #[error("invalid password hash format: {0}")]
    InvalidHashFormat(String),
}
