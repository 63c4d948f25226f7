//! Token manager capability trait.

use crate::result::TokenResult;
use crate::types::token::{Claims, TokenPair};

/// Issues and validates signed identity tokens.
///
/// Implemented by the JWT-backed manager in `keymint-auth` and by a
/// deterministic mock for tests; callers pick the variant at construction
/// time. All operations are synchronous and side-effect free aside from
/// reading the clock and the OS random source, so a single instance is
/// safe to share across any number of threads.
pub trait TokenManager: Send + Sync {
    /// Issues a signed access/refresh token pair for the given subject.
    ///
    /// The subject is opaque and never interpreted; an empty string is
    /// permitted. Either both tokens are signed or the call fails; a
    /// partially populated pair is never returned.
    fn issue(&self, subject: &str) -> TokenResult<TokenPair>;

    /// Validates a token string, returning its claim set and subject.
    ///
    /// Runs the full verification pipeline (structure, signing method,
    /// audience, issuer, signature, expiry) and rejects with the error
    /// kind of the first failing stage.
    fn validate(&self, token: &str) -> TokenResult<(Claims, String)>;

    /// Generates a random, unguessable lookup token with no embedded
    /// claims or expiry.
    fn generate_opaque_token(&self) -> String;
}
