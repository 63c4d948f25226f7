//! Deterministic token manager for tests.

use keymint_core::result::TokenResult;
use keymint_core::traits::TokenManager;
use keymint_core::types::token::{Claims, TokenPair, TokenType};

/// Token manager double returning fixed values.
///
/// Lets callers exercise code paths that need a [`TokenManager`] without
/// real cryptography or a clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockTokenManager;

impl MockTokenManager {
    /// Creates a new mock instance.
    pub fn new() -> Self {
        Self
    }
}

impl TokenManager for MockTokenManager {
    fn issue(&self, _subject: &str) -> TokenResult<TokenPair> {
        Ok(TokenPair {
            access_token: "access_token".to_string(),
            refresh_token: "refresh_token".to_string(),
        })
    }

    fn validate(&self, _token: &str) -> TokenResult<(Claims, String)> {
        let claims = Claims {
            sub: "subject".to_string(),
            aud: "audience".to_string(),
            iss: "issuer".to_string(),
            iat: 0,
            exp: 0,
            token_type: TokenType::Access,
        };
        Ok((claims, "subject".to_string()))
    }

    fn generate_opaque_token(&self) -> String {
        "opaque_token".to_string()
    }
}
