//! Access/refresh token pair creation with configurable signing and TTL.

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use tracing::debug;

use keymint_core::error::TokenError;
use keymint_core::result::TokenResult;
use keymint_core::traits::Clock;
use keymint_core::types::token::{Claims, TokenPair, TokenType};

/// Creates signed JWT access and refresh tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    audience: String,
    issuer: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("audience", &self.audience)
            .field("issuer", &self.issuer)
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

impl TokenIssuer {
    pub(crate) fn new(
        secret: &[u8],
        audience: &str,
        issuer: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            audience: audience.to_string(),
            issuer: issuer.to_string(),
            access_ttl,
            refresh_ttl,
            clock,
        }
    }

    /// Generates a new access + refresh token pair for the given subject.
    ///
    /// Both tokens share the subject and issued-at timestamp but are
    /// signed independently with their own expiries. Either both
    /// signatures succeed or the whole call fails; a partially populated
    /// pair is never returned.
    pub fn issue(&self, subject: &str) -> TokenResult<TokenPair> {
        let now = self.clock.now_utc();

        let access_token = self.sign(Claims {
            sub: subject.to_string(),
            aud: self.audience.clone(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + self.access_ttl).timestamp(),
            token_type: TokenType::Access,
        })?;

        let refresh_token = self.sign(Claims {
            sub: subject.to_string(),
            aud: self.audience.clone(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + self.refresh_ttl).timestamp(),
            token_type: TokenType::Refresh,
        })?;

        debug!(subject, "issued access/refresh token pair");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn sign(&self, claims: Claims) -> TokenResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}
