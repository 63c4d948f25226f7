//! The JWT-backed token manager.

use std::sync::Arc;

use chrono::Duration;
use tracing::debug;

use keymint_core::config::auth::AuthConfig;
use keymint_core::error::TokenError;
use keymint_core::result::TokenResult;
use keymint_core::traits::{Clock, SystemClock, TokenManager};
use keymint_core::types::token::{Claims, TokenPair};

use super::issuer::TokenIssuer;
use super::opaque;
use super::verifier::TokenVerifier;

/// Issues and validates HMAC-SHA-256 signed access/refresh tokens.
///
/// Holds only immutable configuration after construction; every
/// operation is a pure function over its input plus the injected clock,
/// so one instance is safely shared across concurrent callers.
#[derive(Debug, Clone)]
pub struct JwtTokenManager {
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

impl JwtTokenManager {
    /// Creates a manager from explicit settings.
    ///
    /// Fails with [`TokenError::SigningKeyNotSet`] when `secret` is
    /// empty; every other field is accepted verbatim. Empty audience or
    /// issuer values then simply must match empty claims at validation
    /// time.
    pub fn new(
        secret: &str,
        audience: &str,
        issuer: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> TokenResult<Self> {
        if secret.is_empty() {
            return Err(TokenError::SigningKeyNotSet);
        }

        Ok(Self {
            issuer: TokenIssuer::new(
                secret.as_bytes(),
                audience,
                issuer,
                access_ttl,
                refresh_ttl,
                Arc::clone(&clock),
            ),
            verifier: TokenVerifier::new(secret.as_bytes().to_vec(), audience, issuer, clock),
        })
    }

    /// Creates a manager from the auth configuration section, using the
    /// system clock.
    pub fn from_config(config: &AuthConfig) -> TokenResult<Self> {
        Self::new(
            &config.jwt_secret,
            &config.jwt_audience,
            &config.jwt_issuer,
            Duration::minutes(config.jwt_access_ttl_minutes as i64),
            Duration::minutes(config.jwt_refresh_ttl_minutes as i64),
            Arc::new(SystemClock),
        )
    }
}

impl TokenManager for JwtTokenManager {
    fn issue(&self, subject: &str) -> TokenResult<TokenPair> {
        self.issuer.issue(subject)
    }

    fn validate(&self, token: &str) -> TokenResult<(Claims, String)> {
        match self.verifier.validate(token) {
            Ok(validated) => Ok(validated),
            Err(err) => {
                // Expected outcome, not a system error.
                debug!(%err, "rejected token");
                Err(err)
            }
        }
    }

    fn generate_opaque_token(&self) -> String {
        opaque::generate_opaque_token()
    }
}
