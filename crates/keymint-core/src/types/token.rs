//! Claim sets and issued token pairs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived token authorizing immediate requests.
    Access,
    /// Longer-lived token used to obtain new access tokens.
    Refresh,
}

/// Claim set carried inside every signed token.
///
/// The subject is opaque to the token layer: it is round-tripped, never
/// interpreted. Audience and issuer are copied from configuration at
/// issuance time and re-checked verbatim at validation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the principal this token was issued for.
    pub sub: String,
    /// Intended consumer of the token.
    pub aud: String,
    /// Issuing authority.
    pub iss: String,
    /// Issued-at timestamp (seconds since epoch, UTC).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch, UTC).
    pub exp: i64,
    /// Which half of an issued pair this token is. Carried and returned,
    /// not enforced by validation; call sites decide whether to require a
    /// particular type.
    pub token_type: TokenType,
}

impl Claims {
    /// Returns the subject claim.
    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Returns the issued-at instant as a `DateTime<Utc>`.
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_else(Utc::now)
    }

    /// Returns the expiration instant as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this claim set is expired at `now`. The expiry
    /// instant itself is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }
}

/// Access/refresh pair returned to the caller for transport.
///
/// The two tokens are signed independently and expire independently;
/// nothing ties them together beyond sharing the same subject and
/// issued-at timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(token_type: TokenType) -> Claims {
        Claims {
            sub: "user-1".to_string(),
            aud: "audience".to_string(),
            iss: "issuer".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_000_600,
            token_type,
        }
    }

    #[test]
    fn test_token_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TokenType::Access).expect("serialize"),
            r#""access""#
        );
        assert_eq!(
            serde_json::to_string(&TokenType::Refresh).expect("serialize"),
            r#""refresh""#
        );
    }

    #[test]
    fn test_claims_serde_roundtrip() {
        let claims = claims(TokenType::Access);
        let json = serde_json::to_string(&claims).expect("serialize");
        let parsed: Claims = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(claims, parsed);
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let claims = claims(TokenType::Access);
        let at_expiry = DateTime::from_timestamp(claims.exp, 0).expect("timestamp");
        let past_expiry = DateTime::from_timestamp(claims.exp + 1, 0).expect("timestamp");
        assert!(!claims.is_expired_at(at_expiry));
        assert!(claims.is_expired_at(past_expiry));
    }

    #[test]
    fn test_timestamp_accessors() {
        let claims = claims(TokenType::Refresh);
        assert_eq!(claims.issued_at().timestamp(), claims.iat);
        assert_eq!(claims.expires_at().timestamp(), claims.exp);
        assert_eq!(claims.subject(), "user-1");
    }
}
