//! Ordered token verification pipeline.
//!
//! Validation runs fixed stages, each rejecting with its own error kind:
//! structural parse, signing-method check, audience, issuer, signature,
//! expiry. The declared algorithm is checked before any signature
//! cryptography runs, and audience/issuer are checked before the
//! signature, so a token minted for a differently-configured deployment
//! is rejected even when its signature would verify under that other
//! configuration.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use keymint_core::error::TokenError;
use keymint_core::result::TokenResult;
use keymint_core::traits::Clock;
use keymint_core::types::token::Claims;

type HmacSha256 = Hmac<Sha256>;

/// The only signing algorithm a verifier accepts.
const ALGORITHM: &str = "HS256";

/// Header fields of a compact-serialized JWT. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct JoseHeader {
    alg: String,
}

/// A token split into its decoded parts, before any trust decision.
#[derive(Debug)]
struct ParsedToken<'a> {
    header: JoseHeader,
    claims: Claims,
    /// The `header.payload` portion the signature covers.
    signed: &'a str,
    signature: Vec<u8>,
}

/// Validates JWT strings against a fixed configuration.
#[derive(Clone)]
pub struct TokenVerifier {
    secret: Vec<u8>,
    audience: String,
    issuer: String,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("audience", &self.audience)
            .field("issuer", &self.issuer)
            .finish()
    }
}

impl TokenVerifier {
    pub(crate) fn new(
        secret: Vec<u8>,
        audience: &str,
        issuer: &str,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            secret,
            audience: audience.to_string(),
            issuer: issuer.to_string(),
            clock,
        }
    }

    /// Validates a token string, returning its claim set and subject.
    ///
    /// Stages run in a fixed order and short-circuit on the first
    /// failure, so a token violating several rules at once always yields
    /// the error of the earliest stage (wrong audience beats expired,
    /// and so on).
    pub fn validate(&self, token: &str) -> TokenResult<(Claims, String)> {
        let parsed = parse(token)?;

        if parsed.header.alg != ALGORITHM {
            return Err(TokenError::InvalidSigningMethod);
        }
        if parsed.claims.aud != self.audience {
            return Err(TokenError::InvalidAudience);
        }
        if parsed.claims.iss != self.issuer {
            return Err(TokenError::InvalidIssuer);
        }
        self.verify_signature(parsed.signed, &parsed.signature)?;
        if parsed.claims.is_expired_at(self.clock.now_utc()) {
            return Err(TokenError::Expired);
        }

        let subject = parsed.claims.sub.clone();
        Ok((parsed.claims, subject))
    }

    /// Recomputes the HMAC over `header.payload` and compares it against
    /// the token's signature in constant time.
    fn verify_signature(&self, signed: &str, signature: &[u8]) -> TokenResult<()> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|_| TokenError::InvalidSignature)?;
        mac.update(signed.as_bytes());
        mac.verify_slice(signature)
            .map_err(|_| TokenError::InvalidSignature)
    }
}

/// Splits and decodes the three compact-serialization segments.
///
/// Purely structural: no claim is trusted and no cryptography runs here.
fn parse(token: &str) -> TokenResult<ParsedToken<'_>> {
    let mut segments = token.split('.');
    let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed(
            "expected three dot-separated segments".to_string(),
        ));
    };

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header_b64)
        .map_err(|e| TokenError::Malformed(e.to_string()))?;
    let header: JoseHeader =
        serde_json::from_slice(&header_bytes).map_err(|e| TokenError::Malformed(e.to_string()))?;

    let payload_bytes = URL_SAFE_NO_PAD
        .decode(payload_b64)
        .map_err(|e| TokenError::Malformed(e.to_string()))?;
    let claims: Claims =
        serde_json::from_slice(&payload_bytes).map_err(|e| TokenError::Malformed(e.to_string()))?;

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|e| TokenError::Malformed(e.to_string()))?;

    Ok(ParsedToken {
        header,
        claims,
        signed: &token[..header_b64.len() + 1 + payload_b64.len()],
        signature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_json() -> serde_json::Value {
        serde_json::json!({
            "sub": "user-1",
            "aud": "audience",
            "iss": "issuer",
            "iat": 1_700_000_000,
            "exp": 1_700_000_600,
            "token_type": "access",
        })
    }

    fn segment(value: &serde_json::Value) -> String {
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(value).expect("serialize"))
    }

    #[test]
    fn test_parse_rejects_wrong_segment_count() {
        for token in ["", "one", "one.two", "a.b.c.d"] {
            let err = parse(token).expect_err("should reject");
            assert!(matches!(err, TokenError::Malformed(_)), "token {token:?}");
        }
    }

    #[test]
    fn test_parse_rejects_invalid_base64() {
        let err = parse("!!!.???.###").expect_err("should reject");
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn test_parse_rejects_non_json_payload() {
        let header = segment(&serde_json::json!({"alg": "HS256", "typ": "JWT"}));
        let payload = URL_SAFE_NO_PAD.encode(b"not json");
        let err = parse(&format!("{header}.{payload}.c2ln")).expect_err("should reject");
        assert!(matches!(err, TokenError::Malformed(_)));
    }

    #[test]
    fn test_parse_keeps_signed_portion_verbatim() {
        let header = segment(&serde_json::json!({"alg": "HS256", "typ": "JWT"}));
        let payload = segment(&claims_json());
        let token = format!("{header}.{payload}.c2ln");
        let parsed = parse(&token).expect("should parse");
        assert_eq!(parsed.signed, format!("{header}.{payload}"));
        assert_eq!(parsed.signature, b"sig");
        assert_eq!(parsed.header.alg, "HS256");
        assert_eq!(parsed.claims.sub, "user-1");
    }

    #[test]
    fn test_parse_ignores_unknown_header_fields() {
        let header = segment(&serde_json::json!({"alg": "HS256", "typ": "JWT", "kid": "k1"}));
        let payload = segment(&claims_json());
        let token = format!("{header}.{payload}.c2ln");
        assert!(parse(&token).is_ok());
    }
}
