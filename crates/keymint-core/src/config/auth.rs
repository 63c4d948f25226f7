//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Must be non-empty to
    /// construct a token manager.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Audience value stamped into every token and required verbatim at
    /// validation time.
    #[serde(default = "default_jwt_audience")]
    pub jwt_audience: String,
    /// Issuer value stamped into every token and required verbatim at
    /// validation time.
    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Refresh token TTL in minutes.
    #[serde(default = "default_refresh_ttl")]
    pub jwt_refresh_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_audience: default_jwt_audience(),
            jwt_issuer: default_jwt_issuer(),
            jwt_access_ttl_minutes: default_access_ttl(),
            jwt_refresh_ttl_minutes: default_refresh_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_audience() -> String {
    "keymint".to_string()
}

fn default_jwt_issuer() -> String {
    "keymint".to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    10080
}
