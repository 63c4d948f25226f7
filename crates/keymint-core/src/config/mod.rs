//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod auth;
pub mod id;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::auth::AuthConfig;
use self::id::IdConfig;
use self::logging::LoggingConfig;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay). Every
/// section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Token signing and lifetime settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Identifier generation settings.
    #[serde(default)]
    pub id: IdConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific
    /// overlay and environment variables prefixed with `KEYMINT`.
    pub fn load(env: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("KEYMINT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_default_when_absent() {
        let config: AppConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.auth.jwt_access_ttl_minutes, 15);
        assert_eq!(config.id.length, 21);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"auth": {"jwt_secret": "s3cret"}}"#).expect("deserialize");
        assert_eq!(config.auth.jwt_secret, "s3cret");
        assert_eq!(config.auth.jwt_refresh_ttl_minutes, 10080);
    }
}
