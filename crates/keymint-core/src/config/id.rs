//! Identifier generation configuration.

use serde::{Deserialize, Serialize};

/// Settings for random short IDs and namespace-stable IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdConfig {
    /// Alphabet the short-ID generator draws characters from.
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    /// Number of characters in a generated short ID.
    #[serde(default = "default_length")]
    pub length: usize,
    /// UUID namespace for stable (UUIDv5) identifiers.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
            length: default_length(),
            namespace: default_namespace(),
        }
    }
}

fn default_alphabet() -> String {
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string()
}

fn default_length() -> usize {
    21
}

fn default_namespace() -> String {
    // RFC 4122 DNS namespace
    "6ba7b810-9dad-11d1-80b4-00c04fd430c8".to_string()
}
