//! Random short IDs and namespace-stable UUIDv5 IDs.

use rand::Rng;
use uuid::Uuid;

use keymint_core::config::id::IdConfig;
use keymint_core::traits::IdGenerator;

/// Generates random short IDs over a fixed alphabet and deterministic
/// UUIDv5 IDs under a fixed namespace.
#[derive(Debug, Clone)]
pub struct Identifier {
    alphabet: Vec<char>,
    length: usize,
    namespace: Uuid,
}

impl Identifier {
    /// Creates a generator from explicit settings.
    ///
    /// A namespace that does not parse as a UUID falls back to the nil
    /// UUID.
    pub fn new(alphabet: &str, length: usize, namespace: &str) -> Self {
        Self {
            alphabet: alphabet.chars().collect(),
            length,
            namespace: Uuid::parse_str(namespace).unwrap_or_else(|_| Uuid::nil()),
        }
    }

    /// Creates a generator from the identifier configuration section.
    pub fn from_config(config: &IdConfig) -> Self {
        Self::new(&config.alphabet, config.length, &config.namespace)
    }
}

impl IdGenerator for Identifier {
    fn short_id(&self) -> String {
        if self.alphabet.is_empty() {
            return String::new();
        }

        let mut rng = rand::thread_rng();
        (0..self.length)
            .map(|_| self.alphabet[rng.gen_range(0..self.alphabet.len())])
            .collect()
    }

    fn stable_id(&self, name: &str) -> String {
        Uuid::new_v5(&self.namespace, name.as_bytes()).to_string()
    }
}
