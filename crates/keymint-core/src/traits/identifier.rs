//! Identifier generation capability trait.

/// Produces opaque identifiers.
pub trait IdGenerator: Send + Sync {
    /// Generates a random short ID over the configured alphabet.
    fn short_id(&self) -> String;

    /// Derives a stable (UUIDv5) identifier from the configured
    /// namespace and `name`. Equal inputs yield equal IDs.
    fn stable_id(&self, name: &str) -> String;
}
