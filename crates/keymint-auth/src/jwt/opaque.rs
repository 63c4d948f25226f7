//! Opaque lookup token generation.

use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

/// Random bytes drawn per token.
const TOKEN_ENTROPY_BYTES: usize = 32;

/// Generates a random, unguessable lookup token.
///
/// The result is 64 hex characters with no embedded claims or expiry;
/// callers that need a lifetime must track it themselves. Intended for
/// single-use flows such as password-reset links.
pub fn generate_opaque_token() -> String {
    let mut bytes = [0u8; TOKEN_ENTROPY_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate_opaque_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
