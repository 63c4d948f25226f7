//! # keymint-auth
//!
//! Signed identity tokens, opaque lookup tokens, password hashing, and
//! identifier generation for the Keymint platform.
//!
//! ## Modules
//!
//! - `jwt` — access/refresh token issuance, the ordered verification
//!   pipeline, and opaque lookup token generation
//! - `password` — Argon2id password hashing and verification
//! - `identifier` — random short IDs and namespace-stable UUIDv5 IDs

pub mod identifier;
pub mod jwt;
pub mod password;

pub use identifier::{Identifier, MockIdGenerator};
pub use jwt::{JwtTokenManager, MockTokenManager, TokenIssuer, TokenVerifier};
pub use password::{Argon2Hasher, MockPasswordHasher};
