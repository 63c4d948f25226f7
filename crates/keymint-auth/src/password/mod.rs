//! Password hashing and verification.

pub mod hasher;
pub mod mock;

pub use hasher::Argon2Hasher;
pub use mock::MockPasswordHasher;
