//! Convenience result type aliases for Keymint.

use crate::error::{PasswordError, TokenError};

/// Result of token construction, issuance, and validation operations.
pub type TokenResult<T> = Result<T, TokenError>;

/// Result of password hashing operations.
pub type PasswordResult<T> = Result<T, PasswordError>;
