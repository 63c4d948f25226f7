//! # keymint-core
//!
//! Core crate for Keymint. Contains capability traits, configuration
//! schemas, shared token types, and the error taxonomy.
//!
//! This crate has **no** internal dependencies on other Keymint crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{PasswordError, TokenError};
pub use result::{PasswordResult, TokenResult};
