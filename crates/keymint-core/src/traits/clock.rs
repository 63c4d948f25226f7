//! Clock capability for time-dependent logic.

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
///
/// Token issuance and validation never read the system clock directly;
/// they go through this trait so tests can simulate expiry without
/// sleeping.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// Returns the current time in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
