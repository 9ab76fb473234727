//! Clock abstraction supplying "current time" for temporal validity checks.

use std::fmt;

use chrono::{DateTime, Utc};

/// Source of the current UTC instant.
///
/// The domain layer never calls `Utc::now()` directly; the clock is
/// injected so time-dependent invariants can be exercised against a
/// fixed instant in tests.
pub trait Clock: fmt::Debug + Send + Sync {
    /// Returns the current UTC instant.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}
