//! Event time window: [`StartTime`] and [`EndTime`].
//!
//! Both wrap a [`DateTime<FixedOffset>`] so the offset supplied by the
//! caller survives a round trip through the domain. `StartTime` has two
//! construction paths with different contracts: `new` validates against
//! a clock ("must be in the future", for freshly authored events) while
//! `of` accepts any value (rehydration — storage may legitimately hold
//! start times now in the past). `EndTime` has a single checked path:
//! the ordering against its `StartTime` is cheap and always enforced.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};

use super::clock::Clock;
use super::error::DomainError;

/// Instant at which an event starts, offset preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StartTime(DateTime<FixedOffset>);

impl StartTime {
    /// Validated construction path for freshly authored events.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidArgument`] unless `value`, converted
    /// to UTC, is strictly after the clock's current instant.
    pub fn new(value: DateTime<FixedOffset>, clock: &dyn Clock) -> Result<Self, DomainError> {
        if value.with_timezone(&Utc) <= clock.now_utc() {
            return Err(DomainError::invalid("start time", "must be in the future"));
        }
        Ok(Self(value))
    }

    /// Unchecked rehydration path for previously persisted values.
    #[must_use]
    pub const fn of(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }

    /// Returns the wrapped timestamp with its original offset.
    #[must_use]
    pub const fn value(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Instant at which an event ends, offset preserved.
///
/// Always constructed together with a [`StartTime`]; the ordering
/// invariant is relational, not absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndTime(DateTime<FixedOffset>);

impl EndTime {
    /// Validates `value` against the associated start time.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidArgument`] unless `value` is
    /// strictly after `start_time`'s value.
    pub fn of(value: DateTime<FixedOffset>, start_time: &StartTime) -> Result<Self, DomainError> {
        if value <= start_time.value() {
            return Err(DomainError::invalid("end time", "must be after start time"));
        }
        Ok(Self(value))
    }

    /// Returns the wrapped timestamp with its original offset.
    #[must_use]
    pub const fn value(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

impl fmt::Display for EndTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
