//! Opaque, time-sortable entity identifier.
//!
//! [`Id`] wraps an opaque string. Fresh identifiers are UUIDv7 values, so
//! lexicographic order roughly follows creation time; rehydrated
//! identifiers accept any non-blank string supplied by storage.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Opaque unique identifier for events and registrations.
///
/// Compared by value. Generation is lock-free and safe to call from any
/// number of threads concurrently; each call produces an independent
/// fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Generates a fresh, globally unique, time-ordered identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Wraps an externally supplied identifier string (rehydration path).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidArgument`] when `value` is empty or
    /// whitespace-only.
    pub fn of(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid("id", "must not be blank"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_unique_non_empty_values() {
        let a = Id::new();
        let b = Id::new();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn new_values_carry_a_leading_timestamp() {
        // UUIDv7 puts the millisecond timestamp in the first fields, so
        // values generated across distinct milliseconds sort by creation
        // time. Within the same millisecond ordering is unspecified.
        let a = Id::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = Id::new();
        assert!(a < b);
    }

    #[test]
    fn of_preserves_the_supplied_value() {
        let Ok(id) = Id::of("019c770f-52d0-7656-9298-adeecf45987a") else {
            panic!("expected a valid id");
        };
        assert_eq!(id.as_str(), "019c770f-52d0-7656-9298-adeecf45987a");
        assert_eq!(id.to_string(), "019c770f-52d0-7656-9298-adeecf45987a");
    }

    #[test]
    fn of_rejects_blank_values() {
        assert!(Id::of("").is_err());
        assert!(Id::of("   ").is_err());
        assert!(Id::of("\t\n").is_err());
    }

    #[test]
    fn equality_is_by_value() {
        let Ok(a) = Id::of("same") else {
            panic!("expected a valid id");
        };
        let Ok(b) = Id::of("same") else {
            panic!("expected a valid id");
        };
        assert_eq!(a, b);
    }

    #[test]
    fn serde_round_trip() {
        let id = Id::new();
        let Ok(json) = serde_json::to_string(&id) else {
            panic!("serialization failed");
        };
        let Ok(back) = serde_json::from_str::<Id>(&json) else {
            panic!("deserialization failed");
        };
        assert_eq!(id, back);
    }
}
