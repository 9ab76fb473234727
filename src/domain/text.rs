//! Bounded, non-blank string value objects.
//!
//! Each type wraps a string validated on construction: it must not be
//! blank (empty or whitespace-only) and must not exceed the type's
//! maximum length in characters. Valid values are stored verbatim, with
//! no trimming.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

macro_rules! bounded_text {
    ($(#[$meta:meta])* $name:ident, $max:expr, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Maximum allowed length in characters.
            pub const MAX_LENGTH: usize = $max;

            /// Validates and wraps `value`.
            ///
            /// # Errors
            ///
            /// Returns [`DomainError::InvalidArgument`] when `value` is
            /// blank or longer than [`Self::MAX_LENGTH`] characters.
            pub fn of(value: impl Into<String>) -> Result<Self, DomainError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::invalid($field, "must not be blank"));
                }
                if value.chars().count() > Self::MAX_LENGTH {
                    return Err(DomainError::invalid(
                        $field,
                        format!("must not be longer than {} characters", Self::MAX_LENGTH),
                    ));
                }
                Ok(Self(value))
            }

            /// Returns the stored string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

bounded_text!(
    /// Event name, 1–50 characters.
    Name,
    50,
    "name"
);

bounded_text!(
    /// Event description, 1–200 characters.
    Description,
    200,
    "description"
);

bounded_text!(
    /// Event location, 1–100 characters.
    Location,
    100,
    "location"
);

bounded_text!(
    /// Attendee name on a registration, 1–100 characters.
    RegistrationName,
    100,
    "registration name"
);
