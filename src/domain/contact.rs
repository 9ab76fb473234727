//! Contact-detail value objects for registrations: phone number and
//! email address.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// E.164-style phone number: a leading `+`, a first digit of 1–9, then
/// 1 to 14 further digits (2–15 digits total).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationPhoneNumber(String);

impl RegistrationPhoneNumber {
    /// Validates and wraps `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidArgument`] when `value` is blank or
    /// does not match `^\+[1-9]\d{1,14}$`.
    pub fn of(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid("phone number", "must not be blank"));
        }
        if !is_e164(&value) {
            return Err(DomainError::invalid(
                "phone number",
                "must be a '+' followed by 2 to 15 digits with no leading zero",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the stored phone number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegistrationPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Checks `^\+[1-9]\d{1,14}$` without a regex engine.
fn is_e164(value: &str) -> bool {
    let mut chars = value.chars();
    if chars.next() != Some('+') {
        return false;
    }
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_digit() || first == '0' {
        return false;
    }
    let mut digits = 1usize;
    for c in chars {
        if !c.is_ascii_digit() {
            return false;
        }
        digits += 1;
    }
    (2..=15).contains(&digits)
}

/// Email address for a registration.
///
/// The untrimmed input must be at most 254 characters, contain no space,
/// carriage return, or line feed anywhere, and contain exactly one `@`
/// that is neither the first nor the last character. The stored value is
/// the input with leading and trailing whitespace trimmed; because the
/// whitespace check runs against the untrimmed input, only non-space
/// whitespace (such as tabs) can actually survive to be trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationEmailAddress(String);

impl RegistrationEmailAddress {
    /// Maximum allowed length in characters.
    pub const MAX_LENGTH: usize = 254;

    /// Validates and wraps `value`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidArgument`] when `value` is blank,
    /// over-long, or violates the format rules above.
    pub fn of(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid("email address", "must not be blank"));
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::invalid(
                "email address",
                format!("must not be longer than {} characters", Self::MAX_LENGTH),
            ));
        }
        if !has_valid_shape(&value) {
            return Err(DomainError::invalid(
                "email address",
                "must contain exactly one '@' which is neither the first nor the \
                 last character, and no whitespace",
            ));
        }
        Ok(Self(value.trim().to_string()))
    }

    /// Returns the stored (trimmed) email address.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegistrationEmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format check run against the untrimmed input.
fn has_valid_shape(value: &str) -> bool {
    if value.chars().any(|c| matches!(c, ' ' | '\r' | '\n')) {
        return false;
    }
    if value.chars().filter(|&c| c == '@').count() != 1 {
        return false;
    }
    !value.starts_with('@') && !value.ends_with('@')
}
