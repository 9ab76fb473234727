//! Domain error taxonomy.
//!
//! Exactly two kinds of failure exist in the domain core: a required
//! reference was absent ([`DomainError::MissingArgument`]) or a value
//! violated a format/length/ordering/temporal constraint
//! ([`DomainError::InvalidArgument`]). Both are raised eagerly during
//! construction; no partially constructed object is ever observable.

/// Validation failure raised by a value object or entity constructor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A required argument was absent.
    ///
    /// With owned parameters this cannot arise inside the domain layer
    /// itself; it surfaces at translation boundaries where optional wire
    /// fields are mapped onto required domain values.
    #[error("{0} is required")]
    MissingArgument(&'static str),

    /// A value violated one of its type's constraints.
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        /// Name of the offending field or parameter.
        field: &'static str,
        /// Human-readable description of the violated constraint.
        reason: String,
    },
}

impl DomainError {
    /// Shorthand for [`DomainError::MissingArgument`].
    #[must_use]
    pub const fn missing(field: &'static str) -> Self {
        Self::MissingArgument(field)
    }

    /// Shorthand for [`DomainError::InvalidArgument`].
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}
