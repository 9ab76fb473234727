//! Attendee registration entity.

use std::fmt;

use super::contact::{RegistrationEmailAddress, RegistrationPhoneNumber};
use super::id::Id;
use super::text::RegistrationName;

/// Registration of a single attendee for one event.
///
/// Belongs to exactly one event via the owning event's identifier; there
/// is no back-pointer to the event object itself. Immutable after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    id: Id,
    event_id: Id,
    name: RegistrationName,
    phone_number: RegistrationPhoneNumber,
    email_address: RegistrationEmailAddress,
}

impl Registration {
    /// Creates a fresh registration with a self-generated identifier.
    #[must_use]
    pub fn new(
        event_id: Id,
        name: RegistrationName,
        phone_number: RegistrationPhoneNumber,
        email_address: RegistrationEmailAddress,
    ) -> Self {
        Self::of(Id::new(), event_id, name, phone_number, email_address)
    }

    /// Reconstructs a registration from previously persisted data.
    #[must_use]
    pub fn of(
        id: Id,
        event_id: Id,
        name: RegistrationName,
        phone_number: RegistrationPhoneNumber,
        email_address: RegistrationEmailAddress,
    ) -> Self {
        Self {
            id,
            event_id,
            name,
            phone_number,
            email_address,
        }
    }

    /// Returns the registration identifier.
    #[must_use]
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Returns the identifier of the owning event.
    #[must_use]
    pub fn event_id(&self) -> &Id {
        &self.event_id
    }

    /// Returns the attendee name.
    #[must_use]
    pub fn name(&self) -> &RegistrationName {
        &self.name
    }

    /// Returns the attendee phone number.
    #[must_use]
    pub fn phone_number(&self) -> &RegistrationPhoneNumber {
        &self.phone_number
    }

    /// Returns the attendee email address.
    #[must_use]
    pub fn email_address(&self) -> &RegistrationEmailAddress {
        &self.email_address
    }
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registration {{ id = {}, event_id = {}, name = {}, phone_number = {}, email_address = {} }}",
            self.id, self.event_id, self.name, self.phone_number, self.email_address
        )
    }
}
