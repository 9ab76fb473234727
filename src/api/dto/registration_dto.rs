//! Registration DTOs for the per-event registration endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    DomainError, Id, Registration, RegistrationEmailAddress, RegistrationName,
    RegistrationPhoneNumber,
};

/// Request body for `POST /events/{id}/registrations`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRegistrationRequest {
    /// Attendee name (1–100 characters).
    pub name: Option<String>,
    /// Attendee phone number in E.164 form, e.g. `+4915123456789`.
    pub phone_number: Option<String>,
    /// Attendee email address (at most 254 characters).
    pub email_address: Option<String>,
}

impl CreateRegistrationRequest {
    /// Translates the wire representation into a fresh registration
    /// attached to `event_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingArgument`] for absent fields and
    /// [`DomainError::InvalidArgument`] for values the domain rejects.
    pub fn into_entity(self, event_id: &Id) -> Result<Registration, DomainError> {
        let name = RegistrationName::of(self.name.ok_or(DomainError::missing("name"))?)?;
        let phone_number = RegistrationPhoneNumber::of(
            self.phone_number
                .ok_or(DomainError::missing("phone_number"))?,
        )?;
        let email_address = RegistrationEmailAddress::of(
            self.email_address
                .ok_or(DomainError::missing("email_address"))?,
        )?;

        Ok(Registration::new(
            event_id.clone(),
            name,
            phone_number,
            email_address,
        ))
    }
}

/// Registration representation returned by the registration endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegistrationResponse {
    /// Registration identifier.
    pub id: String,
    /// Identifier of the event the registration belongs to.
    pub event_id: String,
    /// Attendee name.
    pub name: String,
    /// Attendee phone number.
    pub phone_number: String,
    /// Attendee email address, stored trimmed.
    pub email_address: String,
}

impl From<&Registration> for RegistrationResponse {
    fn from(registration: &Registration) -> Self {
        Self {
            id: registration.id().to_string(),
            event_id: registration.event_id().to_string(),
            name: registration.name().to_string(),
            phone_number: registration.phone_number().to_string(),
            email_address: registration.email_address().to_string(),
        }
    }
}
