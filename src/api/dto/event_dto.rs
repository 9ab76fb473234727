//! Event DTOs for create, get, and list operations.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Clock, Description, DomainError, EndTime, Event, Location, Name, StartTime};

/// Request body for `POST /events`.
///
/// All fields are required on the wire; absent ones surface as
/// `MissingArgument` failures during translation, before any value
/// validation runs.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Event name (1–50 characters).
    pub name: Option<String>,
    /// Event description (1–200 characters).
    pub description: Option<String>,
    /// Event location (1–100 characters).
    pub location: Option<String>,
    /// Start of the event, with offset; must be in the future.
    pub start_time: Option<DateTime<FixedOffset>>,
    /// End of the event, with offset; must be after `start_time`.
    pub end_time: Option<DateTime<FixedOffset>>,
}

impl CreateEventRequest {
    /// Translates the wire representation into a fresh domain aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingArgument`] for absent fields and
    /// [`DomainError::InvalidArgument`] for values the domain rejects.
    pub fn into_entity(self, clock: &dyn Clock) -> Result<Event, DomainError> {
        let name = Name::of(self.name.ok_or(DomainError::missing("name"))?)?;
        let description =
            Description::of(self.description.ok_or(DomainError::missing("description"))?)?;
        let location = Location::of(self.location.ok_or(DomainError::missing("location"))?)?;
        let start_time = StartTime::new(
            self.start_time.ok_or(DomainError::missing("start_time"))?,
            clock,
        )?;
        let end_time = EndTime::of(
            self.end_time.ok_or(DomainError::missing("end_time"))?,
            &start_time,
        )?;

        Ok(Event::new(name, description, location, start_time, end_time))
    }
}

/// Event representation returned by all event endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventResponse {
    /// Event identifier.
    pub id: String,
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Event location.
    pub location: String,
    /// Start of the event with its original offset.
    pub start_time: DateTime<FixedOffset>,
    /// End of the event with its original offset.
    pub end_time: DateTime<FixedOffset>,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().to_string(),
            name: event.name().to_string(),
            description: event.description().to_string(),
            location: event.location().to_string(),
            start_time: event.start_time().value(),
            end_time: event.end_time().value(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::clock::FixedClock;

    fn request() -> CreateEventRequest {
        let now = Utc::now();
        CreateEventRequest {
            name: Some("Conf".to_string()),
            description: Some("Annual conf.".to_string()),
            location: Some("Berlin".to_string()),
            start_time: Some((now + Duration::days(1)).fixed_offset()),
            end_time: Some((now + Duration::days(2)).fixed_offset()),
        }
    }

    #[test]
    fn translates_a_complete_request() {
        let clock = FixedClock(Utc::now());
        let Ok(event) = request().into_entity(&clock) else {
            panic!("expected a valid event");
        };
        assert_eq!(event.name().as_str(), "Conf");
        assert!(event.pending_registrations().is_empty());

        let response = EventResponse::from(&event);
        assert_eq!(response.id, event.id().to_string());
        assert_eq!(response.location, "Berlin");
    }

    #[test]
    fn absent_fields_fail_as_missing_arguments() {
        let clock = FixedClock(Utc::now());
        let mut req = request();
        req.name = None;
        assert!(matches!(
            req.into_entity(&clock),
            Err(DomainError::MissingArgument("name"))
        ));

        let mut req = request();
        req.end_time = None;
        assert!(matches!(
            req.into_entity(&clock),
            Err(DomainError::MissingArgument("end_time"))
        ));
    }

    #[test]
    fn domain_violations_fail_as_invalid_arguments() {
        let clock = FixedClock(Utc::now());
        let mut req = request();
        req.start_time = Some((Utc::now() - Duration::days(1)).fixed_offset());
        assert!(matches!(
            req.into_entity(&clock),
            Err(DomainError::InvalidArgument { .. })
        ));
    }
}
