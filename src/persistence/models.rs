//! Database row models and their conversion back into domain objects.
//!
//! Timestamps are stored as a UTC instant plus the original offset in
//! seconds, so the offset the caller supplied survives a round trip
//! (rehydration rebuilds the `DateTime<FixedOffset>` exactly).

use chrono::{DateTime, FixedOffset, Utc};

use crate::domain::{
    Description, EndTime, Event, Id, Location, Name, Registration, RegistrationEmailAddress,
    RegistrationName, RegistrationPhoneNumber, StartTime,
};
use crate::error::ApiError;

/// An event row from the `events` table.
#[derive(Debug, Clone)]
pub struct EventRow {
    /// Event identifier.
    pub id: String,
    /// Event name.
    pub name: String,
    /// Event description.
    pub description: String,
    /// Event location.
    pub location: String,
    /// Start instant in UTC.
    pub start_time: DateTime<Utc>,
    /// Original start-time offset, seconds east of UTC.
    pub start_time_offset_seconds: i32,
    /// End instant in UTC.
    pub end_time: DateTime<Utc>,
    /// Original end-time offset, seconds east of UTC.
    pub end_time_offset_seconds: i32,
}

impl EventRow {
    /// Rehydrates the domain aggregate from this row.
    ///
    /// Uses the domain's `of` paths: the start time bypasses the
    /// future check, while every other constraint is re-validated. A
    /// row that fails validation indicates corrupted storage and maps
    /// to [`ApiError::Persistence`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] when a stored value no longer
    /// satisfies its domain invariant.
    pub fn into_event(self) -> Result<Event, ApiError> {
        let start = StartTime::of(rebuild(self.start_time, self.start_time_offset_seconds)?);
        let end = EndTime::of(rebuild(self.end_time, self.end_time_offset_seconds)?, &start)
            .map_err(corrupt)?;

        Ok(Event::of(
            Id::of(self.id).map_err(corrupt)?,
            Name::of(self.name).map_err(corrupt)?,
            Description::of(self.description).map_err(corrupt)?,
            Location::of(self.location).map_err(corrupt)?,
            start,
            end,
        ))
    }
}

/// A registration row from the `registrations` table.
#[derive(Debug, Clone)]
pub struct RegistrationRow {
    /// Registration identifier.
    pub id: String,
    /// Identifier of the owning event.
    pub event_id: String,
    /// Attendee name.
    pub name: String,
    /// Attendee phone number.
    pub phone_number: String,
    /// Attendee email address.
    pub email_address: String,
}

impl RegistrationRow {
    /// Rehydrates the domain entity from this row.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] when a stored value no longer
    /// satisfies its domain invariant.
    pub fn into_registration(self) -> Result<Registration, ApiError> {
        Ok(Registration::of(
            Id::of(self.id).map_err(corrupt)?,
            Id::of(self.event_id).map_err(corrupt)?,
            RegistrationName::of(self.name).map_err(corrupt)?,
            RegistrationPhoneNumber::of(self.phone_number).map_err(corrupt)?,
            RegistrationEmailAddress::of(self.email_address).map_err(corrupt)?,
        ))
    }
}

/// Rebuilds a `DateTime<FixedOffset>` from a UTC instant and a stored
/// offset in seconds.
fn rebuild(instant: DateTime<Utc>, offset_seconds: i32) -> Result<DateTime<FixedOffset>, ApiError> {
    let offset = FixedOffset::east_opt(offset_seconds)
        .ok_or_else(|| ApiError::Persistence(format!("stored offset out of range: {offset_seconds}")))?;
    Ok(instant.with_timezone(&offset))
}

fn corrupt(err: crate::domain::DomainError) -> ApiError {
    ApiError::Persistence(format!("stored value violates domain invariant: {err}"))
}
