//! Event aggregate root.

use std::fmt;

use super::id::Id;
use super::registration::Registration;
use super::text::{Description, Location, Name};
use super::time_window::{EndTime, StartTime};

/// An event with a name, description, location, and time window, plus the
/// registrations attached in memory but not yet committed to storage.
///
/// All field invariants are enforced by the value-object constructors, so
/// both factory paths here are infallible: an `Event` can only ever be
/// assembled from already-valid parts. The end-after-start invariant in
/// particular is enforced at [`EndTime`] construction and not re-checked.
///
/// The pending-registrations list is single-use per save cycle: the
/// aggregate never clears it after a save, so re-submitting the same
/// in-memory instance would re-insert already-persisted registrations.
#[derive(Debug, Clone)]
pub struct Event {
    id: Id,
    name: Name,
    description: Description,
    location: Location,
    start_time: StartTime,
    end_time: EndTime,
    pending_registrations: Vec<Registration>,
}

impl Event {
    /// Creates a fresh event with a self-generated identifier and an
    /// empty pending-registrations list.
    #[must_use]
    pub fn new(
        name: Name,
        description: Description,
        location: Location,
        start_time: StartTime,
        end_time: EndTime,
    ) -> Self {
        Self::of(Id::new(), name, description, location, start_time, end_time)
    }

    /// Reconstructs an event from previously persisted data.
    #[must_use]
    pub fn of(
        id: Id,
        name: Name,
        description: Description,
        location: Location,
        start_time: StartTime,
        end_time: EndTime,
    ) -> Self {
        Self {
            id,
            name,
            description,
            location,
            start_time,
            end_time,
            pending_registrations: Vec::new(),
        }
    }

    /// Returns the event identifier.
    #[must_use]
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Returns the event name.
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the event description.
    #[must_use]
    pub fn description(&self) -> &Description {
        &self.description
    }

    /// Returns the event location.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the event start time.
    #[must_use]
    pub fn start_time(&self) -> &StartTime {
        &self.start_time
    }

    /// Returns the event end time.
    #[must_use]
    pub fn end_time(&self) -> &EndTime {
        &self.end_time
    }

    /// Appends a registration to the pending list.
    ///
    /// Does not verify that the registration's event identifier matches
    /// this event's own identifier; attaching a registration that
    /// references a different event is the caller's mistake to avoid.
    pub fn add(&mut self, registration: Registration) {
        self.pending_registrations.push(registration);
    }

    /// Read-only, insertion-ordered view of the not-yet-persisted
    /// registrations.
    #[must_use]
    pub fn pending_registrations(&self) -> &[Registration] {
        &self.pending_registrations
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event {{ id = {}, name = {}, description = {}, location = {}, start_time = {}, end_time = {} }}",
            self.id, self.name, self.description, self.location, self.start_time, self.end_time
        )
    }
}
