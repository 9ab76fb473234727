//! Persistence layer: the repository contract plus its PostgreSQL and
//! in-memory implementations.
//!
//! The domain layer depends on [`EventsRepository`] abstractly; the
//! concrete PostgreSQL implementation uses `sqlx::PgPool` for async
//! access, and the in-memory implementation backs tests and local runs
//! without a database.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{Event, Id, Registration};
use crate::error::ApiError;

/// Persistence operations the aggregate layer depends on.
#[async_trait]
pub trait EventsRepository: std::fmt::Debug + Send + Sync {
    /// Persists the event's scalar fields and every pending registration.
    ///
    /// Saving an identifier that already exists replaces the scalar
    /// fields rather than duplicating the row. Pending registrations are
    /// written as child rows keyed by the event's identifier and their
    /// own, atomically with the event write. The aggregate's pending
    /// list is not cleared by this call; callers must treat a saved
    /// instance as spent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn save(&self, event: &Event) -> Result<(), ApiError>;

    /// Loads a single event by identifier, rehydrating via the domain's
    /// `of` paths. The pending-registrations list of a loaded event is
    /// always empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn get(&self, id: &Id) -> Result<Option<Event>, ApiError>;

    /// Loads all events in identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn get_all(&self) -> Result<Vec<Event>, ApiError>;

    /// Loads all registrations belonging to the given event.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Persistence`] on storage failure.
    async fn get_all_registrations(&self, event_id: &Id) -> Result<Vec<Registration>, ApiError>;
}
