//! PostgreSQL implementation of the repository contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::models::{EventRow, RegistrationRow};
use super::EventsRepository;
use crate::domain::{Event, Id, Registration};
use crate::error::ApiError;

/// PostgreSQL-backed repository using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresEventsRepository {
    pool: PgPool,
}

impl PostgresEventsRepository {
    /// Creates a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventsRepository for PostgresEventsRepository {
    async fn save(&self, event: &Event) -> Result<(), ApiError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))?;

        sqlx::query(
            "INSERT INTO events (id, name, description, location, \
             start_time, start_time_offset_seconds, end_time, end_time_offset_seconds) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO UPDATE SET \
             name = EXCLUDED.name, \
             description = EXCLUDED.description, \
             location = EXCLUDED.location, \
             start_time = EXCLUDED.start_time, \
             start_time_offset_seconds = EXCLUDED.start_time_offset_seconds, \
             end_time = EXCLUDED.end_time, \
             end_time_offset_seconds = EXCLUDED.end_time_offset_seconds",
        )
        .bind(event.id().as_str())
        .bind(event.name().as_str())
        .bind(event.description().as_str())
        .bind(event.location().as_str())
        .bind(event.start_time().value().with_timezone(&Utc))
        .bind(event.start_time().value().offset().local_minus_utc())
        .bind(event.end_time().value().with_timezone(&Utc))
        .bind(event.end_time().value().offset().local_minus_utc())
        .execute(&mut *tx)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        for registration in event.pending_registrations() {
            sqlx::query(
                "INSERT INTO registrations (id, event_id, name, phone_number, email_address) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(registration.id().as_str())
            .bind(registration.event_id().as_str())
            .bind(registration.name().as_str())
            .bind(registration.phone_number().as_str())
            .bind(registration.email_address().as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| ApiError::Persistence(e.to_string()))
    }

    async fn get(&self, id: &Id) -> Result<Option<Event>, ApiError> {
        let row = sqlx::query_as::<_, (String, String, String, String, DateTime<Utc>, i32, DateTime<Utc>, i32)>(
            "SELECT id, name, description, location, start_time, start_time_offset_seconds, \
             end_time, end_time_offset_seconds FROM events WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        row.map(|r| event_row(r).into_event()).transpose()
    }

    async fn get_all(&self) -> Result<Vec<Event>, ApiError> {
        let rows = sqlx::query_as::<_, (String, String, String, String, DateTime<Utc>, i32, DateTime<Utc>, i32)>(
            "SELECT id, name, description, location, start_time, start_time_offset_seconds, \
             end_time, end_time_offset_seconds FROM events ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        rows.into_iter()
            .map(|r| event_row(r).into_event())
            .collect()
    }

    async fn get_all_registrations(&self, event_id: &Id) -> Result<Vec<Registration>, ApiError> {
        let rows = sqlx::query_as::<_, (String, String, String, String, String)>(
            "SELECT id, event_id, name, phone_number, email_address \
             FROM registrations WHERE event_id = $1 ORDER BY id",
        )
        .bind(event_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

        rows.into_iter()
            .map(|(id, event_id, name, phone_number, email_address)| {
                RegistrationRow {
                    id,
                    event_id,
                    name,
                    phone_number,
                    email_address,
                }
                .into_registration()
            })
            .collect()
    }
}

#[allow(clippy::type_complexity)]
fn event_row(
    (id, name, description, location, start_time, start_time_offset_seconds, end_time, end_time_offset_seconds): (
        String,
        String,
        String,
        String,
        DateTime<Utc>,
        i32,
        DateTime<Utc>,
        i32,
    ),
) -> EventRow {
    EventRow {
        id,
        name,
        description,
        location,
        start_time,
        start_time_offset_seconds,
        end_time,
        end_time_offset_seconds,
    }
}
