//! In-memory implementation of the repository contract.
//!
//! Backs handler tests and database-free local runs. Events are keyed by
//! identifier in a `BTreeMap`; since fresh identifiers are time-ordered
//! UUIDv7 strings, iteration order matches creation order, mirroring the
//! `ORDER BY id` the PostgreSQL implementation uses.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::EventsRepository;
use crate::domain::{Event, Id, Registration};
use crate::error::ApiError;

#[derive(Debug, Default)]
struct Store {
    events: BTreeMap<String, Event>,
    registrations: BTreeMap<String, Vec<Registration>>,
}

/// Repository holding everything in process memory.
#[derive(Debug, Default)]
pub struct InMemoryEventsRepository {
    store: RwLock<Store>,
}

impl InMemoryEventsRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventsRepository for InMemoryEventsRepository {
    async fn save(&self, event: &Event) -> Result<(), ApiError> {
        let mut store = self.store.write().await;

        // Upsert the scalar fields; the stored copy never carries a
        // pending list of its own.
        let stored = Event::of(
            event.id().clone(),
            event.name().clone(),
            event.description().clone(),
            event.location().clone(),
            *event.start_time(),
            *event.end_time(),
        );
        store.events.insert(event.id().as_str().to_string(), stored);

        if !event.pending_registrations().is_empty() {
            let children = store
                .registrations
                .entry(event.id().as_str().to_string())
                .or_default();
            children.extend(event.pending_registrations().iter().cloned());
        }

        Ok(())
    }

    async fn get(&self, id: &Id) -> Result<Option<Event>, ApiError> {
        let store = self.store.read().await;
        Ok(store.events.get(id.as_str()).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Event>, ApiError> {
        let store = self.store.read().await;
        Ok(store.events.values().cloned().collect())
    }

    async fn get_all_registrations(&self, event_id: &Id) -> Result<Vec<Registration>, ApiError> {
        let store = self.store.read().await;
        Ok(store
            .registrations
            .get(event_id.as_str())
            .cloned()
            .unwrap_or_default())
    }
}
