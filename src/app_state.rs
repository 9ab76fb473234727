//! Shared application state injected into all axum handlers.

use std::sync::Arc;

use crate::auth::AuthSettings;
use crate::domain::Clock;
use crate::persistence::EventsRepository;

/// Shared application state available to all handlers via axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Repository the event handlers persist through.
    pub repository: Arc<dyn EventsRepository>,
    /// Clock supplying "now" for time-validity checks and token issuance.
    pub clock: Arc<dyn Clock>,
    /// JWT signing and verification settings.
    pub auth: AuthSettings,
}
