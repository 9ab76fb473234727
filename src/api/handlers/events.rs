//! Event handlers: create, list, get.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{CreateEventRequest, EventResponse};
use crate::app_state::AppState;
use crate::auth::AuthenticatedUser;
use crate::domain::Id;
use crate::error::{ApiError, ErrorResponse};

/// `POST /events` — Create a new event.
///
/// Requires a bearer token. The whole request is validated by the domain
/// layer before anything is persisted.
///
/// # Errors
///
/// Returns [`ApiError`] on missing fields, domain rejections, or a
/// missing/invalid token.
#[utoipa::path(
    post,
    path = "/api/v1/events",
    tag = "Events",
    summary = "Create a new event",
    description = "Creates an event from name, description, location, and a future time window. All fields are validated before persistence.",
    security(("bearer_token" = [])),
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = EventResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(req): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let event = req.into_entity(state.clock.as_ref())?;
    state.repository.save(&event).await?;

    tracing::info!(event_id = %event.id(), user = %user.claims.sub, "event created");

    Ok((StatusCode::CREATED, Json(EventResponse::from(&event))))
}

/// `GET /events` — List all events.
///
/// # Errors
///
/// Returns [`ApiError::Persistence`] on storage failure.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    summary = "List events",
    description = "Returns every stored event in identifier order. Identifiers are time-ordered, so this is creation order for generated ids.",
    responses(
        (status = 200, description = "All stored events", body = Vec<EventResponse>),
    )
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let events = state.repository.get_all().await?;
    let response: Vec<EventResponse> = events.iter().map(EventResponse::from).collect();
    Ok(Json(response))
}

/// `GET /events/:id` — Get a single event.
///
/// # Errors
///
/// Returns [`ApiError::EventNotFound`] if no event has the identifier.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}",
    tag = "Events",
    summary = "Get event details",
    description = "Returns a single event by identifier.",
    params(
        ("id" = String, Path, description = "Event identifier"),
    ),
    responses(
        (status = 200, description = "Event details", body = EventResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = Id::of(id)?;
    let event = state
        .repository
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::EventNotFound(id.to_string()))?;

    Ok(Json(EventResponse::from(&event)))
}

/// Event routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(create_event).get(list_events))
        .route("/events/{id}", get(get_event))
}
