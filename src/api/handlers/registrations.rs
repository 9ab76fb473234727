//! Registration handlers: add to an event, list for an event.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{CreateRegistrationRequest, RegistrationResponse};
use crate::app_state::AppState;
use crate::domain::Id;
use crate::error::{ApiError, ErrorResponse};

/// `POST /events/:id/registrations` — Register an attendee for an event.
///
/// Loads the aggregate, stages the new registration on it, and saves,
/// which persists the staged child row.
///
/// # Errors
///
/// Returns [`ApiError::EventNotFound`] if the event does not exist and
/// [`ApiError`] validation variants for rejected fields.
#[utoipa::path(
    post,
    path = "/api/v1/events/{id}/registrations",
    tag = "Registrations",
    summary = "Register an attendee",
    description = "Validates the attendee's name, E.164 phone number, and email address, then attaches the registration to the event.",
    params(
        ("id" = String, Path, description = "Event identifier"),
    ),
    request_body = CreateRegistrationRequest,
    responses(
        (status = 201, description = "Registration created successfully", body = RegistrationResponse),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn add_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateRegistrationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = Id::of(id)?;
    let mut event = state
        .repository
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::EventNotFound(id.to_string()))?;

    let registration = req.into_entity(event.id())?;
    let response = RegistrationResponse::from(&registration);
    event.add(registration);
    state.repository.save(&event).await?;

    tracing::info!(
        event_id = %event.id(),
        registration_id = %response.id,
        "registration created"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// `GET /events/:id/registrations` — List an event's registrations.
///
/// # Errors
///
/// Returns [`ApiError::EventNotFound`] if the event does not exist.
#[utoipa::path(
    get,
    path = "/api/v1/events/{id}/registrations",
    tag = "Registrations",
    summary = "List registrations for an event",
    description = "Returns every registration stored for the event, in identifier order.",
    params(
        ("id" = String, Path, description = "Event identifier"),
    ),
    responses(
        (status = 200, description = "All registrations for the event", body = Vec<RegistrationResponse>),
        (status = 404, description = "Event not found", body = ErrorResponse),
    )
)]
pub async fn list_registrations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = Id::of(id)?;
    if state.repository.get(&id).await?.is_none() {
        return Err(ApiError::EventNotFound(id.to_string()));
    }

    let registrations = state.repository.get_all_registrations(&id).await?;
    let response: Vec<RegistrationResponse> =
        registrations.iter().map(RegistrationResponse::from).collect();
    Ok(Json(response))
}

/// Registration routes, nested under the event resource.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events/{id}/registrations",
            post(add_registration).get(list_registrations),
        )
}
