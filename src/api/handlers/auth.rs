//! Token issuance endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{TokenRequest, TokenResponse};
use crate::app_state::AppState;
use crate::auth::BEARER_TOKEN_TYPE;
use crate::error::{ApiError, ErrorResponse};

/// `POST /auth/token` — Issue a bearer token.
///
/// Credentials are not checked; any username receives a token. The
/// password field is accepted for wire compatibility and ignored.
///
/// # Errors
///
/// Returns [`ApiError::InvalidRequest`] when no username is supplied.
#[utoipa::path(
    post,
    path = "/api/v1/auth/token",
    tag = "Auth",
    summary = "Issue a bearer token",
    description = "Issues a signed JWT for the given username, valid for the configured lifetime.",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Missing username", body = ErrorResponse),
    )
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = req
        .username
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ApiError::InvalidRequest("username is required".to_string()))?;

    let access_token = state.auth.issue(&username, state.clock.now_utc())?;

    tracing::info!(user = %username, "token issued");

    Ok(Json(TokenResponse {
        access_token,
        token_type: BEARER_TOKEN_TYPE.to_string(),
        expires_in: state.auth.ttl_secs(),
    }))
}

/// Auth routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/token", post(issue_token))
}
