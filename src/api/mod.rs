//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted under `/api/v1`, with the health check at
//! the root. When the `swagger-ui` feature is enabled the OpenAPI
//! document is served at `/api-docs/openapi.json` with an interactive
//! UI at `/swagger-ui`.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every endpoint and schema.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "events-api",
        description = "Event management service: events, attendee registrations, and token issuance."
    ),
    paths(
        handlers::events::create_event,
        handlers::events::list_events,
        handlers::events::get_event,
        handlers::registrations::add_registration,
        handlers::registrations::list_registrations,
        handlers::auth::issue_token,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::CreateEventRequest,
        dto::EventResponse,
        dto::CreateRegistrationRequest,
        dto::RegistrationResponse,
        dto::TokenRequest,
        dto::TokenResponse,
        handlers::system::HealthResponse,
        crate::error::ErrorResponse,
        crate::error::ErrorBody,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Events", description = "Event management"),
        (name = "Registrations", description = "Attendee registrations"),
        (name = "Auth", description = "Token issuance"),
        (name = "System", description = "Health and diagnostics"),
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_token` security scheme used by protected
/// endpoints.
#[derive(Debug)]
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api/v1", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
    use axum::http::{Request, StatusCode};
    use chrono::{Duration, Utc};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::auth::AuthSettings;
    use crate::domain::clock::FixedClock;
    use crate::persistence::memory::InMemoryEventsRepository;

    fn test_state() -> AppState {
        AppState {
            repository: Arc::new(InMemoryEventsRepository::new()),
            clock: Arc::new(FixedClock(Utc::now())),
            auth: AuthSettings::new("test-secret", "events-api", "events-api-clients", 1800),
        }
    }

    fn bearer(state: &AppState) -> String {
        let Ok(token) = state.auth.issue("tester", Utc::now()) else {
            panic!("token issuing failed");
        };
        format!("Bearer {token}")
    }

    fn event_body() -> Value {
        let now = Utc::now();
        json!({
            "name": "RustConf",
            "description": "Annual Rust conference.",
            "location": "Berlin",
            "start_time": (now + Duration::days(7)).to_rfc3339(),
            "end_time": (now + Duration::days(8)).to_rfc3339(),
        })
    }

    async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
        let app = build_router().with_state(state);
        let Ok(response) = app.oneshot(request).await else {
            panic!("request failed");
        };
        let status = response.status();
        let Ok(collected) = response.into_body().collect().await else {
            panic!("reading body failed");
        };
        let bytes = collected.to_bytes();
        let Ok(body) = serde_json::from_slice(&bytes) else {
            panic!("non-JSON body: {}", String::from_utf8_lossy(&bytes));
        };
        (status, body)
    }

    fn post(uri: &str, auth: Option<&str>, body: &Value) -> Request<Body> {
        let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/json");
        if let Some(token) = auth {
            builder = builder.header(AUTHORIZATION, token);
        }
        match builder.body(Body::from(body.to_string())) {
            Ok(request) => request,
            Err(e) => panic!("building request failed: {e}"),
        }
    }

    fn get(uri: &str) -> Request<Body> {
        match Request::get(uri).body(Body::empty()) {
            Ok(request) => request,
            Err(e) => panic!("building request failed: {e}"),
        }
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let (status, body) = send(test_state(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn creating_an_event_requires_a_token() {
        let (status, body) = send(
            test_state(),
            post("/api/v1/events", None, &event_body()),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], 4001);
    }

    #[tokio::test]
    async fn creating_an_event_echoes_the_stored_fields() {
        let state = test_state();
        let token = bearer(&state);

        let (status, body) = send(
            state.clone(),
            post("/api/v1/events", Some(&token), &event_body()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "RustConf");
        assert_eq!(body["location"], "Berlin");
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));

        let (status, listed) = send(state, get("/api/v1/events")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn a_missing_field_is_rejected_before_persistence() {
        let state = test_state();
        let token = bearer(&state);
        let mut body = event_body();
        if let Some(map) = body.as_object_mut() {
            map.remove("name");
        }

        let (status, response) = send(
            state.clone(),
            post("/api/v1/events", Some(&token), &body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["message"], "name is required");

        let (_, listed) = send(state, get("/api/v1/events")).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn a_past_start_time_is_rejected() {
        let state = test_state();
        let token = bearer(&state);
        let mut body = event_body();
        body["start_time"] = json!((Utc::now() - Duration::days(1)).to_rfc3339());

        let (status, response) =
            send(state, post("/api/v1/events", Some(&token), &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["error"]["code"], 1002);
    }

    #[tokio::test]
    async fn an_unknown_event_id_yields_not_found() {
        let (status, body) = send(test_state(), get("/api/v1/events/no-such-id")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], 2001);
    }

    #[tokio::test]
    async fn token_endpoint_issues_a_bearer_token() {
        let (status, body) = send(
            test_state(),
            post(
                "/api/v1/auth/token",
                None,
                &json!({"username": "jane", "password": "ignored"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["token_type"], "Bearer");
        assert_eq!(body["expires_in"], 1800);
        assert!(body["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn registrations_round_trip_through_the_event() {
        let state = test_state();
        let token = bearer(&state);

        let (_, created) = send(
            state.clone(),
            post("/api/v1/events", Some(&token), &event_body()),
        )
        .await;
        let Some(event_id) = created["id"].as_str() else {
            panic!("event creation returned no id");
        };

        let registration = json!({
            "name": "Ada Lovelace",
            "phone_number": "+4915123456789",
            "email_address": "\tada@example.com\t",
        });
        let uri = format!("/api/v1/events/{event_id}/registrations");
        let (status, body) = send(state.clone(), post(&uri, None, &registration)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["event_id"], event_id);
        assert_eq!(body["email_address"], "ada@example.com");

        let padded = json!({
            "name": "Ada Lovelace",
            "phone_number": "+4915123456789",
            "email_address": " ada@example.com ",
        });
        let (status, body) = send(state.clone(), post(&uri, None, &padded)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 1002);

        let (status, listed) = send(state, get(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
        assert_eq!(listed[0]["name"], "Ada Lovelace");
    }

    #[tokio::test]
    async fn registering_for_an_unknown_event_yields_not_found() {
        let registration = json!({
            "name": "Ada Lovelace",
            "phone_number": "+4915123456789",
            "email_address": "ada@example.com",
        });
        let (status, body) = send(
            test_state(),
            post("/api/v1/events/no-such-id/registrations", None, &registration),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], 2001);
    }

    #[test]
    fn openapi_document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/events"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/events/{id}"));
        assert!(
            paths
                .iter()
                .any(|p| p.as_str() == "/api/v1/events/{id}/registrations")
        );
        assert!(paths.iter().any(|p| p.as_str() == "/api/v1/auth/token"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
