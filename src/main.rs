//! events-api server entry point.
//!
//! Starts the Axum HTTP server backed by PostgreSQL.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use events_api::api;
use events_api::app_state::AppState;
use events_api::auth::AuthSettings;
use events_api::config::ApiConfig;
use events_api::domain::SystemClock;
use events_api::persistence::postgres::PostgresEventsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ApiConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting events-api");

    // Connect to PostgreSQL and apply migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!().run(&pool).await?;

    // Build application state
    let app_state = AppState {
        repository: Arc::new(PostgresEventsRepository::new(pool)),
        clock: Arc::new(SystemClock),
        auth: AuthSettings::new(
            &config.jwt_secret,
            &config.jwt_issuer,
            &config.jwt_audience,
            config.token_ttl_secs,
        ),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
