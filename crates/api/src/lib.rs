//! # Carnet API
//!
//! Web server for the availability and booking side of the Carnet de Santé
//! Virtuel: doctors publish weekly availability windows, patients see the
//! free slots of a given date and book appointments into them.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database interactions.
//! Slot computation itself lives in `carnet_core::slots` and does no I/O.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,

    /// Slot length applied when a request does not specify one
    pub slot_length: i32,
}

/// Builds the router with every endpoint and request tracing
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability windows and slots
        .merge(routes::availability::routes())
        // Appointment booking
        .merge(routes::appointment::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server with the provided configuration and database connection
///
/// Initializes logging, wires CORS and request timeouts around the router,
/// and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState {
        db_pool,
        slot_length: config.slot_length_minutes,
    });
    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new().layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_origin(allowed)
        .allow_credentials(true)
}
