//! # DriveTime API
//!
//! HTTP surface for the DriveTime scheduling backend. This is the
//! form-handling layer: it parses the raw `HH:MM` strings the clients
//! submit, runs admission through the availability store, and returns the
//! decision (with its human-readable reason) for the UI to display.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use drivetime_store::AvailabilityStore;
use eyre::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// In-memory availability books, one per instructor
    pub store: AvailabilityStore,
    /// Minimum break between adjacent slots on the same day, in minutes
    pub min_gap_minutes: u16,
}

/// Builds the application router: all routes, shared state, CORS, and the
/// request timeout layer.
///
/// Kept separate from [`start_server`] so the full middleware stack can be
/// exercised in tests without binding a socket. The timeout uses
/// `tower_http::timeout::TimeoutLayer`, which converts elapsed deadlines
/// into 408 responses; the raw `tower` timeout cannot sit directly on a
/// `Router` because its error type is not infallible.
pub fn app(config: &config::ApiConfig, store: AvailabilityStore) -> Router {
    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        store,
        min_gap_minutes: config.min_gap_minutes,
    });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Instructor availability endpoints
        .merge(routes::availability::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse::<axum::http::HeaderValue>().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ))
}

/// Starts the API server with the provided configuration and store.
///
/// Initializes logging, wires up the router, then serves until the process
/// is stopped.
pub async fn start_server(config: config::ApiConfig, store: AvailabilityStore) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = app(&config, store);

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
