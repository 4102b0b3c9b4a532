//! # Expertbook API
//!
//! The API crate provides the web server for the booking-availability
//! service. It exposes the calendar view model, the per-day slot list, and
//! the booking submission flow over REST.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic on top of the pure
//!   scheduling core
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; the marketplace backend is
//! reached through the trait seams of the client crate, so tests swap in
//! mocks where production wires the HTTP client.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::Router;
use chrono::{DateTime, Utc};
use eyre::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use expertbook_client::gateway::{BookingGateway, ExpertDirectory};
use expertbook_core::schedule::hours::BusinessHours;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// Read-side collaborator: expert records and appointments.
    pub directory: Arc<dyn ExpertDirectory>,
    /// Write-side collaborator: booking-preference creation.
    pub bookings: Arc<dyn BookingGateway>,
    /// Candidate slot-time universe offered for booking.
    pub hours: BusinessHours,
    /// Submissions currently in flight, keyed by expert and start instant.
    /// A second submission for the same key is refused while the first one
    /// is pending.
    pub inflight: Mutex<HashSet<(String, DateTime<Utc>)>>,
}

impl ApiState {
    pub fn new(
        directory: Arc<dyn ExpertDirectory>,
        bookings: Arc<dyn BookingGateway>,
        hours: BusinessHours,
    ) -> Self {
        Self {
            directory,
            bookings,
            hours,
            inflight: Mutex::new(HashSet::new()),
        }
    }
}

/// Builds the application router; shared by the server and the tests.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Calendar and slot listing endpoints
        .merge(routes::calendar::routes())
        // Booking submission endpoint
        .merge(routes::booking::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and collaborator
/// clients.
pub async fn start_server(
    config: config::ApiConfig,
    directory: Arc<dyn ExpertDirectory>,
    bookings: Arc<dyn BookingGateway>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(directory, bookings, config.slot_times.clone()));

    let app = router(state).layer(tower_http::trace::TraceLayer::new_for_http());

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            );

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(tower_http::timeout::TimeoutLayer::new(
                std::time::Duration::from_secs(config.request_timeout),
            ))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
