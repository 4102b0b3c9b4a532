//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the
//! Expertbook API server. It retrieves configuration values from
//! environment variables and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `MARKETPLACE_BASE_URL`: Base URL of the marketplace backend (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `BOOKING_SLOT_TIMES`: Comma-separated `HH:MM` values overriding the
//!   default slot-time universe

use eyre::{bail, Result, WrapErr};
use std::env;
use tracing::Level;

use expertbook_core::schedule::hours::BusinessHours;

/// Configuration for the Expertbook API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Base URL of the marketplace backend collaborator
    pub marketplace_base_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Candidate slot times offered for booking
    pub slot_times: BusinessHours,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The MARKETPLACE_BASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - The BOOKING_SLOT_TIMES value contains anything but `HH:MM` times
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Collaborator settings
        let marketplace_base_url = env::var("MARKETPLACE_BASE_URL")
            .wrap_err("MARKETPLACE_BASE_URL environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Booking settings. A malformed override fails loudly; silently
        // shrinking the slot universe would look like lost availability.
        let slot_times = match env::var("BOOKING_SLOT_TIMES") {
            Ok(spec) => {
                let hours =
                    BusinessHours::parse(&spec).wrap_err("Invalid BOOKING_SLOT_TIMES value")?;
                if hours.is_empty() {
                    bail!("BOOKING_SLOT_TIMES must name at least one HH:MM slot time");
                }
                hours
            }
            Err(_) => BusinessHours::default(),
        };

        Ok(Self {
            host,
            port,
            marketplace_base_url,
            log_level,
            cors_origins,
            request_timeout,
            slot_times,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
