//! # Expertbook Client
//!
//! Typed async client for the marketplace backend: the collaborator that
//! owns expert records and appointments, and that turns a validated
//! booking into a payment link.
//!
//! The crate exposes trait seams (`ExpertDirectory`, `BookingGateway`) so
//! the API layer depends on behavior rather than on HTTP; the reqwest
//! implementation and the mockall mocks both live here.

/// Collaborator traits and the client error type
pub mod gateway;
/// reqwest implementation of the collaborator traits
pub mod http;
/// Mock collaborators for testing
pub mod mock;
/// Wire DTOs matching the marketplace JSON contract
pub mod models;

use eyre::Result;

use crate::http::HttpMarketplaceClient;

/// Builds the HTTP client for the configured marketplace base URL.
pub fn create_client(base_url: &str) -> Result<HttpMarketplaceClient> {
    let http = reqwest::Client::builder().build()?;
    Ok(HttpMarketplaceClient::new(http, base_url))
}
