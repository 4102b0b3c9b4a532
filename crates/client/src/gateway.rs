use async_trait::async_trait;
use thiserror::Error;

use expertbook_core::models::appointment::Appointment;
use expertbook_core::models::booking::{BookingOutcome, BookingRequest};
use expertbook_core::models::expert::Expert;

/// Failures reaching or understanding the marketplace backend. Collaborator
/// rejections are not errors at this layer; they come back as a
/// [`BookingOutcome::Rejected`] verdict.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request to the marketplace backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("the marketplace backend returned an unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read side of the collaborator: expert records and their appointments.
#[async_trait]
pub trait ExpertDirectory: Send + Sync {
    /// Fetches an expert by email. `Ok(None)` when the marketplace does
    /// not know the address.
    async fn get_expert(&self, email: &str) -> Result<Option<Expert>, ClientError>;

    /// Fetches the expert's existing appointments, any status.
    async fn get_appointments(&self, email: &str) -> Result<Vec<Appointment>, ClientError>;
}

/// Write side of the collaborator: booking-preference creation. The
/// returned outcome carries the opaque payment link on acceptance.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn create_booking_preference(
        &self,
        request: BookingRequest,
    ) -> Result<BookingOutcome, ClientError>;
}
