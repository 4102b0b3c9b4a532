//! # Error Handling Middleware
//!
//! Maps domain-specific booking errors to HTTP status codes and JSON error
//! responses, so every handler fails the same way. Input errors come back
//! as 400, an unknown expert as 404, a duplicate in-flight submission as
//! 409, and collaborator problems as 502.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use expertbook_client::gateway::ClientError;
use expertbook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps [`BookingError`] and implements `IntoResponse`, which
/// lets handlers use `?` on anything convertible into a booking error.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::DateNotSelected
            | BookingError::TimeNotSelected
            | BookingError::SlotInPast
            | BookingError::OutsideBusinessHours(_)
            | BookingError::DayUnavailable(_)
            | BookingError::SlotTaken
            | BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::ExpertNotFound(_) => StatusCode::NOT_FOUND,
            BookingError::SubmissionInProgress => StatusCode::CONFLICT,
            BookingError::Rejected(_) | BookingError::Transport(_) => StatusCode::BAD_GATEWAY,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows using `?` with functions returning `Result<T, BookingError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Client failures are transport problems from the caller's point of view.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError(BookingError::Transport(eyre::Report::new(err)))
    }
}
