//! # Booking Submission Handler
//!
//! Runs a booking attempt end to end: validate the selection through the
//! submission state machine, hold the per-slot in-flight guard across the
//! collaborator call, and relay the payment link or the rejection reason.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use expertbook_core::errors::BookingError;
use expertbook_core::submission::{BookingFlow, SubmissionState};

use crate::{middleware::error_handling::AppError, ApiState};

/// A booking submission as posted by the booking form. Both fields are
/// optional on the wire so the validator can report which one is missing.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingSubmission {
    pub date: Option<NaiveDate>,
    /// `HH:MM`, seconds tolerated.
    pub time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_link: Option<String>,
}

/// Releases the in-flight slot key on drop, covering every return path.
struct InflightGuard<'a> {
    state: &'a ApiState,
    key: (String, DateTime<Utc>),
}

impl<'a> InflightGuard<'a> {
    /// Claims the slot key; `None` when another submission already holds
    /// it.
    fn acquire(state: &'a ApiState, key: (String, DateTime<Utc>)) -> Option<Self> {
        let mut inflight = state.inflight.lock().expect("inflight lock poisoned");
        if !inflight.insert(key.clone()) {
            return None;
        }
        Some(Self { state, key })
    }
}

impl Drop for InflightGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut inflight) = self.state.inflight.lock() {
            inflight.remove(&self.key);
        }
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, BookingError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| BookingError::Validation(format!("{raw} is not a valid HH:MM time")))
}

/// Validates and submits a booking for an expert.
#[axum::debug_handler]
pub async fn submit_booking(
    State(state): State<Arc<ApiState>>,
    Path(email): Path<String>,
    Json(payload): Json<BookingSubmission>,
) -> Result<Json<BookingResponse>, AppError> {
    let expert = state
        .directory
        .get_expert(&email)
        .await?
        .ok_or_else(|| BookingError::ExpertNotFound(email.clone()))?;
    let appointments = state.directory.get_appointments(&email).await?;

    let mut flow = BookingFlow::new();
    if let Some(date) = payload.date {
        flow.select_date(date);
    }
    if let Some(raw) = payload.time.as_deref() {
        flow.select_time(parse_time(raw)?);
    }

    let request = flow.begin_submission(Utc::now(), &expert, &appointments, &state.hours)?;

    // Cross-request double-submit guard for the same slot; the core flow
    // only protects a single session.
    let _guard = InflightGuard::acquire(&state, (expert.email.clone(), request.start))
        .ok_or(BookingError::SubmissionInProgress)?;

    let outcome = state.bookings.create_booking_preference(request).await?;

    match flow.complete(outcome) {
        SubmissionState::Succeeded { payment_link } => Ok(Json(BookingResponse {
            success: true,
            payment_link: Some(payment_link),
        })),
        SubmissionState::Failed { reason } => Err(AppError(BookingError::Rejected(reason))),
        // complete() only settles into Succeeded or Failed.
        _ => Err(AppError(BookingError::Rejected(
            expertbook_core::submission::REJECTION_FALLBACK.to_string(),
        ))),
    }
}
