//! # Booking Submission
//!
//! The state machine that drives one booking attempt from slot selection
//! to the collaborator's verdict:
//!
//! ```text
//! Idle -> Validating -> Submitting -> Succeeded | Failed(reason) -> Idle
//! ```
//!
//! Preconditions run in order and stop at the first failure, each with its
//! own message. While a submission is in flight every further attempt is
//! refused without composing another outbound request; that exactly-once
//! guarantee is the invariant the flow exists to keep.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::BookingError;
use crate::models::appointment::Appointment;
use crate::models::booking::{BookingOutcome, BookingRequest, BookingSelection};
use crate::models::expert::Expert;
use crate::schedule::hours::BusinessHours;
use crate::schedule::slots;

/// Fallback shown when the collaborator rejects a booking without saying
/// why.
pub const REJECTION_FALLBACK: &str = "The booking could not be completed. Please try again.";

/// Where a booking attempt currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting { reference: Uuid },
    Succeeded { payment_link: String },
    Failed { reason: String },
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle
    }
}

/// Combines a selected date and time into the booking start instant.
pub fn compose(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

/// Validates a booking selection, checks applied in order with the first
/// failure winning: date picked, time picked, composed instant strictly in
/// the future, time inside business hours, weekday offered by the expert,
/// slot not already taken.
pub fn validate_booking(
    selection: &BookingSelection,
    now: DateTime<Utc>,
    expert: &Expert,
    appointments: &[Appointment],
    hours: &BusinessHours,
) -> Result<DateTime<Utc>, BookingError> {
    let date = selection.selected_date.ok_or(BookingError::DateNotSelected)?;
    let time = selection.selected_time.ok_or(BookingError::TimeNotSelected)?;

    let start = compose(date, time);
    if start <= now {
        // The slot may have been valid when rendered and lapsed since.
        return Err(BookingError::SlotInPast);
    }
    if !hours.contains(time) {
        return Err(BookingError::OutsideBusinessHours(time));
    }
    if !expert.is_available_on(date.weekday()) {
        return Err(BookingError::DayUnavailable(date.weekday()));
    }
    if slots::slot_taken(date, time, appointments) {
        return Err(BookingError::SlotTaken);
    }

    Ok(start)
}

/// Drives one booking attempt. Owns the selection and the submission
/// state; nothing here is shared or global.
#[derive(Debug, Default)]
pub struct BookingFlow {
    selection: BookingSelection,
    state: SubmissionState,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn selection(&self) -> &BookingSelection {
        &self.selection
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selection.select_date(date);
    }

    pub fn select_time(&mut self, time: NaiveTime) {
        self.selection.select_time(time);
    }

    /// Runs the precondition checks and, if they pass, transitions to
    /// `Submitting` and composes the outbound request.
    ///
    /// A validation failure moves the flow to `Failed` but keeps the
    /// selection, so the caller can correct and resubmit. A call while a
    /// submission is already in flight fails without composing a second
    /// request.
    pub fn begin_submission(
        &mut self,
        now: DateTime<Utc>,
        expert: &Expert,
        appointments: &[Appointment],
        hours: &BusinessHours,
    ) -> Result<BookingRequest, BookingError> {
        if matches!(self.state, SubmissionState::Submitting { .. }) {
            return Err(BookingError::SubmissionInProgress);
        }

        self.state = SubmissionState::Validating;
        let start = match validate_booking(&self.selection, now, expert, appointments, hours) {
            Ok(start) => start,
            Err(err) => {
                self.state = SubmissionState::Failed {
                    reason: err.to_string(),
                };
                return Err(err);
            }
        };

        let reference = Uuid::new_v4();
        info!(%reference, expert = %expert.email, %start, "submitting booking request");
        self.state = SubmissionState::Submitting { reference };
        Ok(BookingRequest::advisory_session(&expert.email, start))
    }

    /// Settles the flow with the collaborator's verdict and returns the
    /// resulting state. Success clears the selection; rejection keeps it
    /// for a retry.
    pub fn complete(&mut self, outcome: BookingOutcome) -> SubmissionState {
        match outcome {
            BookingOutcome::Accepted { payment_link } => {
                self.selection.clear();
                self.state = SubmissionState::Succeeded { payment_link };
            }
            BookingOutcome::Rejected { message } => {
                let reason = message.unwrap_or_else(|| REJECTION_FALLBACK.to_string());
                warn!(%reason, "booking request rejected");
                self.state = SubmissionState::Failed { reason };
            }
        }
        self.state.clone()
    }

    /// Returns the flow to `Idle`, ready for the next attempt.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }
}
