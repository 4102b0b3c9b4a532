use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Every booking runs for one hour.
pub const BOOKING_DURATION_MINUTES: u32 = 60;

/// Transient state of a booking in progress: the date and time the user
/// has picked so far. Cleared after a successful submission, retained
/// after a failed one so the caller can correct and retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingSelection {
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<NaiveTime>,
}

impl BookingSelection {
    /// Picks a date. Moving to a different date invalidates any time
    /// chosen for the previous one.
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.selected_date != Some(date) {
            self.selected_time = None;
        }
        self.selected_date = Some(date);
    }

    pub fn select_time(&mut self, time: NaiveTime) {
        self.selected_time = Some(time);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The outbound booking command handed to the marketplace collaborator
/// once validation passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub title: String,
    pub expert_email: String,
    pub start: DateTime<Utc>,
    pub duration_minutes: u32,
}

impl BookingRequest {
    /// Composes the standard one-hour advisory session request.
    pub fn advisory_session(expert_email: &str, start: DateTime<Utc>) -> Self {
        Self {
            title: format!("Advisory session with {expert_email}"),
            expert_email: expert_email.to_string(),
            start,
            duration_minutes: BOOKING_DURATION_MINUTES,
        }
    }
}

/// The collaborator's verdict on a booking request. The payment link is
/// opaque and relayed to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Accepted { payment_link: String },
    Rejected { message: Option<String> },
}
