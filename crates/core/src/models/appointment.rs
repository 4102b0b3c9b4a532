use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle states an appointment moves through on the marketplace.
///
/// Only `PendingAcceptance` and `Confirmed` occupy their slot; every other
/// state is inert for conflict purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    PendingAcceptance,
    Confirmed,
    Cancelled,
    Rejected,
    Completed,
    /// Statuses the marketplace added after this service shipped.
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    /// Whether an appointment in this status blocks its slot.
    pub fn is_blocking(self) -> bool {
        matches!(
            self,
            AppointmentStatus::PendingAcceptance | AppointmentStatus::Confirmed
        )
    }
}

/// An existing appointment of an expert, reduced to what conflict
/// resolution needs: when it starts and whether it still counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub start: DateTime<Utc>,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn new(start: DateTime<Utc>, status: AppointmentStatus) -> Self {
        Self { start, status }
    }

    pub fn is_blocking(&self) -> bool {
        self.status.is_blocking()
    }

    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Start time-of-day truncated to minute precision, the granularity at
    /// which slots are compared.
    pub fn slot_time(&self) -> NaiveTime {
        let time = self.start.time();
        NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap()
    }
}
