//! Wire DTOs for the marketplace backend JSON contract. Field names on the
//! wire are the collaborator's; conversion into core types is where
//! defensive parsing happens.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use expertbook_core::models::appointment::{Appointment, AppointmentStatus};
use expertbook_core::models::booking::{BookingOutcome, BookingRequest};
use expertbook_core::models::expert::Expert;

/// Expert record as served by the marketplace backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertRecord {
    pub email: String,
    #[serde(rename = "infoExperto")]
    pub info: ExpertInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertInfo {
    #[serde(rename = "diasDisponibles", default)]
    pub available_days: Vec<String>,
}

impl ExpertRecord {
    /// Converts into the domain expert. Unrecognized day names are skipped
    /// with a warning; a day the service cannot understand is never
    /// offered.
    pub fn into_expert(self) -> Expert {
        let mut days = HashSet::new();
        for name in &self.info.available_days {
            match name.parse::<Weekday>() {
                Ok(day) => {
                    days.insert(day);
                }
                Err(_) => warn!(day = %name, "unrecognized weekday in expert availability"),
            }
        }
        Expert::new(self.email, days)
    }
}

/// One appointment row from the marketplace backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentRecord {
    #[serde(rename = "fechaHoraInicio")]
    pub start: DateTime<Utc>,
    #[serde(rename = "estado")]
    pub status: AppointmentStatus,
}

impl From<AppointmentRecord> for Appointment {
    fn from(record: AppointmentRecord) -> Self {
        Appointment::new(record.start, record.status)
    }
}

/// Booking-preference creation request, as the payments collaborator
/// expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePreferenceRequest {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "expertoEmail")]
    pub expert_email: String,
    #[serde(rename = "fechaHoraInicio")]
    pub start: DateTime<Utc>,
    #[serde(rename = "duracionMinutos")]
    pub duration_minutes: u32,
}

impl From<BookingRequest> for CreatePreferenceRequest {
    fn from(request: BookingRequest) -> Self {
        Self {
            title: request.title,
            expert_email: request.expert_email,
            start: request.start,
            duration_minutes: request.duration_minutes,
        }
    }
}

/// Booking-preference creation response. `data` is present on success and
/// carries the opaque payment link; `mensaje` explains a rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePreferenceResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<PreferenceData>,
    #[serde(rename = "mensaje", default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceData {
    #[serde(rename = "linkPago")]
    pub payment_link: String,
}

impl CreatePreferenceResponse {
    /// Reduces the response to a verdict. A success flag without a payment
    /// link is treated as a rejection; the caller cannot act on it.
    pub fn into_outcome(self) -> BookingOutcome {
        match (self.success, self.data) {
            (true, Some(data)) => BookingOutcome::Accepted {
                payment_link: data.payment_link,
            },
            (true, None) | (false, _) => BookingOutcome::Rejected {
                message: self.message,
            },
        }
    }
}
