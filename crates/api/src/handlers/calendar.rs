//! # Calendar Handlers
//!
//! Read-side endpoints of the booking flow: the month grid an expert can
//! be booked on, and the offerable times for one selected day. Both are
//! thin adapters over the pure scheduling core; the only IO is fetching
//! the expert record and appointment list from the marketplace backend.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use expertbook_core::errors::BookingError;
use expertbook_core::models::expert::Expert;
use expertbook_core::schedule::calendar::{self, MonthGrid, MonthRef};
use expertbook_core::schedule::slots;

use crate::{middleware::error_handling::AppError, ApiState};

/// Message returned when a day has no offerable times left.
pub const NO_TIMES_MESSAGE: &str = "No times are available for this day";

/// Query parameters for the calendar endpoint. Year and month default to
/// the current month; `selected` highlights the matching cell.
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub selected: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub expert: String,
    pub grid: MonthGrid,
    /// Months the caller navigates to from here, year wrap included.
    pub prev: MonthRef,
    pub next: MonthRef,
}

/// Query parameters for the slot listing endpoint.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct DaySlotsResponse {
    pub date: NaiveDate,
    /// Offerable times as `HH:MM` strings, ascending.
    pub times: Vec<String>,
    /// Present exactly when no time is offerable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

async fn load_expert(state: &ApiState, email: &str) -> Result<Expert, AppError> {
    let expert = state
        .directory
        .get_expert(email)
        .await?
        .ok_or_else(|| BookingError::ExpertNotFound(email.to_string()))?;
    Ok(expert)
}

/// Returns the month grid for an expert.
#[axum::debug_handler]
pub async fn get_calendar(
    State(state): State<Arc<ApiState>>,
    Path(email): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = Utc::now().date_naive();

    let month = match (query.year, query.month) {
        (None, None) => MonthRef::containing(today),
        (year, month) => {
            let year = year.unwrap_or_else(|| today.year());
            let month = month.unwrap_or_else(|| today.month());
            MonthRef::new(year, month).ok_or_else(|| {
                BookingError::Validation(format!("Month {month} is out of range"))
            })?
        }
    };

    let expert = load_expert(&state, &email).await?;
    let appointments = state.directory.get_appointments(&email).await?;

    let grid = calendar::build_month_grid(
        month,
        today,
        query.selected,
        &expert,
        &appointments,
        &state.hours,
    );

    Ok(Json(CalendarResponse {
        expert: expert.email,
        prev: month.prev(),
        next: month.next(),
        grid,
    }))
}

/// Returns the offerable times for one day. An empty day carries an
/// explicit message so the caller never renders a silently empty control.
#[axum::debug_handler]
pub async fn get_day_slots(
    State(state): State<Arc<ApiState>>,
    Path(email): Path<String>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<DaySlotsResponse>, AppError> {
    let _expert = load_expert(&state, &email).await?;
    let appointments = state.directory.get_appointments(&email).await?;

    let times = slots::offerable_times(query.date, &appointments, &state.hours);
    let message = times.is_empty().then(|| NO_TIMES_MESSAGE.to_string());

    Ok(Json(DaySlotsResponse {
        date: query.date,
        times: times.iter().map(format_time).collect(),
        message,
    }))
}

fn format_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
