//! # Calendar Grid Builder
//!
//! Builds the month view the booking page renders: a 6x7 Monday-first grid
//! where each in-month day is either selectable or inactive. Past days and
//! days outside the expert's weekly pattern go inactive without comment; a
//! day whose every slot is blocked is called out as fully booked.
//!
//! The grid is recomputed in full for every request. Selection highlighting
//! is derived by comparing each cell's date against the caller's currently
//! selected date, so the builder stays stateless.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::appointment::Appointment;
use crate::models::expert::Expert;
use crate::schedule::hours::BusinessHours;
use crate::schedule::slots;

/// Note attached to a day that has appointments on every candidate time.
pub const FULLY_BOOKED_NOTE: &str = "Fully booked";

/// A `(year, month)` pair with wrapping navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRef {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month a given date falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The preceding month, wrapping January back to December.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The following month, wrapping December forward to January.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn days_in_month(self) -> u32 {
        self.next().first_day().pred_opt().unwrap().day()
    }
}

/// Availability of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Available,
    Unavailable,
    FullyBooked,
}

/// One in-month cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub status: DayStatus,
    pub selectable: bool,
    /// Shown to the user only when the whole day is taken.
    pub note: Option<String>,
    pub selected: bool,
}

/// The month view model: six Monday-first weeks, `None` cells padding the
/// days that belong to the neighboring months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: MonthRef,
    pub weeks: Vec<Vec<Option<DayCell>>>,
}

/// Availability of one day, checks applied in order: past days first, then
/// the weekly pattern, then full occupation.
pub fn day_status(
    date: NaiveDate,
    today: NaiveDate,
    expert: &Expert,
    appointments: &[Appointment],
    hours: &BusinessHours,
) -> DayStatus {
    if date < today {
        return DayStatus::Unavailable;
    }
    if !expert.is_available_on(date.weekday()) {
        return DayStatus::Unavailable;
    }
    if slots::day_fully_booked(date, appointments, hours) {
        return DayStatus::FullyBooked;
    }
    DayStatus::Available
}

/// Builds the month grid for an expert.
pub fn build_month_grid(
    month: MonthRef,
    today: NaiveDate,
    selected: Option<NaiveDate>,
    expert: &Expert,
    appointments: &[Appointment],
    hours: &BusinessHours,
) -> MonthGrid {
    let lead = month.first_day().weekday().num_days_from_monday() as usize;
    let days = month.days_in_month();

    let mut weeks = Vec::with_capacity(6);
    let mut day: u32 = 1;
    for row in 0..6 {
        let mut week = Vec::with_capacity(7);
        for col in 0..7 {
            if row * 7 + col < lead || day > days {
                week.push(None);
                continue;
            }
            let date = NaiveDate::from_ymd_opt(month.year, month.month, day).unwrap();
            let status = day_status(date, today, expert, appointments, hours);
            week.push(Some(DayCell {
                day,
                date,
                status,
                selectable: status == DayStatus::Available,
                note: (status == DayStatus::FullyBooked).then(|| FULLY_BOOKED_NOTE.to_string()),
                selected: selected == Some(date),
            }));
            day += 1;
        }
        weeks.push(week);
    }

    MonthGrid { month, weeks }
}
