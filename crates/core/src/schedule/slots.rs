use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::models::appointment::Appointment;
use crate::schedule::hours::BusinessHours;

fn minute_of(time: NaiveTime) -> NaiveTime {
    // Appointment timestamps may carry seconds; slots compare at hh:mm.
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap()
}

/// Whether a blocking appointment occupies `date` at `time`.
///
/// Cancelled, rejected, completed, and unrecognized appointments never
/// occupy anything.
pub fn slot_taken(date: NaiveDate, time: NaiveTime, appointments: &[Appointment]) -> bool {
    appointments
        .iter()
        .any(|appt| appt.is_blocking() && appt.date() == date && appt.slot_time() == minute_of(time))
}

/// The ordered offerable times for a day: every configured candidate time
/// without a blocking appointment at the same minute.
pub fn offerable_times(
    date: NaiveDate,
    appointments: &[Appointment],
    hours: &BusinessHours,
) -> Vec<NaiveTime> {
    hours
        .times()
        .iter()
        .copied()
        .filter(|&time| !slot_taken(date, time, appointments))
        .collect()
}

/// A day is fully booked when it has candidate times and every one of them
/// is taken.
pub fn day_fully_booked(
    date: NaiveDate,
    appointments: &[Appointment],
    hours: &BusinessHours,
) -> bool {
    !hours.is_empty() && offerable_times(date, appointments, hours).is_empty()
}
