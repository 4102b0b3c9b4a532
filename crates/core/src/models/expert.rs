use chrono::Weekday;
use std::collections::HashSet;

/// An expert as the booking flow sees one: an email identity plus the
/// weekly availability pattern. Immutable for the duration of a booking
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expert {
    pub email: String,
    pub available_days: HashSet<Weekday>,
}

impl Expert {
    pub fn new(email: impl Into<String>, available_days: HashSet<Weekday>) -> Self {
        Self {
            email: email.into(),
            available_days,
        }
    }

    /// Whether the weekly pattern offers this weekday at all.
    pub fn is_available_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }
}
