/// Booking submission handler
pub mod booking;
/// Calendar grid and slot listing handlers
pub mod calendar;
