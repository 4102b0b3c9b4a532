/// Booking submission route
pub mod booking;
/// Calendar and slot listing routes
pub mod calendar;
/// Health check routes
pub mod health;
