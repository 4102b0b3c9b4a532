/// The 6x7 Monday-first month grid with per-day availability
pub mod calendar;
/// The configurable candidate slot-time universe
pub mod hours;
/// The slot conflict filter
pub mod slots;
