use chrono::{NaiveTime, Weekday};
use thiserror::Error;

/// Everything that can go wrong between picking a slot and receiving a
/// payment link. The first three variants are the submission preconditions
/// and carry the inline messages shown next to the booking form; the rest
/// cover request validation, concurrency, and the collaborator.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("No date selected")]
    DateNotSelected,

    #[error("No time selected")]
    TimeNotSelected,

    #[error("The selected slot is no longer in the future")]
    SlotInPast,

    #[error("{0} is not a bookable time")]
    OutsideBusinessHours(NaiveTime),

    #[error("The expert is not available on {0}")]
    DayUnavailable(Weekday),

    #[error("The selected slot has already been taken")]
    SlotTaken,

    #[error("A submission for this slot is already in progress")]
    SubmissionInProgress,

    #[error("Expert not found: {0}")]
    ExpertNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("The booking service rejected the request: {0}")]
    Rejected(String),

    #[error("Could not reach the booking service: {0}")]
    Transport(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
