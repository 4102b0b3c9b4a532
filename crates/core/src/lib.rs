//! # Expertbook Core
//!
//! Domain library for the expert booking platform: the slot availability
//! and booking validation rules, free of any IO or HTTP concern.
//!
//! ## Architecture
//!
//! - **Models**: experts, appointments, and the transient booking selection
//! - **Schedule**: the calendar grid builder and the slot conflict filter
//! - **Submission**: the booking submission state machine and its
//!   precondition checks
//!
//! Everything here is pure computation over values supplied by the caller;
//! fetching expert records or creating booking preferences belongs to the
//! client crate.

/// Error taxonomy for the booking flow
pub mod errors;
/// Domain models shared across the workspace
pub mod models;
/// Calendar grid and slot availability computation
pub mod schedule;
/// Booking submission state machine
pub mod submission;
