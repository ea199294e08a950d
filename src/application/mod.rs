//! Application layer: the status-polling and change-detection loop.
//!
//! - [`validate`] checks the shape of a decoded response.
//! - [`format_status`] turns the most recent record into a message.
//! - [`Poller`] runs the cycle forever and owns failure containment.

pub mod format;
pub mod poll;
pub mod validate;

pub use format::{failure_message, format_status, NO_ASSIGNMENTS_MESSAGE};
pub use poll::{CycleOutcome, Poller};
pub use validate::{validate, ValidatedResponse};
