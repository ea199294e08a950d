//! Review-status domain: verdicts, assignment records and poll state.
//!
//! Nothing in here performs I/O. The application layer drives these types
//! through the ports defined in [`crate::port`].

pub mod error;

mod homework;
mod state;
mod verdict;

pub use homework::AssignmentRecord;
pub use state::{Cursor, PollState};
pub use verdict::Verdict;
