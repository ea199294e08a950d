//! Status message formatting.

use std::fmt::Display;

use crate::domain::error::FormatError;
use crate::domain::{AssignmentRecord, Verdict};

/// Sent when the API reports no assignments.
pub const NO_ASSIGNMENTS_MESSAGE: &str = "No assignments found yet.";

/// Format the status sentence for an assignment record.
///
/// The name is checked before the status.
pub fn format_status(record: &AssignmentRecord) -> Result<String, FormatError> {
    let name = record
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(FormatError::MissingName)?;

    let status = record.status.as_deref().unwrap_or_default();
    let verdict: Verdict = status.parse()?;

    Ok(format!(
        "Status changed for assignment \"{name}\": {}",
        verdict.phrase()
    ))
}

/// Diagnostic message for a failed cycle.
pub fn failure_message(error: &impl Display) -> String {
    format!("Homework watcher failure: {error}")
}
