//! Response shape validation.

use serde_json::Value;
use tracing::warn;

use crate::domain::error::ShapeError;
use crate::domain::{AssignmentRecord, Cursor};

/// A status response that passed shape validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedResponse {
    /// Assignments in API order, most recent first.
    pub homeworks: Vec<AssignmentRecord>,
    /// Server timestamp to use as the next cursor, when provided.
    pub server_cursor: Option<Cursor>,
}

impl ValidatedResponse {
    /// The most recent assignment, if any.
    #[must_use]
    pub fn latest(&self) -> Option<&AssignmentRecord> {
        self.homeworks.first()
    }
}

/// Validate a decoded status response and extract its records.
///
/// An empty `homeworks` list is valid. A missing or malformed `current_date`
/// never fails validation; it only means there is no server cursor.
pub fn validate(raw: &Value) -> Result<ValidatedResponse, ShapeError> {
    let object = raw.as_object().ok_or(ShapeError::NotAnObject {
        found: json_type(raw),
    })?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ShapeError::MissingHomeworks)?;
    let homeworks = homeworks
        .as_array()
        .ok_or(ShapeError::HomeworksNotAList {
            found: json_type(homeworks),
        })?;

    let server_cursor = match object.get("current_date") {
        None | Some(Value::Null) => None,
        Some(value) => match value.as_i64() {
            Some(timestamp) => Some(Cursor::new(timestamp)),
            None => {
                warn!(
                    found = json_type(value),
                    "`current_date` is not an integer timestamp, ignoring it"
                );
                None
            }
        },
    };

    Ok(ValidatedResponse {
        homeworks: homeworks.iter().map(AssignmentRecord::from_value).collect(),
        server_cursor,
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
