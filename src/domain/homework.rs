//! Assignment records extracted from a status response.

use serde_json::Value;

/// One entry of the `homeworks` list.
///
/// Fields stay optional at extraction time; whether a record is usable is
/// decided when it is formatted, so a malformed entry further down the list
/// never affects the message for the most recent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentRecord {
    /// Assignment name (`homework_name`, or `name`).
    pub name: Option<String>,
    /// Raw status code.
    pub status: Option<String>,
}

impl AssignmentRecord {
    /// Create a record from a name and a status code.
    #[must_use]
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
        }
    }

    /// Read a record out of a decoded JSON element.
    ///
    /// Non-object elements and non-string fields yield `None` fields rather
    /// than an error.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);

        Self {
            name: text("homework_name").or_else(|| text("name")),
            status: text("status"),
        }
    }
}
