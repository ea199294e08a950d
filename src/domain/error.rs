//! Validation errors raised while interpreting a status response.
//!
//! Both error types are recoverable: the poll loop turns them into a
//! diagnostic message instead of stopping.
//!
//! ```
//! use homework_watch::application::validate;
//! use homework_watch::domain::error::ShapeError;
//! use serde_json::json;
//!
//! let result = validate(&json!({ "homeworks": "nope" }));
//! assert!(matches!(result, Err(ShapeError::HomeworksNotAList { .. })));
//! ```

use thiserror::Error;

/// The decoded response does not have the expected structure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// The top-level value is not a JSON object.
    #[error("expected a JSON object, got {found}")]
    NotAnObject {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// The `homeworks` key is missing.
    #[error("response has no `homeworks` key")]
    MissingHomeworks,

    /// The `homeworks` key does not hold a list.
    #[error("`homeworks` must be a list, got {found}")]
    HomeworksNotAList {
        /// JSON type that was found instead.
        found: &'static str,
    },
}

/// An assignment record cannot be turned into a status message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The status code is not in the verdict table.
    #[error("unknown review status `{status}`")]
    UnknownVerdict {
        /// Status code as received (empty when absent).
        status: String,
    },

    /// The record has no usable assignment name.
    #[error("assignment record has no name")]
    MissingName,
}
