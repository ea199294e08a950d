//! Status source port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::Cursor;
use crate::error::TransportError;

/// Source of review-status responses.
///
/// Implementations only transport and decode; the shape of the returned
/// value is checked by [`crate::application::validate`].
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch statuses of assignments updated since `cursor`.
    async fn fetch(&self, cursor: Cursor) -> Result<Value, TransportError>;
}
