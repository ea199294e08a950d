//! Notifier port for status messages.

use async_trait::async_trait;

use crate::error::NotifyError;

/// Delivers a message to the configured destination.
///
/// # Implementation Notes
///
/// - Delivery is best-effort. Implementations log their own failures and
///   return them so the caller can record the outcome, but the caller never
///   retries.
/// - Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `message` to the destination channel.
    async fn send(&self, message: &str) -> Result<(), NotifyError>;
}

#[async_trait]
impl<N: Notifier + ?Sized> Notifier for Box<N> {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        (**self).send(message).await
    }
}
