//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for Telegram and for the log.

#[cfg(feature = "telegram")]
pub mod telegram;

use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;
use crate::port::Notifier;

/// A notifier that writes messages to the log instead of sending them.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        info!(message = %message, "Notification (log only)");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
