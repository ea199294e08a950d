//! Telegram notifier.
//!
//! Sends plain-text messages to a single chat. Messages embed arbitrary
//! assignment names and error text, so no parse mode is set.
//!
//! Requires the `telegram` feature to be enabled.

use async_trait::async_trait;
use teloxide::prelude::*;
use tracing::{debug, error};

use crate::error::NotifyError;
use crate::port::Notifier;

/// Configuration for the Telegram notifier.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for notifications.
    pub chat_id: i64,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Telegram notifier that sends messages to a chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            bot: Bot::new(&config.bot_token),
            chat_id: ChatId(config.chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        match self.bot.send_message(self.chat_id, message).await {
            Ok(_) => {
                debug!(chat_id = self.chat_id.0, "Telegram message sent");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to send Telegram message");
                Err(e.into())
            }
        }
    }
}
