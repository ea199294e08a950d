use std::path::Path;

use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use crate::error::Result;
use crate::infrastructure::config::credentials::mask;
use crate::infrastructure::config::{Config, Credentials};
use crate::port::Notifier;

/// Test Telegram notification by sending a test message.
pub async fn execute_telegram<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    let credentials = Credentials::from_env()?;

    println!("Sending test message to Telegram...");
    println!("  Bot token: {}", mask(&credentials.telegram_token));
    println!("  Chat ID: {}", credentials.chat_id);
    println!();

    let notifier = TelegramNotifier::new(&TelegramConfig {
        bot_token: credentials.telegram_token.clone(),
        chat_id: credentials.chat_id,
    });

    let message = format!(
        "homework-watch test message\n\nEndpoint: {}\nRetry interval: {}s",
        config.api.endpoint, config.poll.retry_interval_secs
    );
    notifier.send(&message).await?;

    println!("✓ Test message sent successfully!");
    println!();
    println!("Check your Telegram for the message.");
    Ok(())
}
