//! Composition root: wires configuration and secrets into a [`Poller`].

use tracing::{info, warn};

use crate::adapter::outbound::notifier::LogNotifier;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::practicum::PracticumClient;
use crate::application::Poller;
use crate::infrastructure::config::{Config, Credentials};
use crate::port::Notifier;

/// The poller type used by the binary.
pub type AppPoller = Poller<PracticumClient, Box<dyn Notifier>>;

/// Build the notifier for this run.
///
/// `dry_run` swaps Telegram for the log notifier. Without the `telegram`
/// feature the log notifier is always used.
pub fn build_notifier(credentials: &Credentials, dry_run: bool) -> Box<dyn Notifier> {
    if dry_run {
        info!("Dry-run mode enabled - notifications go to the log only");
        return Box::new(LogNotifier);
    }

    primary_notifier(credentials)
}

#[cfg(feature = "telegram")]
fn primary_notifier(credentials: &Credentials) -> Box<dyn Notifier> {
    info!(chat_id = credentials.chat_id, "Telegram notifier enabled");
    Box::new(TelegramNotifier::new(&TelegramConfig {
        bot_token: credentials.telegram_token.clone(),
        chat_id: credentials.chat_id,
    }))
}

#[cfg(not(feature = "telegram"))]
fn primary_notifier(_credentials: &Credentials) -> Box<dyn Notifier> {
    warn!("Built without the telegram feature - notifications go to the log only");
    Box::new(LogNotifier)
}

/// Build the poller from configuration and resolved credentials.
pub fn build_poller(config: &Config, credentials: &Credentials, dry_run: bool) -> AppPoller {
    let source = PracticumClient::from_config(&config.api, credentials.practicum_token.clone());
    let notifier = build_notifier(credentials, dry_run);

    if config.poll.retry_interval_secs < 60 {
        warn!(
            interval_secs = config.poll.retry_interval_secs,
            "Retry interval is under a minute; the status API may rate-limit"
        );
    }

    Poller::new(source, notifier, config.poll.retry_interval())
}
