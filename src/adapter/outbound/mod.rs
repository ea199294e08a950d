//! Outbound adapters: the status API client and the notifiers.

pub mod notifier;
pub mod practicum;
