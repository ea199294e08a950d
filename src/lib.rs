//! homework-watch - review-status notifications for submitted homework.
//!
//! Polls a homework review-status API on a fixed interval and sends a
//! Telegram message whenever the most recent assignment's verdict changes.
//!
//! # Architecture
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] - Verdict table, assignment records, poll state
//! - [`application`] - Response validation, status formatting, the poll loop
//! - [`port`] - `StatusSource` and `Notifier` traits
//! - [`adapter`] - Practicum REST client, Telegram and log notifiers
//! - [`infrastructure`] - Configuration, secrets, logging, wiring
//! - [`cli`] - `run` and `check` commands
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` - Deliver notifications through a Telegram bot (default)
//!
//! # Example
//!
//! ```
//! use homework_watch::application::{format_status, validate};
//! use serde_json::json;
//!
//! let response = validate(&json!({
//!     "homeworks": [{"homework_name": "Project A", "status": "reviewing"}],
//!     "current_date": 1_700_000_000
//! }))
//! .unwrap();
//!
//! let message = format_status(response.latest().unwrap()).unwrap();
//! assert!(message.starts_with("Status changed for assignment \"Project A\""));
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
