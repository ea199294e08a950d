//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │       Application        │
//!     ┌───────────┤   validate → format →    ├────────────┐
//!     │           │   dedup (poll loop)      │            │
//!     │           └──────────────────────────┘            │
//!     ▼                                                   ▼
//! ┌──────────────┐                                ┌─────────────┐
//! │ StatusSource │                                │  Notifier   │
//! │   Adapter    │                                │   Adapter   │
//! └──────────────┘                                └─────────────┘
//! ```
//!
//! - [`outbound::status::StatusSource`] - fetches decoded status responses
//! - [`outbound::notifier::Notifier`] - delivers messages (Telegram, logging)

pub mod outbound;

pub use outbound::notifier::Notifier;
pub use outbound::status::StatusSource;
