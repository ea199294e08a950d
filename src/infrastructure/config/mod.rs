//! Infrastructure configuration modules.

pub mod credentials;
pub mod logging;
pub mod settings;

pub use credentials::Credentials;
pub use logging::LoggingConfig;
pub use settings::{ApiConfig, Config, PollConfig};
