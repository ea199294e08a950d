use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::infrastructure::config::credentials::REQUIRED_VARS;
use crate::infrastructure::config::{Config, Credentials};

/// Validate configuration without starting the poll loop.
///
/// Prints a summary and fails if the file is invalid or any required
/// environment variable is missing.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    if !path.exists() {
        println!("  No configuration file found, using defaults");
    }

    let config = Config::load(path)?;
    println!("✓ Configuration is valid");
    println!();
    println!("Summary:");
    println!("  Endpoint: {}", config.api.endpoint);
    println!("  Request timeout: {}s", config.api.timeout_secs);
    println!("  Retry interval: {}s", config.poll.retry_interval_secs);
    println!("  Initial cursor: {}", config.poll.initial_cursor());
    println!(
        "  Logging: {} ({}){}",
        config.logging.level,
        config.logging.format,
        config
            .logging
            .file
            .as_ref()
            .map(|f| format!(" -> {}", f.display()))
            .unwrap_or_default()
    );
    println!();

    let present = |key: &str| {
        std::env::var(key)
            .map(|v| !v.trim().is_empty())
            .unwrap_or(false)
    };
    let missing: Vec<&'static str> = REQUIRED_VARS
        .into_iter()
        .filter(|key| !present(*key))
        .collect();

    if !missing.is_empty() {
        println!("✗ Missing environment variables:");
        for key in &missing {
            println!("    - {key}");
        }
        return Err(ConfigError::MissingEnv { vars: missing }.into());
    }

    let credentials = Credentials::from_env()?;
    println!("✓ Credentials found: {credentials:?}");
    println!();
    println!("Configuration is ready to use.");
    Ok(())
}
