//! Command-line interface definitions.

pub mod check;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// homework-watch - review-status notifications for submitted homework.
#[derive(Parser, Debug)]
#[command(name = "homework-watch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the review-status API and send notifications (foreground)
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `homework-watch check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file and required environment variables
    Config(ConfigPathArg),
    /// Send a test message through the Telegram notifier
    Telegram(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Log messages instead of sending them to Telegram
    #[arg(long)]
    pub dry_run: bool,

    /// Run a single poll cycle and exit
    #[arg(long)]
    pub once: bool,
}
