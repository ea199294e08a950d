//! Handler for the `run` command.

use tokio::signal;
use tracing::{error, info};

use crate::cli::RunArgs;
use crate::domain::PollState;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_poller;
use crate::infrastructure::config::{Config, Credentials};

/// Execute the run command.
///
/// Missing credentials are fatal here, before the first cycle.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    // Apply CLI overrides
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging()?;

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!(error = %e, "Cannot start without credentials");
            return Err(e.into());
        }
    };

    info!(
        endpoint = %config.api.endpoint,
        interval_secs = config.poll.retry_interval_secs,
        "homework-watch starting"
    );

    let poller = build_poller(&config, &credentials, args.dry_run);
    let mut state = PollState::new(config.poll.initial_cursor());

    if args.once {
        let outcome = poller.poll_once(&mut state).await;
        info!(?outcome, cursor = %state.cursor, "Single cycle finished");
        return Ok(());
    }

    tokio::select! {
        _ = poller.run(state) => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("homework-watch stopped");
    Ok(())
}
