//! The poll loop controller.
//!
//! Each cycle fetches statuses, validates the response, formats the most
//! recent assignment and compares the result with the last message we tried
//! to deliver. Failures in any of those steps become a diagnostic message
//! that goes through the same comparison, so a persistent failure is
//! reported once rather than on every cycle.
//!
//! The loop alternates between polling and a fixed cooldown. There is no
//! backoff and no terminal state.

use std::convert::Infallible;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use super::format::{failure_message, format_status, NO_ASSIGNMENTS_MESSAGE};
use super::validate::validate;
use crate::domain::{Cursor, PollState};
use crate::error::CycleError;
use crate::port::{Notifier, StatusSource};

/// What happened to the message computed in a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The message was new and the notifier accepted it.
    Notified,
    /// The message was new but delivery failed. It still counts as sent for
    /// deduplication.
    DeliveryFailed,
    /// The message matched the previous one; nothing was sent.
    Unchanged,
}

/// Result of the fetch/validate/format steps of a successful cycle.
struct Checked {
    message: String,
    server_cursor: Option<Cursor>,
}

/// Drives the poll cycle against a status source and a notifier.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    retry_interval: Duration,
}

impl<S, N> Poller<S, N>
where
    S: StatusSource,
    N: Notifier,
{
    #[must_use]
    pub fn new(source: S, notifier: N, retry_interval: Duration) -> Self {
        Self {
            source,
            notifier,
            retry_interval,
        }
    }

    /// Fixed delay between the end of one cycle and the start of the next.
    #[must_use]
    pub fn retry_interval(&self) -> Duration {
        self.retry_interval
    }

    /// Run cycles forever, sleeping [`Self::retry_interval`] between them.
    pub async fn run(&self, mut state: PollState) -> Infallible {
        info!(
            interval_secs = self.retry_interval.as_secs(),
            cursor = %state.cursor,
            "Poll loop started"
        );

        loop {
            let outcome = self.poll_once(&mut state).await;
            debug!(
                ?outcome,
                interval_secs = self.retry_interval.as_secs(),
                "Cycle complete, cooling down"
            );
            sleep(self.retry_interval).await;
        }
    }

    /// Run a single cycle against `state`.
    ///
    /// `state.last_notified` changes only when the message differs from the
    /// previous one. `state.cursor` advances to the server timestamp after a
    /// valid response and is left alone otherwise.
    pub async fn poll_once(&self, state: &mut PollState) -> CycleOutcome {
        debug!(cursor = %state.cursor, "Polling review status");

        let (message, server_cursor) = match self.check(state.cursor).await {
            Ok(checked) => (checked.message, checked.server_cursor),
            Err(err) => {
                log_cycle_error(&err);
                (failure_message(&err), None)
            }
        };

        let outcome = self.dispatch(state, message).await;

        if let Some(cursor) = server_cursor {
            state.cursor = cursor;
        }

        outcome
    }

    async fn check(&self, cursor: Cursor) -> Result<Checked, CycleError> {
        let raw = self.source.fetch(cursor).await?;
        let response = validate(&raw)?;

        if response.server_cursor.is_none() {
            warn!(cursor = %cursor, "No usable current_date in response, keeping cursor");
        }

        let message = match response.latest() {
            Some(record) => format_status(record)?,
            None => {
                debug!("No assignments found");
                NO_ASSIGNMENTS_MESSAGE.to_string()
            }
        };

        Ok(Checked {
            message,
            server_cursor: response.server_cursor,
        })
    }

    async fn dispatch(&self, state: &mut PollState, message: String) -> CycleOutcome {
        if !state.is_new(&message) {
            debug!("Status unchanged, nothing to send");
            return CycleOutcome::Unchanged;
        }

        let outcome = match self.notifier.send(&message).await {
            Ok(()) => {
                info!(message = %message, "Notification sent");
                CycleOutcome::Notified
            }
            Err(err) => {
                warn!(error = %err, "Notification not delivered");
                CycleOutcome::DeliveryFailed
            }
        };

        state.last_notified = Some(message);
        outcome
    }
}

fn log_cycle_error(err: &CycleError) {
    match err {
        CycleError::Transport(e) => error!(error = %e, "Status request failed"),
        CycleError::Shape(e) => error!(error = %e, "Status response has an unexpected shape"),
        CycleError::Format(e) => error!(error = %e, "Cannot format assignment status"),
    }
}
