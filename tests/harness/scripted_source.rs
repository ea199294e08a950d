use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use homework_watch::domain::Cursor;
use homework_watch::error::TransportError;
use homework_watch::port::StatusSource;
use reqwest::StatusCode;
use serde_json::Value;

enum Step {
    Respond(Value),
    Fail(StatusCode),
}

#[derive(Default)]
struct Script {
    steps: VecDeque<Step>,
    cursors: Vec<Cursor>,
}

/// Deterministic test double for the review-status API.
///
/// Replays queued responses in order and records the cursor of every call.
/// Once the script runs out it answers `503 Service Unavailable`.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Mutex<Script>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, body: Value) -> &Self {
        self.lock().steps.push_back(Step::Respond(body));
        self
    }

    pub fn push_failure(&self, status: StatusCode) -> &Self {
        self.lock().steps.push_back(Step::Fail(status));
        self
    }

    /// Cursors passed to `fetch`, in call order.
    pub fn cursors(&self) -> Vec<Cursor> {
        self.lock().cursors.clone()
    }

    pub fn calls(&self) -> usize {
        self.lock().cursors.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().expect("lock scripted source")
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch(&self, cursor: Cursor) -> Result<Value, TransportError> {
        let mut script = self.lock();
        script.cursors.push(cursor);

        match script.steps.pop_front() {
            Some(Step::Respond(body)) => Ok(body),
            Some(Step::Fail(status)) => Err(TransportError::UnexpectedStatus { status }),
            None => Err(TransportError::UnexpectedStatus {
                status: StatusCode::SERVICE_UNAVAILABLE,
            }),
        }
    }
}
