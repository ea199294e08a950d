use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use homework_watch::error::NotifyError;
use homework_watch::port::Notifier;

/// Thread-safe message collector for notification assertions in tests.
///
/// Every call is recorded, including the ones configured to fail.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails after being recorded.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("lock notifier messages").len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock notifier messages").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &str) -> Result<(), NotifyError> {
        self.messages
            .lock()
            .expect("lock notifier messages")
            .push(message.to_string());

        if self.failing {
            Err(NotifyError::Delivery("recording notifier set to fail".into()))
        } else {
            Ok(())
        }
    }
}
