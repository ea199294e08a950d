//! In-memory poll state.

use std::fmt;

use chrono::DateTime;

/// Lower bound (`from_date`) of the next status request, in unix seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(i64);

impl Cursor {
    /// The unix epoch: every assignment ever submitted.
    pub const EPOCH: Cursor = Cursor(0);

    #[must_use]
    pub const fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    #[must_use]
    pub const fn timestamp(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp(self.0, 0) {
            Some(at) => write!(f, "{} ({})", self.0, at.to_rfc3339()),
            None => write!(f, "{}", self.0),
        }
    }
}

/// State carried from one poll cycle to the next.
///
/// Lives for the lifetime of the process and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// The last message we attempted to deliver.
    pub last_notified: Option<String>,
    /// Lower bound for the next request.
    pub cursor: Cursor,
}

impl PollState {
    #[must_use]
    pub fn new(cursor: Cursor) -> Self {
        Self {
            last_notified: None,
            cursor,
        }
    }

    /// Whether `message` differs from the last one we tried to send.
    #[must_use]
    pub fn is_new(&self, message: &str) -> bool {
        self.last_notified.as_deref() != Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_treats_every_message_as_new() {
        let state = PollState::new(Cursor::EPOCH);
        assert!(state.is_new("anything"));
        assert_eq!(state.cursor.timestamp(), 0);
    }

    #[test]
    fn repeated_message_is_not_new() {
        let mut state = PollState::default();
        state.last_notified = Some("hello".into());
        assert!(!state.is_new("hello"));
        assert!(state.is_new("hello again"));
    }

    #[test]
    fn cursor_display_includes_rfc3339() {
        assert_eq!(
            Cursor::new(0).to_string(),
            "0 (1970-01-01T00:00:00+00:00)"
        );
    }
}
