//! Secrets resolved from the environment at startup.

use std::fmt;

use tracing::error;

use crate::error::ConfigError;

/// API token for the review-status service.
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Telegram bot token.
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Destination Telegram chat.
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Every variable that must be set before the poll loop starts.
pub const REQUIRED_VARS: [&str; 3] = [PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID];

/// The three secrets the bot needs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat_id: i64,
}

impl Credentials {
    /// Resolve credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve credentials through `lookup`.
    ///
    /// Each missing or empty variable is logged at error level before the
    /// combined error is returned.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let practicum_token = read(PRACTICUM_TOKEN);
        let telegram_token = read(TELEGRAM_TOKEN);
        let chat_id = read(TELEGRAM_CHAT_ID);

        let missing: Vec<&'static str> = REQUIRED_VARS
            .into_iter()
            .zip([&practicum_token, &telegram_token, &chat_id])
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key)
            .collect();

        for key in &missing {
            error!(variable = *key, "Required environment variable is not set");
        }

        let (Some(practicum_token), Some(telegram_token), Some(chat_id)) =
            (practicum_token, telegram_token, chat_id)
        else {
            return Err(ConfigError::MissingEnv { vars: missing });
        };

        let chat_id = chat_id
            .trim()
            .parse::<i64>()
            .map_err(|e| {
                error!(variable = TELEGRAM_CHAT_ID, error = %e, "Chat id is not an integer");
                ConfigError::InvalidValue {
                    field: TELEGRAM_CHAT_ID,
                    reason: e.to_string(),
                }
            })?;

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &mask(&self.practicum_token))
            .field("telegram_token", &mask(&self.telegram_token))
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Keep only the first and last few characters of a secret.
#[must_use]
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() >= 12 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn resolves_all_three() {
        let creds = Credentials::from_lookup(lookup(&[
            (PRACTICUM_TOKEN, "y0_practicum"),
            (TELEGRAM_TOKEN, "123:abc"),
            (TELEGRAM_CHAT_ID, " -1001234 "),
        ]))
        .unwrap();

        assert_eq!(creds.practicum_token, "y0_practicum");
        assert_eq!(creds.telegram_token, "123:abc");
        assert_eq!(creds.chat_id, -1_001_234);
    }

    #[test]
    fn reports_every_missing_variable() {
        let err = Credentials::from_lookup(lookup(&[(TELEGRAM_TOKEN, "123:abc")])).unwrap_err();
        match err {
            ConfigError::MissingEnv { vars } => {
                assert_eq!(vars, [PRACTICUM_TOKEN, TELEGRAM_CHAT_ID]);
            }
            other => panic!("expected MissingEnv, got {other}"),
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_owned)
                .collect()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn logs_each_missing_variable() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            Credentials::from_lookup(lookup(&[(TELEGRAM_TOKEN, "123:abc")]))
        });
        assert!(result.is_err());

        let missing: Vec<String> = logs
            .lines()
            .into_iter()
            .filter(|line| line.contains("Required environment variable is not set"))
            .collect();
        assert_eq!(missing.len(), 2, "{missing:?}");
        assert!(missing.iter().all(|line| line.contains("ERROR")));
        assert!(missing[0].contains(PRACTICUM_TOKEN));
        assert!(missing[1].contains(TELEGRAM_CHAT_ID));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = Credentials::from_lookup(lookup(&[
            (PRACTICUM_TOKEN, ""),
            (TELEGRAM_TOKEN, "123:abc"),
            (TELEGRAM_CHAT_ID, "1"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv { ref vars } if vars == &[PRACTICUM_TOKEN]));
    }

    #[test]
    fn non_numeric_chat_id_is_invalid() {
        let err = Credentials::from_lookup(lookup(&[
            (PRACTICUM_TOKEN, "token"),
            (TELEGRAM_TOKEN, "123:abc"),
            (TELEGRAM_CHAT_ID, "@channel"),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: TELEGRAM_CHAT_ID,
                ..
            }
        ));
    }

    #[test]
    fn debug_masks_tokens() {
        let creds = Credentials {
            practicum_token: "y0_AgAAAAA-very-secret".into(),
            telegram_token: "short".into(),
            chat_id: 7,
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("y0_A...cret"));
        assert!(rendered.contains("***"));
    }
}
