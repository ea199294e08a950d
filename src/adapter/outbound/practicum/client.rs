//! Review-status REST client.
//!
//! Issues `GET <endpoint>?from_date=<cursor>` with an OAuth header and hands
//! back the decoded JSON body. Shape checks happen in the application layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::Cursor;
use crate::error::TransportError;
use crate::infrastructure::config::ApiConfig;
use crate::port::StatusSource;

/// HTTP client for the homework review-status API.
pub struct PracticumClient {
    http: HttpClient,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a client whose requests are bounded by `config.timeout_secs`.
    #[must_use]
    pub fn from_config(config: &ApiConfig, token: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            endpoint: config.endpoint.clone(),
            token: token.into(),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&format!("OAuth {}", self.token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(err) => warn!(error = %err, "API token is not a valid header value"),
        }
        headers
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, cursor: Cursor) -> Result<Value, TransportError> {
        debug!(endpoint = %self.endpoint, from_date = cursor.timestamp(), "Requesting statuses");

        let response = self
            .http
            .get(&self.endpoint)
            .headers(self.headers())
            .query(&[("from_date", cursor.timestamp())])
            .send()
            .await
            .map_err(TransportError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(TransportError::UnexpectedStatus { status });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(TransportError::Decode)?;
        debug!("Status response decoded");

        Ok(body)
    }
}
