//! Joke API client with a bounded per-call timeout.
//!
//! # Responsibilities
//! - Build outbound GET requests against the configured base URL
//! - Turn transport failures, non-2xx answers and bad bodies into `UpstreamError`
//! - Log the cause of every failure; callers only see the error kind
//! - Provide a raw status probe for health checks

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::jokes::UpstreamJoke;
use crate::observability::metrics;
use crate::upstream::types::{UpstreamError, UpstreamResult};

/// Client for the third-party joke API.
///
/// One instance is created at startup and shared by all handlers.
#[derive(Debug)]
pub struct JokeClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    closed: AtomicBool,
}

impl JokeClient {
    /// Create a new client from configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(UpstreamError::Transport)?;

        tracing::info!(
            base_url = %config.base_url,
            timeout_secs = config.timeout_secs,
            "Upstream client initialized"
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
            closed: AtomicBool::new(false),
        })
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-call timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a random joke.
    pub async fn fetch_random(&self) -> UpstreamResult<UpstreamJoke> {
        let request = self.client.get(format!("{}/random", self.base_url));
        self.get_json("random", request).await.inspect_err(|e| {
            tracing::error!(error = %e, "Error fetching joke");
        })
    }

    /// Fetch a random joke from `category`.
    ///
    /// The category is passed through as given; upstream decides whether it exists.
    pub async fn fetch_by_category(&self, category: &str) -> UpstreamResult<UpstreamJoke> {
        let request = self
            .client
            .get(format!("{}/random", self.base_url))
            .query(&[("category", category)]);
        self.get_json("category", request).await.inspect_err(|e| {
            tracing::error!(category, error = %e, "Error fetching joke by category");
        })
    }

    /// List the categories known to upstream.
    pub async fn list_categories(&self) -> UpstreamResult<Vec<String>> {
        let request = self.client.get(format!("{}/categories", self.base_url));
        self.get_json("categories", request).await.inspect_err(|e| {
            tracing::error!(error = %e, "Error fetching categories");
        })
    }

    /// Issue a lightweight request and report the raw status.
    ///
    /// Unlike the other operations a non-2xx status is not an error here.
    pub async fn probe(&self) -> UpstreamResult<StatusCode> {
        let start = Instant::now();
        let result = self
            .client
            .get(format!("{}/categories", self.base_url))
            .send()
            .await
            .map(|response| response.status())
            .map_err(UpstreamError::Transport);

        let outcome = match &result {
            Ok(status) if status.is_success() => "success",
            Ok(_) => "status",
            Err(e) => e.kind(),
        };
        metrics::record_upstream("probe", outcome, start);
        result
    }

    /// Release the client after the server has drained.
    ///
    /// Works on the shared handle, so connection tasks still holding a clone
    /// cannot hold teardown back. Returns `false` if already closed.
    pub fn close(&self) -> bool {
        if self.closed.swap(true, Ordering::AcqRel) {
            return false;
        }
        tracing::info!(base_url = %self.base_url, "Upstream client closed");
        true
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> UpstreamResult<T> {
        let start = Instant::now();
        let result = Self::send(request).await;
        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        metrics::record_upstream(operation, outcome, start);
        result
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> UpstreamResult<T> {
        let response = request.send().await.map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        response.json::<T>().await.map_err(UpstreamError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = UpstreamConfig {
            base_url: "http://127.0.0.1:3000/jokes/".into(),
            ..UpstreamConfig::default()
        };
        let client = JokeClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:3000/jokes");
        assert_eq!(client.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_close_only_once() {
        let client = JokeClient::new(&UpstreamConfig::default()).unwrap();
        assert!(!client.is_closed());
        assert!(client.close());
        assert!(!client.close());
        assert!(client.is_closed());
    }
}
