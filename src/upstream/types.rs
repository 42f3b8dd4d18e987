//! Upstream error definitions.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the joke API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection failed, timed out, or the request could not be sent.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Upstream returned status {0}")]
    Status(StatusCode),

    /// Response body was not the expected JSON.
    #[error("Invalid upstream response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Transport(e) if e.is_timeout() => "timeout",
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Status(_) => "status",
            UpstreamError::Decode(_) => "decode",
        }
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
