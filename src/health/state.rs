//! Upstream health classification.
//!
//! # States
//! ```text
//! 2xx from probe        → Healthy   (external_api: connected)
//! non-2xx from probe    → Degraded  (external_api: issues)
//! transport failure     → Unhealthy (external_api: disconnected)
//! ```

use reqwest::StatusCode;
use serde::Serialize;

use crate::upstream::UpstreamResult;

/// Overall service status reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

/// Reachability of the upstream joke API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalApiState {
    Connected,
    Issues,
    Disconnected,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub external_api: ExternalApiState,
}

impl HealthReport {
    /// Classify the outcome of an upstream probe.
    pub fn from_probe(result: &UpstreamResult<StatusCode>) -> Self {
        match result {
            Ok(status) if status.is_success() => Self {
                status: HealthStatus::Healthy,
                external_api: ExternalApiState::Connected,
            },
            Ok(_) => Self {
                status: HealthStatus::Degraded,
                external_api: ExternalApiState::Issues,
            },
            Err(_) => Self {
                status: HealthStatus::Unhealthy,
                external_api: ExternalApiState::Disconnected,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::UpstreamError;
    use serde_json::json;

    #[test]
    fn test_success_is_healthy() {
        let report = HealthReport::from_probe(&Ok(StatusCode::OK));
        assert_eq!(
            serde_json::to_value(report).unwrap(),
            json!({"status": "healthy", "external_api": "connected"})
        );
    }

    #[test]
    fn test_non_success_is_degraded() {
        for status in [StatusCode::NOT_FOUND, StatusCode::BAD_GATEWAY] {
            let report = HealthReport::from_probe(&Ok(status));
            assert_eq!(report.status, HealthStatus::Degraded);
            assert_eq!(report.external_api, ExternalApiState::Issues);
        }
    }

    #[test]
    fn test_error_is_unhealthy() {
        let report = HealthReport::from_probe(&Err(UpstreamError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
        assert_eq!(
            serde_json::to_value(report).unwrap(),
            json!({"status": "unhealthy", "external_api": "disconnected"})
        );
    }
}
