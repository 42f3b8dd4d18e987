//! On-demand upstream health check.

use crate::health::state::{HealthReport, HealthStatus};
use crate::upstream::JokeClient;

/// Probe upstream once and classify the result. Never fails.
pub async fn check_upstream(client: &JokeClient) -> HealthReport {
    let result = client.probe().await;
    let report = HealthReport::from_probe(&result);

    match (&result, report.status) {
        (Err(e), _) => tracing::error!(error = %e, "Health check failed"),
        (Ok(status), HealthStatus::Degraded) => {
            tracing::warn!(status = %status, "Health check failed: non-success status")
        }
        _ => tracing::debug!("Health check passed"),
    }

    report
}
