//! Errors surfaced to HTTP callers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Boundary error for joke routes.
///
/// The upstream cause is logged by the client and never placed in the body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{detail}")]
    ServiceUnavailable { detail: String },
}

impl ApiError {
    pub fn joke_unavailable() -> Self {
        Self::ServiceUnavailable {
            detail: "Unable to fetch joke from external service".to_string(),
        }
    }

    pub fn category_unavailable(category: &str) -> Self {
        Self::ServiceUnavailable {
            detail: format!("Unable to fetch joke from category '{}'", category),
        }
    }

    pub fn categories_unavailable() -> Self {
        Self::ServiceUnavailable {
            detail: "Unable to fetch categories".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
