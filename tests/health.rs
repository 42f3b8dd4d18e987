//! `/health` classification under each upstream outcome.

use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

use common::{spawn_app, start_mock_backend, start_silent_backend, unreachable_addr};

async fn health_of(app: &common::TestApp) -> Value {
    let res = app.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn test_healthy_when_upstream_answers() {
    let upstream = start_mock_backend(200, r#"["dev"]"#).await;
    let app = spawn_app(upstream).await;

    assert_eq!(
        health_of(&app).await,
        json!({"status": "healthy", "external_api": "connected"})
    );
}

#[tokio::test]
async fn test_degraded_on_error_status() {
    let upstream = start_mock_backend(500, "{}").await;
    let app = spawn_app(upstream).await;

    assert_eq!(
        health_of(&app).await,
        json!({"status": "degraded", "external_api": "issues"})
    );
}

#[tokio::test]
async fn test_unhealthy_when_unreachable() {
    let app = spawn_app(unreachable_addr().await).await;

    assert_eq!(
        health_of(&app).await,
        json!({"status": "unhealthy", "external_api": "disconnected"})
    );
}

#[tokio::test]
async fn test_unhealthy_on_timeout() {
    let app = spawn_app(start_silent_backend().await).await;

    let body = health_of(&app).await;
    assert_eq!(body["status"], "unhealthy");
}
