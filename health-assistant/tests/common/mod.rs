//! Test helpers shared by health-assistant integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use health_assistant::config::AssistantConfig;
use health_assistant::services::providers::mock::MockTextProvider;
use health_assistant::services::HealthAssistant;
use health_assistant::startup::build_router;
use health_assistant::AppState;
use http_body_util::BodyExt;
use service_core::retry::RetryConfig;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

/// A 1x1 white JPEG, base64-encoded.
pub const TINY_JPEG_BASE64: &str = "/9j/4AAQSkZJRgABAQEASABIAAD/2wBDAP//////////////////////////////////////////////////////////////////////////////////////wgALCAABAAEBAREA/8QAFBABAAAAAAAAAAAAAAAAAAAAAP/aAAgBAQABPxA=";

/// Router wired to the given mock provider, without retries.
pub fn test_router(provider: Arc<MockTextProvider>) -> Router {
    test_router_with_retry(provider, RetryConfig::no_retry())
}

pub fn test_router_with_retry(provider: Arc<MockTextProvider>, retry: RetryConfig) -> Router {
    let config = AssistantConfig::for_tests();
    let assistant = HealthAssistant::new(provider, retry, Duration::from_secs(2));
    build_router(AppState::new(assistant, true), &config)
}

/// POST a raw body as JSON and return status plus decoded JSON response.
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
