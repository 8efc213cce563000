//! Integration tests for the health, readiness and page endpoints.
//!
//! These spawn the real listener on a random port; no model backend is needed.

use health_assistant::config::AssistantConfig;
use health_assistant::services::providers::mock::MockTextProvider;
use health_assistant::services::HealthAssistant;
use health_assistant::startup::Application;
use reqwest::Client;
use service_core::retry::RetryConfig;
use std::sync::Arc;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app(config: AssistantConfig) -> u16 {
    let assistant = HealthAssistant::new(
        Arc::new(MockTextProvider::replying("ok")),
        RetryConfig::no_retry(),
        Duration::from_secs(1),
    );
    let app = Application::build_with_assistant(config, assistant)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app(AssistantConfig::for_tests()).await;

    let response = Client::new()
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "health-assistant");
    assert_eq!(body["model"], "mock");
}

#[tokio::test]
async fn readiness_requires_api_key() {
    let port = spawn_app(AssistantConfig::for_tests()).await;

    let response = Client::new()
        .get(format!("http://127.0.0.1:{}/ready", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn index_page_is_rendered() {
    let port = spawn_app(AssistantConfig::for_tests()).await;

    let response = Client::new()
        .get(format!("http://127.0.0.1:{}/", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let html = response.text().await.expect("Failed to read body");
    assert!(html.contains("chat-form"));
    assert!(html.contains("/static/js/chat.js"));
}

#[tokio::test]
async fn chat_script_is_served() {
    let port = spawn_app(AssistantConfig::for_tests()).await;

    let response = Client::new()
        .get(format!("http://127.0.0.1:{}/static/js/chat.js", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let script = response.text().await.expect("Failed to read body");
    assert!(script.contains("/api/chat"));
}

#[tokio::test]
async fn chat_round_trip_over_http() {
    let port = spawn_app(AssistantConfig::for_tests()).await;

    let response = Client::new()
        .post(format!("http://127.0.0.1:{}/api/chat", port))
        .json(&serde_json::json!({ "message": "Is walking good exercise?" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["response"], "ok");
}
