//! Integration tests for `POST /api/chat`.

mod common;

use axum::http::StatusCode;
use common::{post_json, test_router, test_router_with_retry};
use health_assistant::services::prompts::{health_prompt, REFUSAL_SENTENCE};
use health_assistant::services::providers::mock::MockTextProvider;
use health_assistant::services::providers::{PromptPart, ProviderError};
use serde_json::json;
use service_core::retry::RetryConfig;
use std::sync::Arc;

#[tokio::test]
async fn empty_body_object_is_rejected() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let (status, body) = post_json(test_router(provider.clone()), "/api/chat", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No message provided" }));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn empty_message_is_rejected() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let (status, body) =
        post_json(test_router(provider.clone()), "/api/chat", r#"{"message":""}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No message provided" }));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn question_is_wrapped_and_reply_is_cleaned() {
    let provider = Arc::new(MockTextProvider::replying("**Try** resting.\n1. Drink water"));
    let (status, body) = post_json(
        test_router(provider.clone()),
        "/api/chat",
        r#"{"message":"What helps a headache?"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response": "Try resting.\n1. Drink water" }));

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0],
        vec![PromptPart::text(health_prompt("What helps a headache?"))]
    );
    match &requests[0][0] {
        PromptPart::Text(prompt) => {
            assert!(prompt.contains("What helps a headache?"));
            assert!(prompt.contains(REFUSAL_SENTENCE));
        }
        other => panic!("expected a text part, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_failure_returns_its_message() {
    let error = ProviderError::ApiError("quota exceeded".to_string());
    let provider = Arc::new(MockTextProvider::failing(error.clone()));
    let (status, body) =
        post_json(test_router(provider), "/api/chat", r#"{"message":"hi"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": error.to_string() }));
}

#[tokio::test]
async fn malformed_json_is_a_server_error() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let (status, body) = post_json(test_router(provider.clone()), "/api/chat", "{not json").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn non_string_message_is_a_server_error() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let (status, body) =
        post_json(test_router(provider.clone()), "/api/chat", r#"{"message":false}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn transient_provider_failure_is_retried() {
    let provider = Arc::new(MockTextProvider::scripted(vec![
        Err(ProviderError::RateLimited),
        Ok("Sleep well.".to_string()),
    ]));
    let (status, body) = post_json(
        test_router_with_retry(provider.clone(), RetryConfig::quick()),
        "/api/chat",
        r#"{"message":"insomnia tips"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response": "Sleep well." }));
    assert_eq!(provider.call_count(), 2);
}
