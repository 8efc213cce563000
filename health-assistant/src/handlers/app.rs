use crate::AppState;
use askama::Template;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

pub async fn index() -> impl IntoResponse {
    IndexTemplate {}
}

/// Liveness check.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "health-assistant",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.assistant.model(),
    }))
}

/// Readiness check: not ready until a model API key is configured.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if state.ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

pub async fn metrics() -> impl IntoResponse {
    crate::services::metrics::render_metrics()
}
