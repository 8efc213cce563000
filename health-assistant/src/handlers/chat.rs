use crate::models::{AiReply, ChatRequest, ImageAnalysisRequest};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub const NO_MESSAGE: &str = "No message provided";
pub const IMAGE_AND_QUERY_REQUIRED: &str = "Image and query are required";

/// `POST /api/chat`
#[tracing::instrument(skip_all)]
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<AiReply>, AppError> {
    let Json(request) = payload?;
    request
        .validate()
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!(NO_MESSAGE)))?;
    let message = request.message.unwrap_or_default();

    tracing::debug!(message_len = message.len(), "Chat request");

    let response = state.assistant.answer_question(&message).await?;
    Ok(Json(AiReply { response }))
}

/// `POST /api/analyze-image`
#[tracing::instrument(skip_all)]
pub async fn analyze_image(
    State(state): State<AppState>,
    payload: Result<Json<ImageAnalysisRequest>, JsonRejection>,
) -> Result<Json<AiReply>, AppError> {
    let Json(request) = payload?;
    request
        .validate()
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!(IMAGE_AND_QUERY_REQUIRED)))?;
    let image = request.image.unwrap_or_default();
    let query = request.query.unwrap_or_default();

    tracing::debug!(
        image_len = image.len(),
        query_len = query.len(),
        "Image analysis request"
    );

    let response = state.assistant.analyze_image(&image, &query).await?;
    Ok(Json(AiReply { response }))
}
