//! Request orchestration: prompt building, the model call, and cleanup.

use super::cleaner::clean_response;
use super::prompts::{health_prompt, image_analysis_prompt};
use super::providers::{PromptPart, ProviderError, TextProvider};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use metrics::counter;
use service_core::error::AppError;
use service_core::retry::{retry_call, RetryConfig};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// MIME label attached to every uploaded image. The actual format is not
/// sniffed.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Invalid image data: {0}")]
    InvalidImage(#[from] base64::DecodeError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        AppError::Upstream(err.to_string())
    }
}

/// Answers health questions and image queries through a [`TextProvider`].
#[derive(Clone)]
pub struct HealthAssistant {
    provider: Arc<dyn TextProvider>,
    retry: RetryConfig,
    timeout: Duration,
}

impl HealthAssistant {
    pub fn new(provider: Arc<dyn TextProvider>, retry: RetryConfig, timeout: Duration) -> Self {
        Self {
            provider,
            retry,
            timeout,
        }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Answer a free-text health question.
    pub async fn answer_question(&self, message: &str) -> Result<String, AssistantError> {
        let parts = vec![PromptPart::text(health_prompt(message))];
        self.generate("chat", &parts).await
    }

    /// Analyze a base64 image (optionally data-URI prefixed) against `query`.
    pub async fn analyze_image(&self, image: &str, query: &str) -> Result<String, AssistantError> {
        let data = normalize_image(image)?;
        let parts = vec![
            PromptPart::InlineImage {
                mime_type: IMAGE_MIME_TYPE.to_string(),
                data,
            },
            PromptPart::text(image_analysis_prompt(query)),
        ];
        self.generate("analyze_image", &parts).await
    }

    async fn generate(&self, operation: &str, parts: &[PromptPart]) -> Result<String, AssistantError> {
        let provider = &self.provider;
        let timeout = self.timeout;

        let result = retry_call(&self.retry, operation, || async move {
            match tokio::time::timeout(timeout, provider.generate(parts)).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout(timeout)),
            }
        })
        .await;

        let outcome = if result.is_ok() { "success" } else { "error" };
        counter!(
            "model_requests_total",
            "operation" => operation.to_string(),
            "outcome" => outcome
        )
        .increment(1);

        let reply = result?;
        tracing::info!(
            operation,
            model = %self.provider.model(),
            input_tokens = reply.input_tokens,
            output_tokens = reply.output_tokens,
            "Model reply received"
        );

        Ok(clean_response(&reply.text))
    }
}

/// Drop an optional data-URI header (through the first comma), decode the
/// base64 payload and re-encode it in canonical form.
pub fn normalize_image(image: &str) -> Result<String, base64::DecodeError> {
    let payload = match image.split_once(',') {
        Some((_, rest)) => rest,
        None => image,
    };
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(STANDARD.encode(bytes))
}
