//! Generative model provider abstractions and implementations.
//!
//! The service only needs one capability from a model backend: turn an
//! ordered list of prompt parts into text. Gemini is the production backend;
//! the mock backend is scriptable for tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use service_core::retry::Retryable;
use std::time::Duration;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Upstream unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Model returned no text")]
    EmptyResponse,

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl Retryable for ProviderError {
    fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::NetworkError(_)
                | ProviderError::Timeout(_)
                | ProviderError::RateLimited
                | ProviderError::Unavailable(_)
        )
    }
}

/// One ordered piece of a model request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPart {
    Text(String),
    /// Binary payload, base64-encoded, labelled with a MIME type.
    InlineImage { mime_type: String, data: String },
}

impl PromptPart {
    pub fn text(text: impl Into<String>) -> Self {
        PromptPart::Text(text.into())
    }

    fn len(&self) -> usize {
        match self {
            PromptPart::Text(text) => text.len(),
            PromptPart::InlineImage { data, .. } => data.len(),
        }
    }
}

/// Total payload size of a request, for logging.
pub fn payload_len(parts: &[PromptPart]) -> usize {
    parts.iter().map(PromptPart::len).sum()
}

/// Result of a provider call.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderReply {
    pub text: String,
    pub input_tokens: i32,
    pub output_tokens: i32,
    pub finish_reason: FinishReason,
}

impl ProviderReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            input_tokens: 0,
            output_tokens: 0,
            finish_reason: FinishReason::Complete,
        }
    }
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text response for the given ordered parts.
    async fn generate(&self, parts: &[PromptPart]) -> Result<ProviderReply, ProviderError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_retryable() {
        assert!(ProviderError::NetworkError("reset".into()).is_retryable());
        assert!(ProviderError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(ProviderError::RateLimited.is_retryable());
        assert!(ProviderError::Unavailable("503".into()).is_retryable());
    }

    #[test]
    fn fatal_errors_are_not_retryable() {
        assert!(!ProviderError::Unauthorized("bad key".into()).is_retryable());
        assert!(!ProviderError::ApiError("400".into()).is_retryable());
        assert!(!ProviderError::InvalidRequest("empty".into()).is_retryable());
        assert!(!ProviderError::ContentFiltered.is_retryable());
        assert!(!ProviderError::EmptyResponse.is_retryable());
        assert!(!ProviderError::NotConfigured("no key".into()).is_retryable());
    }

    #[test]
    fn payload_len_sums_all_parts() {
        let parts = vec![
            PromptPart::InlineImage {
                mime_type: "image/jpeg".into(),
                data: "AAAA".into(),
            },
            PromptPart::text("hello"),
        ];
        assert_eq!(payload_len(&parts), 9);
    }
}
