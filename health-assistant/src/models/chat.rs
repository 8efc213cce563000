use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ChatRequest {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Body of `POST /api/analyze-image`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ImageAnalysisRequest {
    /// Base64 image, optionally prefixed with a data-URI header.
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub image: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub query: Option<String>,
}

/// Successful answer returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiReply {
    pub response: String,
}
