pub mod chat;

pub use chat::{AiReply, ChatRequest, ImageAnalysisRequest};
