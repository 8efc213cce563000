//! Mock provider implementation for testing.

use super::{PromptPart, ProviderError, ProviderReply, TextProvider};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Scriptable text provider.
///
/// Replies are consumed in order; once the script is exhausted the last reply
/// is repeated. Every request is recorded so tests can inspect the parts the
/// service sent.
pub struct MockTextProvider {
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    fallback: Result<String, ProviderError>,
    delay: Option<Duration>,
    requests: Mutex<Vec<Vec<PromptPart>>>,
}

impl MockTextProvider {
    /// Always answers with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::scripted(vec![Ok(text.into())])
    }

    /// Always fails with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    /// Answers with each entry in turn, repeating the last one.
    pub fn scripted(replies: Vec<Result<String, ProviderError>>) -> Self {
        let fallback = replies
            .last()
            .cloned()
            .unwrap_or_else(|| Err(ProviderError::EmptyResponse));

        Self {
            script: Mutex::new(replies.into()),
            fallback,
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Sleep before answering, to exercise timeouts.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Parts of every request received so far.
    pub fn requests(&self) -> Vec<Vec<PromptPart>> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, parts: &[PromptPart]) -> Result<ProviderReply, ProviderError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(parts.to_vec());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| self.fallback.clone());

        next.map(ProviderReply::text)
    }

    fn model(&self) -> &str {
        "mock"
    }
}
