//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Feedback, SentimentAnalysis};

/// Sentiment classification provider (Gemini, OpenAI-compatible, mock).
#[async_trait::async_trait]
pub trait AiPort: Send + Sync {
    /// Classify one piece of feedback. Exactly one request; no retry, no cache.
    async fn analyze(&self, feedback: &Feedback) -> Result<SentimentAnalysis, DomainError>;

    /// Short provider label for logs.
    fn name(&self) -> &'static str;
}
