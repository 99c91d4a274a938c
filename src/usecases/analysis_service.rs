//! Analysis service. Runs one request/response cycle against the AI port.
//!
//! The session is the single source of UI state; this service only sequences
//! validation, the provider call and the outcome.

use crate::domain::{DomainError, Session};
use crate::ports::AiPort;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

pub struct AnalysisService {
    ai: Arc<dyn AiPort>,
}

impl AnalysisService {
    /// Create a new analysis service.
    ///
    /// # Arguments
    /// * `ai` - AI port implementation (Gemini, OpenAI, Mock)
    pub fn new(ai: Arc<dyn AiPort>) -> Self {
        Self { ai }
    }

    pub fn provider(&self) -> &'static str {
        self.ai.name()
    }

    /// Analyze the session's current input.
    ///
    /// Blank input never reaches the provider. Provider failures are logged in
    /// full and stored on the session as the generic message. The returned error
    /// is for callers that need to branch (e.g. piped mode exit status).
    pub async fn analyze(&self, session: &mut Session) -> Result<(), DomainError> {
        let feedback = session.begin()?;

        let started = Instant::now();
        let outcome = self.ai.analyze(&feedback).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let ret = match &outcome {
            Ok(result) => {
                info!(
                    provider = self.ai.name(),
                    sentiment = %result.sentiment,
                    elapsed_ms,
                    "analysis complete"
                );
                Ok(())
            }
            Err(e) => {
                warn!(provider = self.ai.name(), error = %e, elapsed_ms, "analysis failed");
                Err(DomainError::Ai(e.to_string()))
            }
        };

        session.finish(outcome);
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiAdapter;
    use crate::domain::errors::ANALYSIS_FAILED_MESSAGE;

    #[tokio::test]
    async fn test_blank_input_skips_provider() {
        let mock = Arc::new(MockAiAdapter::with_delay(0));
        let service = AnalysisService::new(mock.clone());
        let mut session = Session::new();
        session.set_input("\n  ");

        let err = service.analyze(&mut session).await.unwrap_err();
        assert!(matches!(err, DomainError::EmptyInput));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_resets_loading() {
        let service = AnalysisService::new(Arc::new(MockAiAdapter::failing("timeout")));
        let mut session = Session::new();
        session.set_input("Terrible support.");

        assert!(service.analyze(&mut session).await.is_err());
        assert!(!session.is_loading());
        assert_eq!(session.error(), Some(ANALYSIS_FAILED_MESSAGE));
    }
}
