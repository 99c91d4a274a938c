//! Mock AI adapter for running without API calls.
//!
//! Uses a keyword heuristic so the UI behaves sensibly offline. Can also be pinned
//! to a fixed result or a forced failure.

use crate::domain::{DomainError, Feedback, NONE_DETECTED, Sentiment, SentimentAnalysis};
use crate::ports::AiPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

const POSITIVE_CUES: &[&str] = &[
    "great", "love", "excellent", "amazing", "awesome", "fantastic", "good", "best", "happy",
    "helpful", "perfect", "friendly", "recommend",
];

const NEGATIVE_CUES: &[&str] = &[
    "slow", "late", "too long", "bad", "terrible", "awful", "broken", "unresponsive", "poor",
    "disappointed", "worst", "rude", "refund", "problem", "issue", "never arrived",
];

enum Behavior {
    Heuristic,
    Fixed(SentimentAnalysis),
    Fail(String),
}

/// Mock AI adapter.
///
/// Simulates network latency with configurable delay and counts calls.
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    behavior: Behavior,
    calls: AtomicUsize,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self::with_delay(100)
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            behavior: Behavior::Heuristic,
            calls: AtomicUsize::new(0),
        }
    }

    /// Always return `result`.
    pub fn returning(result: SentimentAnalysis) -> Self {
        Self {
            behavior: Behavior::Fixed(result),
            ..Self::with_delay(0)
        }
    }

    /// Always fail with `DomainError::Ai(reason)`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(reason.into()),
            ..Self::with_delay(0)
        }
    }

    /// Number of `analyze` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn heuristic(text: &str) -> SentimentAnalysis {
        let lower = text.to_lowercase();
        let score = |cues: &[&str]| cues.iter().filter(|c| lower.contains(*c)).count();
        let (pos, neg) = (score(POSITIVE_CUES), score(NEGATIVE_CUES));

        let sentiment = match pos.cmp(&neg) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        };

        let first_with = |cues: &[&str]| {
            sentences(text)
                .find(|s| {
                    let s = s.to_lowercase();
                    cues.iter().any(|c| s.contains(c))
                })
                .map(str::to_string)
        };

        SentimentAnalysis {
            sentiment,
            pain_point: first_with(NEGATIVE_CUES)
                .map(|s| format!("[MOCK] {}", s.trim_end_matches(['.', '!', '?'])))
                .unwrap_or_else(|| NONE_DETECTED.to_string()),
            positive_quote: first_with(POSITIVE_CUES).unwrap_or_else(|| NONE_DETECTED.to_string()),
        }
    }
}

/// Split on sentence terminators, keeping the terminator with its sentence.
fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AiPort for MockAiAdapter {
    async fn analyze(&self, feedback: &Feedback) -> Result<SentimentAnalysis, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!(
            chars = feedback.char_count(),
            "[MOCK] Simulating AI analysis"
        );

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.behavior {
            Behavior::Heuristic => Ok(Self::heuristic(feedback.as_str())),
            Behavior::Fixed(result) => Ok(result.clone()),
            Behavior::Fail(reason) => Err(DomainError::Ai(reason.clone())),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(text: &str) -> SentimentAnalysis {
        MockAiAdapter::with_delay(0)
            .analyze(&Feedback::parse(text).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_mixed_feedback() {
        let result = run(
            "The product quality is great! But the shipping took way too long and support was unresponsive.",
        )
        .await;
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.positive_quote, "The product quality is great!");
        assert!(result.pain_point.contains("shipping took way too long"));
    }

    #[tokio::test]
    async fn test_praise_only() {
        let result = run("Amazing staff, I love this place.").await;
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.pain_point, NONE_DETECTED);
    }

    #[tokio::test]
    async fn test_neutral() {
        let result = run("The parcel arrived on Tuesday.").await;
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert!(!result.has_pain_point());
        assert!(!result.has_positive_quote());
    }

    #[tokio::test]
    async fn test_failing_counts_calls() {
        let adapter = MockAiAdapter::failing("boom");
        let err = adapter
            .analyze(&Feedback::parse("x").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Ai(ref m) if m == "boom"));
        assert_eq!(adapter.calls(), 1);
    }
}
