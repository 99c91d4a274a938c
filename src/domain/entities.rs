//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/provider types here — adapters map their replies into these.

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel the model returns when there is no complaint or no praise.
pub const NONE_DETECTED: &str = "None detected";

/// Overall sentiment of a piece of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one analysis. Field names match the provider's JSON schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub sentiment: Sentiment,
    /// Key complaint in one sentence, or [`NONE_DETECTED`].
    pub pain_point: String,
    /// Most positive excerpt, verbatim, or [`NONE_DETECTED`].
    pub positive_quote: String,
}

impl SentimentAnalysis {
    pub fn has_pain_point(&self) -> bool {
        !is_none_detected(&self.pain_point)
    }

    pub fn has_positive_quote(&self) -> bool {
        !is_none_detected(&self.positive_quote)
    }
}

fn is_none_detected(value: &str) -> bool {
    let v = value.trim().trim_end_matches('.');
    v.is_empty() || v.eq_ignore_ascii_case(NONE_DETECTED)
}

/// Feedback text that passed validation (not blank after trimming).
///
/// The original text is kept as typed; only the emptiness check trims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(String);

impl Feedback {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DomainError::EmptyInput);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_provider_shape() {
        let json = r#"{"sentiment":"Negative","painPoint":"Shipping was slow.","positiveQuote":"The product quality is great"}"#;
        let result: SentimentAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.pain_point, "Shipping was slow.");
        assert_eq!(result.positive_quote, "The product quality is great");
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"sentiment":"Positive","painPoint":"None detected"}"#;
        assert!(serde_json::from_str::<SentimentAnalysis>(json).is_err());
    }

    #[test]
    fn test_unknown_sentiment_rejected() {
        let json = r#"{"sentiment":"Mixed","painPoint":"x","positiveQuote":"y"}"#;
        assert!(serde_json::from_str::<SentimentAnalysis>(json).is_err());
    }

    #[test]
    fn test_none_detected_sentinel() {
        let result = SentimentAnalysis {
            sentiment: Sentiment::Positive,
            pain_point: "none detected.".into(),
            positive_quote: "Love it".into(),
        };
        assert!(!result.has_pain_point());
        assert!(result.has_positive_quote());
    }

    #[test]
    fn test_feedback_rejects_blank() {
        assert!(matches!(Feedback::parse("   \n\t"), Err(DomainError::EmptyInput)));
        assert!(matches!(Feedback::parse(""), Err(DomainError::EmptyInput)));
    }

    #[test]
    fn test_feedback_keeps_original_text() {
        let fb = Feedback::parse("  great service  ").unwrap();
        assert_eq!(fb.as_str(), "  great service  ");
        assert_eq!(fb.char_count(), 17);
    }
}
