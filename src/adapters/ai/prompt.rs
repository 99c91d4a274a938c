//! Prompt, response schema and reply parsing shared by all LLM adapters.

use crate::domain::{DomainError, NONE_DETECTED, Sentiment, SentimentAnalysis};
use serde_json::{Value, json};
use tracing::warn;

/// Build the classification prompt for one piece of feedback.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following customer feedback text.
Determine the overall sentiment (Positive, Negative, or Neutral).
Identify the single most critical pain point described in one sentence. If there are no complaints, state "{none}".
Extract the single most positive quote verbatim from the text. If there is no positive feedback, state "{none}".

Feedback Text:
"{text}""#,
        none = NONE_DETECTED,
        text = text
    )
}

/// Structured-output schema (Gemini `responseSchema` dialect, OpenAPI subset).
pub fn response_schema() -> Value {
    let labels: Vec<&str> = Sentiment::ALL.iter().map(|s| s.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "sentiment": {
                "type": "STRING",
                "enum": labels,
                "description": "The overall sentiment of the feedback."
            },
            "painPoint": {
                "type": "STRING",
                "description": format!("The key pain point summarized in one sentence, or '{}'.", NONE_DETECTED)
            },
            "positiveQuote": {
                "type": "STRING",
                "description": format!("The most positive quote extracted verbatim, or '{}'.", NONE_DETECTED)
            }
        },
        "required": ["sentiment", "painPoint", "positiveQuote"],
        "propertyOrdering": ["sentiment", "painPoint", "positiveQuote"]
    })
}

/// Sanitize JSON response from LLM.
///
/// LLMs sometimes wrap JSON in markdown code blocks or add a lead-in sentence. This strips them.
pub fn sanitize_json(raw_text: &str) -> String {
    let trimmed = raw_text.trim();

    if let Some(rest) = trimmed.strip_prefix("```") {
        let body = rest.strip_prefix("json").unwrap_or(rest);
        let body = match body.rfind("```") {
            Some(end_idx) => &body[..end_idx],
            None => body,
        };
        return body.trim().to_string();
    }

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            return trimmed[start..=end].to_string();
        }
    }

    trimmed.to_string()
}

/// Parse the model's reply text into a [`SentimentAnalysis`].
pub fn parse_analysis(raw_text: &str) -> Result<SentimentAnalysis, DomainError> {
    let clean_json = sanitize_json(raw_text);
    serde_json::from_str(&clean_json).map_err(|e| {
        warn!(error = %e, json = %clean_json.chars().take(200).collect::<String>(), "JSON parse failed");
        DomainError::Ai(format!("Failed to parse LLM JSON: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_quotes_feedback() {
        let prompt = build_prompt("Shipping took forever.");
        assert!(prompt.contains("Positive, Negative, or Neutral"));
        assert!(prompt.contains(r#""None detected""#));
        assert!(prompt.ends_with(r#""Shipping took forever.""#));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = response_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(
            schema["required"],
            json!(["sentiment", "painPoint", "positiveQuote"])
        );
        assert_eq!(
            schema["properties"]["sentiment"]["enum"],
            json!(["Positive", "Negative", "Neutral"])
        );
        assert_eq!(schema["propertyOrdering"], schema["required"]);
    }

    #[test]
    fn test_sanitize_json_clean() {
        let input = r#"{"sentiment": "Positive"}"#;
        assert_eq!(sanitize_json(input), input);
    }

    #[test]
    fn test_sanitize_json_markdown() {
        let input = "```json\n{\"sentiment\": \"Positive\"}\n```";
        assert_eq!(sanitize_json(input), r#"{"sentiment": "Positive"}"#);
    }

    #[test]
    fn test_sanitize_json_markdown_no_lang() {
        let input = "```\n{\"sentiment\": \"Positive\"}\n```";
        assert_eq!(sanitize_json(input), r#"{"sentiment": "Positive"}"#);
    }

    #[test]
    fn test_sanitize_json_with_text() {
        let input = "Here is the analysis:\n{\"sentiment\": \"Neutral\"}";
        assert_eq!(sanitize_json(input), r#"{"sentiment": "Neutral"}"#);
    }

    #[test]
    fn test_parse_analysis_verbatim() {
        let raw = r#"{"sentiment":"Positive","painPoint":"None detected","positiveQuote":"Best purchase I've made all year!"}"#;
        let result = parse_analysis(raw).unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.positive_quote, "Best purchase I've made all year!");
    }

    #[test]
    fn test_parse_analysis_malformed() {
        assert!(matches!(
            parse_analysis("not json at all"),
            Err(DomainError::Ai(_))
        ));
    }
}
