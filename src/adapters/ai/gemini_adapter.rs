//! Gemini adapter. Calls the `generateContent` REST endpoint with a structured-output schema.

use crate::adapters::ai::prompt::{build_prompt, parse_analysis, response_schema};
use crate::domain::{DomainError, Feedback, SentimentAnalysis};
use crate::ports::AiPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Google Gemini adapter.
///
/// The reply is constrained by `responseSchema`, so the text part is plain JSON
/// in the normal case; it still goes through the shared sanitizer.
pub struct GeminiAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://generativelanguage.googleapis.com")
    /// * `api_key` - Gemini API key
    /// * `model` - Model id (e.g., "gemini-2.5-flash")
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if any.
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[async_trait::async_trait]
impl AiPort for GeminiAdapter {
    async fn analyze(&self, feedback: &Feedback) -> Result<SentimentAnalysis, DomainError> {
        info!(
            model = %self.model,
            chars = feedback.char_count(),
            "sending feedback to Gemini"
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(feedback.as_str())),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Ai(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "Gemini API returned error");
            return Err(DomainError::Ai(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Ai(format!("Failed to parse API response: {}", e)))?;

        let raw = body
            .text()
            .ok_or_else(|| DomainError::Ai("No response received from Gemini.".to_string()))?;
        debug!(raw_len = raw.len(), "received Gemini response");

        let analysis = parse_analysis(&raw)?;
        info!(sentiment = %analysis.sentiment, "Gemini analysis complete");
        Ok(analysis)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Sentiment;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn adapter(server: &MockServer) -> GeminiAdapter {
        GeminiAdapter::new(
            server.uri(),
            "test-key".to_string(),
            DEFAULT_GEMINI_MODEL.to_string(),
        )
    }

    fn candidate(text: &str) -> serde_json::Value {
        json!({ "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }] })
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "required": ["sentiment", "painPoint", "positiveQuote"] }
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate(
                r#"{"sentiment":"Negative","painPoint":"Shipping took too long.","positiveQuote":"The product quality is great"}"#,
            )))
            .expect(1)
            .mount(&server)
            .await;

        let feedback = Feedback::parse(
            "The product quality is great, but the shipping took way too long.",
        )
        .unwrap();
        let result = adapter(&server).analyze(&feedback).await.unwrap();

        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.pain_point, "Shipping took too long.");
        assert_eq!(result.positive_quote, "The product quality is great");
    }

    #[tokio::test]
    async fn test_analyze_joins_split_parts() {
        let server = MockServer::start().await;
        let body = json!({ "candidates": [{ "content": { "parts": [
            { "text": r#"{"sentiment":"Positive","#},
            { "text": r#""painPoint":"None detected","positiveQuote":"Love it"}"# }
        ] } }] });
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let result = adapter(&server)
            .analyze(&Feedback::parse("Love it").unwrap())
            .await
            .unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.positive_quote, "Love it");
    }

    #[tokio::test]
    async fn test_analyze_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .analyze(&Feedback::parse("hello").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Ai(ref m) if m.contains("403")));
    }

    #[tokio::test]
    async fn test_analyze_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .analyze(&Feedback::parse("hello").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Ai(ref m) if m.contains("No response")));
    }

    #[tokio::test]
    async fn test_analyze_malformed_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(candidate(r#"{"sentiment":"Great"}"#)),
            )
            .mount(&server)
            .await;

        let err = adapter(&server)
            .analyze(&Feedback::parse("hello").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Ai(_)));
    }
}
