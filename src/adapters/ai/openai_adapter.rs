//! OpenAI-compatible adapter for sentiment analysis.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Chat-completions has no `responseSchema`, so the JSON contract is restated in
//! the system prompt and `json_object` mode is requested.

use crate::adapters::ai::prompt::{build_prompt, parse_analysis};
use crate::domain::{DomainError, Feedback, SentimentAnalysis};
use crate::ports::AiPort;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// OpenAI-compatible AI adapter.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    fn system_prompt() -> &'static str {
        r#"You are a customer-feedback analyst.
You MUST respond with valid JSON only. No markdown, no explanations outside JSON.

{
  "sentiment": "Positive" | "Negative" | "Neutral",
  "painPoint": "The key pain point in one sentence, or \"None detected\"",
  "positiveQuote": "The most positive quote, verbatim, or \"None detected\""
}

All three fields are required."#
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait::async_trait]
impl AiPort for OpenAiAdapter {
    async fn analyze(&self, feedback: &Feedback) -> Result<SentimentAnalysis, DomainError> {
        info!(
            model = %self.model,
            chars = feedback.char_count(),
            "sending feedback to OpenAI-compatible API"
        );

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: Self::system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(feedback.as_str()),
                },
            ],
            temperature: 0.2,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let mut builder = self.client.post(&self.api_url).json(&request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| DomainError::Ai(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::Ai(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Ai(format!("Failed to parse API response: {}", e)))?;

        let raw_content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| DomainError::Ai("No response choices returned".to_string()))?;

        debug!(raw_len = raw_content.len(), "received AI response");

        let analysis = parse_analysis(&raw_content)?;
        info!(sentiment = %analysis.sentiment, "AI analysis complete");
        Ok(analysis)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
