//! Application configuration. Provider selection, credentials, model.

use crate::adapters::ai::gemini_adapter::{DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_URL};
use crate::adapters::ai::openai_adapter::{DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_URL};
use crate::domain::DomainError;
use serde::Deserialize;
use std::str::FromStr;

/// Simulated latency of the offline provider, so the spinner is visible.
pub const DEFAULT_MOCK_DELAY_MS: u64 = 800;

/// Which backend answers the classification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provider {
    #[default]
    Gemini,
    OpenAi,
    Mock,
}

impl FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "gemini" | "google" => Ok(Provider::Gemini),
            "openai" | "ollama" | "azure" => Ok(Provider::OpenAi),
            "mock" | "offline" => Ok(Provider::Mock),
            other => Err(DomainError::Config(format!("unknown provider: {}", other))),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// `gemini` (default), `openai` or `mock`. Read from SENTIMENT_AI_PROVIDER.
    #[serde(default)]
    pub provider: Option<String>,

    /// Provider API key. Read from SENTIMENT_AI_API_KEY, then GEMINI_API_KEY, then API_KEY.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Endpoint override. Read from SENTIMENT_AI_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Model id. Read from SENTIMENT_AI_MODEL.
    #[serde(default)]
    pub model: Option<String>,

    /// Mock provider latency. Read from SENTIMENT_AI_MOCK_DELAY_MS.
    #[serde(default)]
    pub mock_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("SENTIMENT_AI_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("SENTIMENT_AI"));
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Bare key names used by the Gemini tooling; the prefixed key wins.
        if cfg.api_key().is_none() {
            cfg.api_key = std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .ok();
        }
        Ok(cfg)
    }

    /// Returns the API key if configured and not blank.
    pub fn api_key(&self) -> Option<String> {
        self.api_key.clone().filter(|k| !k.trim().is_empty())
    }

    /// Provider named in the configuration, before the missing-key fallback.
    pub fn requested_provider(&self) -> Result<Provider, DomainError> {
        match &self.provider {
            Some(p) => p.parse(),
            None => Ok(Provider::default()),
        }
    }

    /// Resolved provider. Without an API key a remote provider falls back to mock.
    ///
    /// The one exception is `openai` with an explicit `api_url`: keyless local
    /// endpoints (Ollama) are reached without a bearer token.
    pub fn provider(&self) -> Result<Provider, DomainError> {
        let requested = self.requested_provider()?;
        let has_key = self.api_key().is_some();
        Ok(match requested {
            Provider::Gemini if !has_key => Provider::Mock,
            Provider::OpenAi if !has_key && self.api_url.is_none() => Provider::Mock,
            other => other,
        })
    }

    /// True when a remote provider was asked for but the mock will answer instead.
    pub fn is_mock_fallback(&self) -> Result<bool, DomainError> {
        Ok(self.requested_provider()? != Provider::Mock && self.provider()? == Provider::Mock)
    }

    /// Endpoint for `provider`, honoring the override.
    pub fn api_url_or_default(&self, provider: Provider) -> String {
        self.api_url.clone().unwrap_or_else(|| match provider {
            Provider::OpenAi => DEFAULT_OPENAI_URL.to_string(),
            _ => DEFAULT_GEMINI_URL.to_string(),
        })
    }

    /// Model id for `provider`, honoring the override.
    pub fn model_or_default(&self, provider: Provider) -> String {
        self.model.clone().unwrap_or_else(|| match provider {
            Provider::OpenAi => DEFAULT_OPENAI_MODEL.to_string(),
            _ => DEFAULT_GEMINI_MODEL.to_string(),
        })
    }

    pub fn mock_delay_ms_or_default(&self) -> u64 {
        self.mock_delay_ms.unwrap_or(DEFAULT_MOCK_DELAY_MS)
    }
}
