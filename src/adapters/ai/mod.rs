//! AI adapter module. Implements AiPort for LLM integration.
//!
//! Provides Gemini (default), OpenAI-compatible and mock adapters.

pub mod gemini_adapter;
pub mod mock_adapter;
pub mod openai_adapter;
pub mod prompt;

pub use gemini_adapter::GeminiAdapter;
pub use mock_adapter::MockAiAdapter;
pub use openai_adapter::OpenAiAdapter;
