//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. The user only ever sees
//! [`DomainError::user_message`], which collapses everything but validation
//! into one generic line.

use thiserror::Error;

/// Shown when the feedback is blank.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to analyze.";

/// Shown for every provider, network or parsing failure.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze sentiment. Please try again.";

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("feedback text is empty")]
    EmptyInput,

    /// A request is already outstanding; the trigger is disabled while loading.
    #[error("an analysis is already in progress")]
    Busy,

    #[error("AI analysis failed: {0}")]
    Ai(String),

    #[error("UI error: {0}")]
    Ui(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// The single user-facing string for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            DomainError::EmptyInput => EMPTY_INPUT_MESSAGE,
            _ => ANALYSIS_FAILED_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_keeps_validation_message() {
        assert_eq!(DomainError::EmptyInput.user_message(), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn test_provider_failures_collapse() {
        for err in [
            DomainError::Ai("API error 500".into()),
            DomainError::Ai("Failed to parse LLM JSON".into()),
            DomainError::Busy,
        ] {
            assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);
        }
    }
}
