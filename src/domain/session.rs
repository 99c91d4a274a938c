//! UI session state: idle → loading → result/error.
//!
//! Owned by the UI adapter. The loading flag is the only concurrency guard:
//! while it is set, a second request is refused.

use crate::domain::{DomainError, Feedback, SentimentAnalysis};

/// What the presenter should draw for the current state.
#[derive(Debug, PartialEq, Eq)]
pub enum View<'a> {
    Loading,
    Result(&'a SentimentAnalysis),
    Form {
        input: &'a str,
        error: Option<&'a str>,
    },
}

#[derive(Debug, Default)]
pub struct Session {
    input: String,
    result: Option<SentimentAnalysis>,
    loading: bool,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&SentimentAnalysis> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the analyze trigger is enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Validate the input and enter the loading state.
    ///
    /// Blank input sets the validation message and leaves the state otherwise
    /// untouched; no request must be made in that case.
    pub fn begin(&mut self) -> Result<Feedback, DomainError> {
        if self.loading {
            return Err(DomainError::Busy);
        }
        let feedback = match Feedback::parse(self.input.clone()) {
            Ok(f) => f,
            Err(e) => {
                self.error = Some(e.user_message().to_string());
                return Err(e);
            }
        };
        self.loading = true;
        self.error = None;
        self.result = None;
        Ok(feedback)
    }

    /// Leave the loading state with the provider outcome.
    pub fn finish(&mut self, outcome: Result<SentimentAnalysis, DomainError>) {
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(e) => self.error = Some(e.user_message().to_string()),
        }
        self.loading = false;
    }

    /// "Analyze Another": drop the result and clear the input.
    pub fn reset(&mut self) {
        self.result = None;
        self.input.clear();
    }

    pub fn view(&self) -> View<'_> {
        if self.loading {
            View::Loading
        } else if let Some(result) = &self.result {
            View::Result(result)
        } else {
            View::Form {
                input: &self.input,
                error: self.error.as_deref(),
            }
        }
    }
}
