//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the UI session state and error collapse live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod session;

pub use entities::{Feedback, NONE_DETECTED, Sentiment, SentimentAnalysis};
pub use errors::DomainError;
pub use session::{Session, View};
