//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the analysis session.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the front end until the user quits (or the single piped request completes).
    async fn run(&self) -> Result<(), DomainError>;
}
