use async_trait::async_trait;
use quizgen_domain::DomainError;

use crate::services::QuizPrompt;

/// Outbound port to the text-generation provider.
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    /// Whether the provider credential is present. Checked before any input
    /// validation so a misconfigured server never reaches the network.
    fn is_configured(&self) -> bool;

    /// Sends one generation request.
    ///
    /// Returns the first text part of the reply, or `None` when the reply
    /// carried no text. Provider-side failures surface as
    /// `DomainError::Upstream` with the provider's status and message.
    async fn generate(&self, prompt: &QuizPrompt) -> Result<Option<String>, DomainError>;
}
