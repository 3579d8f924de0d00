use crate::error::ProviderError;
use crate::prompt::Prompt;
use async_trait::async_trait;
use mf_core::ProviderKind;

/// The one contract every provider variant implements.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Return the generated text, or an error if nothing usable came back.
    async fn generate(&self, prompt: &Prompt) -> Result<String, ProviderError>;
}
