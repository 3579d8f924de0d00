use mf_provider::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("step '{step}' needs '{variable}', which is not in the chain state")]
    MissingVariable { step: String, variable: String },
    #[error("step '{step}' failed: {source}")]
    Provider {
        step: String,
        #[source]
        source: ProviderError,
    },
}

impl ChainError {
    pub fn step(&self) -> &str {
        match self {
            ChainError::MissingVariable { step, .. } | ChainError::Provider { step, .. } => step,
        }
    }

    /// The provider error behind a failed step, if any.
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            ChainError::Provider { source, .. } => Some(source),
            ChainError::MissingVariable { .. } => None,
        }
    }
}
