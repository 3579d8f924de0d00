use mf_provider::ProviderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("unknown agent type: {0}")]
    UnknownAgent(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
