use mf_core::ProviderKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} provider is not configured")]
    NotConfigured(ProviderKind),
    #[error("{provider} API error ({model}): {message}")]
    Api {
        provider: ProviderKind,
        model: String,
        status: Option<u16>,
        message: String,
    },
    #[error("{provider} returned an empty response ({model})")]
    EmptyResponse { provider: ProviderKind, model: String },
    #[error("{provider} request failed: {source}")]
    Http {
        provider: ProviderKind,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),
    #[error("All AI providers failed. Last error: {0}")]
    AllFailed(#[source] Box<ProviderError>),
}

impl ProviderError {
    /// The error that ended a fallback run, or `self` for single attempts.
    pub fn last_error(&self) -> &ProviderError {
        match self {
            ProviderError::AllFailed(inner) => inner.last_error(),
            other => other,
        }
    }
}

/// Pull `error.message` out of a provider error body, else a short prefix of the raw text.
pub(crate) fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.chars().take(100).collect())
}
