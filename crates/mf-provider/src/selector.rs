//! Ordered provider fallback.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use mf_core::{MentorflowConfig, ProviderKind};
use serde::Serialize;

use crate::error::ProviderError;
use crate::gemini::GeminiProvider;
use crate::openai::OpenAiProvider;
use crate::prompt::Prompt;
use crate::traits::LlmProvider;

/// Text produced by a provider, tagged with which one produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generation {
    pub text: String,
    pub provider: ProviderKind,
}

/// Registered providers plus the configured default.
#[derive(Clone)]
pub struct FallbackSelector {
    providers: HashMap<ProviderKind, Arc<dyn LlmProvider>>,
    default_provider: ProviderKind,
}

impl FallbackSelector {
    pub fn new(default_provider: ProviderKind) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider,
        }
    }

    /// Register a provider, replacing any earlier one of the same kind.
    pub fn with_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.providers.insert(provider.kind(), provider);
        self
    }

    /// Build HTTP providers for every kind that has an API key.
    pub fn from_config(config: &MentorflowConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.providers.request_timeout_secs))
            .build()
            .map_err(ProviderError::Client)?;

        let mut selector = Self::new(config.providers.default_provider);
        if let Some(key) = config.api_key(ProviderKind::Gemini) {
            selector = selector.with_provider(Arc::new(GeminiProvider::new(
                client.clone(),
                key,
                config.providers.gemini.clone(),
            )));
        }
        if let Some(key) = config.api_key(ProviderKind::OpenAi) {
            selector = selector.with_provider(Arc::new(OpenAiProvider::new(
                client,
                key,
                config.providers.openai.clone(),
            )));
        }

        tracing::info!(providers = ?selector.configured(), default = %selector.default_provider, "providers registered");
        Ok(selector)
    }

    pub fn default_provider(&self) -> ProviderKind {
        self.default_provider
    }

    /// Registered kinds, in fixed fallback order.
    pub fn configured(&self) -> Vec<ProviderKind> {
        ProviderKind::FALLBACK_ORDER
            .into_iter()
            .filter(|kind| self.providers.contains_key(kind))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Preferred first, then the default, then the fixed order; no repeats.
    pub fn attempt_order(&self, preferred: Option<ProviderKind>) -> Vec<ProviderKind> {
        let mut order = Vec::with_capacity(ProviderKind::FALLBACK_ORDER.len());
        let candidates = preferred
            .into_iter()
            .chain(std::iter::once(self.default_provider))
            .chain(ProviderKind::FALLBACK_ORDER);
        for kind in candidates {
            if !order.contains(&kind) {
                order.push(kind);
            }
        }
        order
    }

    /// Try providers in `attempt_order` and return the first success.
    pub async fn generate(
        &self,
        prompt: &Prompt,
        preferred: Option<ProviderKind>,
    ) -> Result<Generation, ProviderError> {
        let mut last_error: Option<ProviderError> = None;

        for kind in self.attempt_order(preferred) {
            let Some(provider) = self.providers.get(&kind) else {
                tracing::debug!(provider = %kind, "provider not configured, skipping");
                last_error.get_or_insert(ProviderError::NotConfigured(kind));
                continue;
            };

            match provider.generate(prompt).await {
                Ok(text) if !text.trim().is_empty() => {
                    return Ok(Generation { text, provider: kind })
                }
                Ok(_) => {
                    tracing::warn!(provider = %kind, "provider returned blank text");
                    last_error = Some(ProviderError::EmptyResponse {
                        provider: kind,
                        model: "unknown".into(),
                    });
                }
                Err(e) => {
                    tracing::warn!(provider = %kind, error = %e, "provider failed");
                    last_error = Some(e);
                }
            }
        }

        let last = last_error.unwrap_or(ProviderError::NotConfigured(self.default_provider));
        Err(ProviderError::AllFailed(Box::new(last)))
    }
}

/// Parse a caller-supplied provider name; unknown names are logged and ignored.
pub fn parse_preference(raw: Option<&str>) -> Option<ProviderKind> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match ProviderKind::from_str(raw) {
        Ok(kind) => Some(kind),
        Err(_) => {
            tracing::warn!(provider = %raw, "unknown preferred provider, using fallback order");
            None
        }
    }
}
