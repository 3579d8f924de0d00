//! OpenAI chat-completions provider.

use async_trait::async_trait;
use mf_core::config::OpenAiConfig;
use mf_core::ProviderKind;
use serde_json::{json, Value};

use crate::error::{api_error_message, ProviderError};
use crate::prompt::Prompt;
use crate::traits::LlmProvider;

pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, config: OpenAiConfig) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            config,
        }
    }

    pub fn build_body(&self, prompt: &Prompt) -> Value {
        let mut messages = Vec::new();
        if let Some(system) = prompt.system.as_deref().filter(|s| !s.is_empty()) {
            messages.push(json!({ "role": "system", "content": system }));
        }
        messages.push(json!({ "role": "user", "content": prompt.user }));

        json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": prompt.temperature.unwrap_or(self.config.temperature),
            "max_tokens": self.config.max_tokens,
        })
    }

    pub fn parse_text(body: &Value) -> Option<String> {
        body.pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(String::from)
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, ProviderError> {
        let model = self.config.model.clone();
        let http_err = |source| ProviderError::Http {
            provider: ProviderKind::OpenAi,
            source,
        };
        let url = format!("{}/v1/chat/completions", self.config.base_url.trim_end_matches('/'));

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&self.build_body(prompt))
            .send()
            .await
            .map_err(http_err)?;

        let status = resp.status();
        let text = resp.text().await.map_err(http_err)?;
        if !status.is_success() {
            return Err(ProviderError::Api {
                provider: ProviderKind::OpenAi,
                model,
                status: Some(status.as_u16()),
                message: api_error_message(&text),
            });
        }

        let value: Value = serde_json::from_str(&text).map_err(|e| ProviderError::Api {
            provider: ProviderKind::OpenAi,
            model: model.clone(),
            status: Some(status.as_u16()),
            message: format!("invalid JSON: {e}"),
        })?;

        match Self::parse_text(&value) {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ProviderError::EmptyResponse {
                provider: ProviderKind::OpenAi,
                model,
            }),
        }
    }
}
