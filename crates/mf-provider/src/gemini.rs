//! Google Gemini `generateContent` REST provider.
//!
//! The prompt is sent as one flattened text part. The API key travels as the
//! `?key=` query parameter. Configured models are tried in order and the first
//! non-empty `candidates[0].content.parts[0].text` wins.

use async_trait::async_trait;
use mf_core::config::GeminiConfig;
use mf_core::ProviderKind;
use serde_json::{json, Value};

use crate::error::{api_error_message, ProviderError};
use crate::prompt::Prompt;
use crate::traits::LlmProvider;

pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiProvider {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>, config: GeminiConfig) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            config,
        }
    }

    pub fn models(&self) -> &[String] {
        &self.config.models
    }

    pub fn build_body(&self, prompt: &Prompt) -> Value {
        json!({
            "contents": [{
                "parts": [{ "text": prompt.flattened() }]
            }],
            "generationConfig": {
                "temperature": prompt.temperature.unwrap_or(self.config.temperature),
                "maxOutputTokens": self.config.max_output_tokens,
                "topP": self.config.top_p,
                "topK": self.config.top_k,
            }
        })
    }

    pub fn parse_text(body: &Value) -> Option<String> {
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(String::from)
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    async fn generate_with_model(&self, model: &str, body: &Value) -> Result<String, ProviderError> {
        let http_err = |source| ProviderError::Http {
            provider: ProviderKind::Gemini,
            source,
        };
        let resp = self
            .client
            .post(self.endpoint(model))
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(http_err)?;

        let status = resp.status();
        let text = resp.text().await.map_err(http_err)?;
        if !status.is_success() {
            return Err(ProviderError::Api {
                provider: ProviderKind::Gemini,
                model: model.to_string(),
                status: Some(status.as_u16()),
                message: api_error_message(&text),
            });
        }

        let value: Value = serde_json::from_str(&text).map_err(|e| ProviderError::Api {
            provider: ProviderKind::Gemini,
            model: model.to_string(),
            status: Some(status.as_u16()),
            message: format!("invalid JSON: {e}"),
        })?;

        match Self::parse_text(&value) {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(ProviderError::EmptyResponse {
                provider: ProviderKind::Gemini,
                model: model.to_string(),
            }),
        }
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, ProviderError> {
        let body = self.build_body(prompt);
        let mut last_error = None;

        for model in &self.config.models {
            match self.generate_with_model(model, &body).await {
                Ok(text) => {
                    tracing::info!(model = %model, "gemini generation succeeded");
                    return Ok(text);
                }
                Err(e) => {
                    tracing::debug!(model = %model, error = %e, "gemini model failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(ProviderError::NotConfigured(ProviderKind::Gemini)))
    }
}
