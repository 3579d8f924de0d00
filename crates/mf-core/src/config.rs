use crate::error::{MfError, Result};
use crate::types::ProviderKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorflowConfig {
    pub providers: ProvidersConfig,
    pub server: ServerConfig,
    pub sessions: SessionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Tried right after the caller's preference.
    pub default_provider: ProviderKind,
    pub request_timeout_secs: u64,
    pub gemini: GeminiConfig,
    pub openai: OpenAiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    /// Tried in order until one returns text.
    pub models: Vec<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub debug: bool,
    pub max_body_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub max_sessions: usize,
    /// User/assistant pairs replayed into agent prompts.
    pub history_exchanges: usize,
    pub default_history_limit: usize,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            default_provider: ProviderKind::Gemini,
            request_timeout_secs: 30,
            gemini: GeminiConfig::default(),
            openai: OpenAiConfig::default(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".into(),
            models: vec![
                "gemini-2.5-flash".into(),
                "gemini-2.5-pro".into(),
                "gemini-2.0-flash".into(),
                "gemini-1.5-flash".into(),
                "gemini-1.5-pro".into(),
            ],
            temperature: 0.7,
            max_output_tokens: 2000,
            top_p: 0.95,
            top_k: 40,
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com".into(),
            model: "gpt-3.5-turbo".into(),
            temperature: 0.7,
            max_tokens: 1500,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            log_level: "info".into(),
            debug: false,
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// `DEBUG=true` forces debug logging regardless of `LOG_LEVEL`.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 100,
            history_exchanges: 3,
            default_history_limit: 20,
        }
    }
}

impl MentorflowConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = Self::default();

        cfg.providers.gemini.api_key = get("GEMINI_API_KEY");
        cfg.providers.openai.api_key = get("OPENAI_API_KEY");

        if let Some(raw) = get("AI_PROVIDER") {
            cfg.providers.default_provider = ProviderKind::from_str(&raw).unwrap_or_else(|_| {
                tracing::warn!(provider = %raw, "invalid AI_PROVIDER, using gemini");
                ProviderKind::Gemini
            });
        }
        if let Some(secs) = get("REQUEST_TIMEOUT") {
            cfg.providers.request_timeout_secs = parse_num("REQUEST_TIMEOUT", &secs)?;
        }
        if let Some(models) = get("GEMINI_MODELS") {
            let models: Vec<String> = models
                .split(',')
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty())
                .collect();
            if !models.is_empty() {
                cfg.providers.gemini.models = models;
            }
        }
        if let Some(url) = get("GEMINI_BASE_URL") {
            cfg.providers.gemini.base_url = url;
        }
        if let Some(model) = get("OPENAI_MODEL") {
            cfg.providers.openai.model = model;
        }
        if let Some(url) = get("OPENAI_BASE_URL") {
            cfg.providers.openai.base_url = url;
        }

        if let Some(host) = get("API_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = get("API_PORT") {
            cfg.server.port = parse_num("API_PORT", &port)?;
        }
        if let Some(level) = get("LOG_LEVEL") {
            cfg.server.log_level = level.to_lowercase();
        }
        if let Some(debug) = get("DEBUG") {
            cfg.server.debug = debug.eq_ignore_ascii_case("true");
        }
        if let Some(max) = get("MAX_SESSIONS") {
            cfg.sessions.max_sessions = parse_num("MAX_SESSIONS", &max)?;
        }

        Ok(cfg)
    }

    /// Providers with an API key, in fallback order.
    pub fn available_providers(&self) -> Vec<ProviderKind> {
        ProviderKind::FALLBACK_ORDER
            .into_iter()
            .filter(|kind| self.api_key(*kind).is_some())
            .collect()
    }

    pub fn api_key(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::Gemini => self.providers.gemini.api_key.as_deref(),
            ProviderKind::OpenAi => self.providers.openai.api_key.as_deref(),
        }
    }

    /// At least one provider key is required.
    pub fn validate(&self) -> Result<()> {
        let available = self.available_providers();
        if available.is_empty() {
            return Err(MfError::Validation(
                "at least one AI provider API key (OPENAI_API_KEY or GEMINI_API_KEY) is required".into(),
            ));
        }
        if !available.contains(&self.providers.default_provider) {
            tracing::warn!(
                default = %self.providers.default_provider,
                "default provider has no API key; fallback will skip it"
            );
        }
        if self.sessions.max_sessions == 0 {
            return Err(MfError::InvalidConfig {
                key: "MAX_SESSIONS".into(),
                value: "0".into(),
            });
        }
        Ok(())
    }
}

fn parse_num<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| MfError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    })
}
