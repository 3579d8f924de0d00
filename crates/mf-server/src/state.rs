//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use mf_agents::AgentRunner;
use mf_core::MentorflowConfig;
use mf_provider::{FallbackSelector, ProviderError};
use mf_session::ConversationStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MentorflowConfig>,
    pub selector: Arc<FallbackSelector>,
    pub store: ConversationStore,
    pub runner: AgentRunner,
    pub start_time: Instant,
}

impl AppState {
    /// State backed by real HTTP providers for every configured key.
    pub fn from_config(config: MentorflowConfig) -> Result<Self, ProviderError> {
        let selector = FallbackSelector::from_config(&config)?;
        Ok(Self::with_selector(config, selector))
    }

    /// State around an already-built selector.
    pub fn with_selector(config: MentorflowConfig, selector: FallbackSelector) -> Self {
        let selector = Arc::new(selector);
        let store = ConversationStore::new(config.sessions.max_sessions);
        let runner = AgentRunner::new(selector.clone(), store.clone())
            .with_history_exchanges(config.sessions.history_exchanges);
        Self {
            config: Arc::new(config),
            selector,
            store,
            runner,
            start_time: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        let config = MentorflowConfig::default();
        let selector = FallbackSelector::new(config.providers.default_provider);
        Self::with_selector(config, selector)
    }
}
