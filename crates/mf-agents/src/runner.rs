//! History-aware single-turn agent answers.

use std::sync::Arc;

use mf_core::Role;
use mf_provider::{FallbackSelector, Prompt, ProviderKind};
use mf_session::{render_transcript, ConversationStore, HistoryTurn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AgentError;
use crate::insights::Insights;
use crate::kind::AgentKind;

#[derive(Debug, Clone)]
pub struct AgentRequest {
    pub kind: AgentKind,
    pub query: String,
    pub user_id: Option<String>,
    pub preferred: Option<ProviderKind>,
    pub session_id: Option<String>,
}

impl AgentRequest {
    pub fn new(kind: AgentKind, query: impl Into<String>) -> Self {
        Self {
            kind,
            query: query.into(),
            user_id: None,
            preferred: None,
            session_id: None,
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    pub fn with_preferred(mut self, preferred: Option<ProviderKind>) -> Self {
        self.preferred = preferred;
        self
    }

    pub fn with_user(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentReply {
    pub success: bool,
    pub agent_type: AgentKind,
    pub agent_name: &'static str,
    pub response: String,
    pub ai_provider: ProviderKind,
    pub session_id: String,
    pub metadata: Map<String, Value>,
    #[serde(flatten)]
    pub insights: Insights,
}

#[derive(Clone)]
pub struct AgentRunner {
    selector: Arc<FallbackSelector>,
    store: ConversationStore,
    history_exchanges: usize,
}

impl AgentRunner {
    pub fn new(selector: Arc<FallbackSelector>, store: ConversationStore) -> Self {
        Self {
            selector,
            store,
            history_exchanges: 3,
        }
    }

    /// How many user/assistant pairs of history go into each prompt.
    pub fn with_history_exchanges(mut self, exchanges: usize) -> Self {
        self.history_exchanges = exchanges;
        self
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Agent system prompt, then prior turns if any, then the question.
    pub fn build_prompt(kind: AgentKind, query: &str, history: &[HistoryTurn]) -> Prompt {
        let transcript = render_transcript(history);
        let user = if transcript.is_empty() {
            format!("User question: {query}\n\nPlease provide a helpful response.")
        } else {
            format!(
                "Previous conversation:\n{transcript}\n\nCurrent question: {query}\n\nPlease provide a helpful response based on the conversation context."
            )
        };
        Prompt::new(user).with_system(kind.system_prompt())
    }

    pub async fn respond(&self, request: AgentRequest) -> Result<AgentReply, AgentError> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(AgentError::InvalidInput("query must not be empty".into()));
        }
        let kind = request.kind;

        let session_id = match request.session_id.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(id) => {
                self.store.ensure(id, request.user_id.clone(), Some(kind.id().to_string()));
                id.to_string()
            }
            None => self.store.create(request.user_id.clone(), Some(kind.id().to_string())),
        };

        let history = self.store.history_for_llm(&session_id, self.history_exchanges);
        self.store.add_message(&session_id, Role::User, query, None);

        tracing::info!(agent = %kind, session = %session_id, history = history.len(), "agent request");
        let prompt = Self::build_prompt(kind, query, &history);
        let generation = self.selector.generate(&prompt, request.preferred).await?;

        let response = generation.text;
        let provider = generation.provider;

        let mut assistant_meta = Map::new();
        assistant_meta.insert("agent_type".into(), kind.id().into());
        assistant_meta.insert("ai_provider".into(), provider.as_str().into());
        self.store
            .add_message(&session_id, Role::Assistant, response.clone(), Some(assistant_meta));

        let insights = Insights::analyze(kind, &response);
        let mut metadata = Map::new();
        metadata.insert("query_length".into(), query.chars().count().into());
        metadata.insert("response_length".into(), response.chars().count().into());
        metadata.insert("provider".into(), provider.as_str().into());
        metadata.insert("agent_type".into(), kind.id().into());
        metadata.extend(insights.metadata());

        Ok(AgentReply {
            success: true,
            agent_type: kind,
            agent_name: kind.display_name(),
            response,
            ai_provider: provider,
            session_id,
            metadata,
            insights,
        })
    }
}
