//! Capped in-memory conversation store.

use crate::session::{ChatMessage, Conversation, HistoryTurn};
use mf_core::Role;
use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

#[derive(Default)]
struct StoreInner {
    sessions: HashMap<String, Conversation>,
    /// Session ids, oldest-created first.
    created: VecDeque<String>,
}

impl StoreInner {
    fn insert(&mut self, conversation: Conversation) {
        self.created.push_back(conversation.id.clone());
        self.sessions.insert(conversation.id.clone(), conversation);
    }

    fn evict_over(&mut self, max_sessions: usize) -> usize {
        let mut evicted = 0;
        while self.sessions.len() > max_sessions {
            let Some(oldest) = self.created.pop_front() else { break };
            if self.sessions.remove(&oldest).is_some() {
                evicted += 1;
            }
        }
        evicted
    }
}

/// Conversations keyed by id; the oldest-created are dropped once the cap is exceeded.
#[derive(Clone)]
pub struct ConversationStore {
    inner: Arc<Mutex<StoreInner>>,
    max_sessions: usize,
}

impl ConversationStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner::default())),
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    /// Create a session under a fresh UUID.
    pub fn create(&self, user_id: Option<String>, agent_type: Option<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.insert_new(Conversation::new(id.clone(), user_id, agent_type));
        id
    }

    /// Create a session under `id` unless it already exists. Returns true if created.
    pub fn ensure(&self, id: &str, user_id: Option<String>, agent_type: Option<String>) -> bool {
        if self.contains(id) {
            return false;
        }
        self.insert_new(Conversation::new(id, user_id, agent_type));
        true
    }

    fn insert_new(&self, conversation: Conversation) {
        let short: String = conversation.id.chars().take(8).collect();
        let mut inner = self.inner.lock();
        if inner.sessions.contains_key(&conversation.id) {
            return;
        }
        inner.insert(conversation);
        let evicted = inner.evict_over(self.max_sessions);
        drop(inner);

        tracing::info!(session = %short, "created conversation session");
        if evicted > 0 {
            tracing::info!(evicted, "cleaned up old sessions");
        }
    }

    /// Append a message, creating the session under `id` if needed.
    pub fn add_message(
        &self,
        id: &str,
        role: Role,
        content: impl Into<String>,
        metadata: Option<Map<String, Value>>,
    ) {
        self.ensure(id, None, None);
        let message = ChatMessage::new(role, content).with_metadata(metadata.unwrap_or_default());
        let mut inner = self.inner.lock();
        if let Some(conversation) = inner.sessions.get_mut(id) {
            conversation.push(message);
            tracing::debug!(session = %id, %role, "added message");
        }
    }

    /// The last `limit` messages of a session; empty if unknown.
    pub fn history(&self, id: &str, limit: usize) -> Vec<ChatMessage> {
        self.inner
            .lock()
            .sessions
            .get(id)
            .map(|c| c.tail(limit).to_vec())
            .unwrap_or_default()
    }

    /// The last `exchanges` user/assistant pairs as role/content turns.
    pub fn history_for_llm(&self, id: &str, exchanges: usize) -> Vec<HistoryTurn> {
        self.history(id, exchanges * 2)
            .iter()
            .map(ChatMessage::turn)
            .collect()
    }

    /// Drop a session's messages but keep the session. Returns false if unknown.
    pub fn clear(&self, id: &str) -> bool {
        match self.inner.lock().sessions.get_mut(id) {
            Some(conversation) => {
                conversation.clear();
                tracing::info!(session = %id, "cleared session");
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<Conversation> {
        self.inner.lock().sessions.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().sessions.contains_key(id)
    }

    pub fn remove(&self, id: &str) -> Option<Conversation> {
        let mut inner = self.inner.lock();
        let removed = inner.sessions.remove(id);
        if removed.is_some() {
            inner.created.retain(|s| s != id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.lock().sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(100)
    }
}
