//! Canned-reply provider for offline runs and tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use mf_core::ProviderKind;
use parking_lot::Mutex;

use crate::error::ProviderError;
use crate::prompt::Prompt;
use crate::traits::LlmProvider;

/// Replays queued replies in order, then the fallback reply if one is set.
pub struct ScriptedProvider {
    kind: ProviderKind,
    replies: Mutex<VecDeque<Result<String, String>>>,
    fallback: Option<String>,
    seen: Mutex<Vec<Prompt>>,
}

impl ScriptedProvider {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            replies: Mutex::new(VecDeque::new()),
            fallback: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().push_back(Ok(text.into()));
        self
    }

    pub fn fail(self, message: impl Into<String>) -> Self {
        self.replies.lock().push_back(Err(message.into()));
        self
    }

    /// Reply used once the queue is drained.
    pub fn always(mut self, text: impl Into<String>) -> Self {
        self.fallback = Some(text.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn prompts(&self) -> Vec<Prompt> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn generate(&self, prompt: &Prompt) -> Result<String, ProviderError> {
        self.seen.lock().push(prompt.clone());
        let next = self.replies.lock().pop_front();
        let outcome = match next {
            Some(outcome) => outcome,
            None => self.fallback.clone().ok_or_else(|| "script exhausted".to_string()),
        };
        outcome.map_err(|message| ProviderError::Api {
            provider: self.kind,
            model: "scripted".into(),
            status: None,
            message,
        })
    }
}
