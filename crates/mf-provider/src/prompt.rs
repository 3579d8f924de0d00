use serde::{Deserialize, Serialize};

/// A single provider request: optional system instructions plus the user text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub system: Option<String>,
    pub user: String,
    /// Overrides the provider's configured temperature.
    pub temperature: Option<f32>,
}

impl Prompt {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            system: None,
            user: user.into(),
            temperature: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// System and user text joined by a blank line, for single-text APIs.
    pub fn flattened(&self) -> String {
        match self.system.as_deref() {
            Some(system) if !system.is_empty() => format!("{}\n\n{}", system, self.user),
            _ => self.user.clone(),
        }
    }
}
