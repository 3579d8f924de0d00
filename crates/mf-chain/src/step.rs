use mf_provider::Prompt;

use crate::error::ChainError;
use crate::state::ChainState;
use crate::template::PromptTemplate;

/// One prompt call whose trimmed output is stored under `output_key`.
#[derive(Debug, Clone)]
pub struct Step {
    pub name: String,
    pub output_key: String,
    pub system: PromptTemplate,
    pub human: PromptTemplate,
    pub temperature: f32,
}

impl Step {
    pub fn new(
        name: impl Into<String>,
        output_key: impl Into<String>,
        system: impl Into<PromptTemplate>,
        human: impl Into<PromptTemplate>,
    ) -> Self {
        Self {
            name: name.into(),
            output_key: output_key.into(),
            system: system.into(),
            human: human.into(),
            temperature: 0.0,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// State keys this step reads.
    pub fn inputs(&self) -> Vec<&str> {
        let mut vars = self.system.variables();
        for var in self.human.variables() {
            if !vars.contains(&var) {
                vars.push(var);
            }
        }
        vars
    }

    pub fn render(&self, state: &ChainState) -> Result<Prompt, ChainError> {
        let missing = |e: crate::template::UnboundVariable| ChainError::MissingVariable {
            step: self.name.clone(),
            variable: e.0,
        };
        let system = self.system.render(state).map_err(missing)?;
        let user = self.human.render(state).map_err(missing)?;
        Ok(Prompt::new(user)
            .with_system(system)
            .with_temperature(self.temperature))
    }
}
