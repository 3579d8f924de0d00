//! Chain executor.

use mf_provider::{FallbackSelector, ProviderKind};
use serde::Serialize;

use crate::error::ChainError;
use crate::state::ChainState;
use crate::step::Step;

/// Which provider produced a step's output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepTrace {
    pub step: String,
    pub output_key: String,
    pub provider: ProviderKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChainOutcome {
    pub state: ChainState,
    pub trace: Vec<StepTrace>,
}

impl ChainOutcome {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.state.get(key)
    }

    /// Provider of the last step, if any step ran.
    pub fn last_provider(&self) -> Option<ProviderKind> {
        self.trace.last().map(|t| t.provider)
    }
}

#[derive(Debug, Clone)]
pub struct Chain {
    name: String,
    steps: Vec<Step>,
}

impl Chain {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn output_keys(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.output_key.as_str()).collect()
    }

    /// Keys the caller must supply: read by some step but not written by an earlier one.
    pub fn required_inputs(&self) -> Vec<&str> {
        let mut produced: Vec<&str> = Vec::new();
        let mut required: Vec<&str> = Vec::new();
        for step in &self.steps {
            for input in step.inputs() {
                if !produced.contains(&input) && !required.contains(&input) {
                    required.push(input);
                }
            }
            produced.push(&step.output_key);
        }
        required
    }

    /// Run every step in order. The first failure aborts and discards the partial state.
    pub async fn run(
        &self,
        selector: &FallbackSelector,
        preferred: Option<ProviderKind>,
        initial: ChainState,
    ) -> Result<ChainOutcome, ChainError> {
        let mut state = initial;
        let mut trace = Vec::with_capacity(self.steps.len());

        for (idx, step) in self.steps.iter().enumerate() {
            let prompt = step.render(&state)?;
            tracing::info!(
                chain = %self.name,
                step = %step.name,
                index = idx + 1,
                total = self.steps.len(),
                "running chain step"
            );

            let generation = selector
                .generate(&prompt, preferred)
                .await
                .map_err(|source| {
                    tracing::warn!(chain = %self.name, step = %step.name, error = %source, "chain step failed");
                    ChainError::Provider {
                        step: step.name.clone(),
                        source,
                    }
                })?;

            state.insert(step.output_key.clone(), generation.text.trim());
            trace.push(StepTrace {
                step: step.name.clone(),
                output_key: step.output_key.clone(),
                provider: generation.provider,
            });
        }

        tracing::info!(chain = %self.name, steps = trace.len(), "chain completed");
        Ok(ChainOutcome { state, trace })
    }
}
