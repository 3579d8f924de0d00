//! Sequential prompt chains.
//!
//! A [`Chain`] is an ordered list of [`Step`]s sharing one [`ChainState`].
//! Each step renders its templates from the state, asks the provider
//! selector for a completion, and stores the trimmed text under its output
//! key. The first failing step aborts the run.

pub mod error;
pub mod executor;
pub mod json;
pub mod state;
pub mod step;
pub mod template;
pub mod workflows;

pub use error::ChainError;
pub use executor::{Chain, ChainOutcome, StepTrace};
pub use json::extract_json_object;
pub use state::ChainState;
pub use step::Step;
pub use template::{PromptTemplate, UnboundVariable};
pub use workflows::{mentorship_chain, proposal_chain, research_hub_chain};
