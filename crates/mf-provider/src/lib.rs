//! LLM providers behind one `generate(prompt) -> text` contract, plus the
//! ordered fallback selector that picks between them at call time.

pub mod error;
pub mod gemini;
pub mod openai;
pub mod prompt;
pub mod scripted;
pub mod selector;
pub mod traits;

pub use error::ProviderError;
pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
pub use prompt::Prompt;
pub use scripted::ScriptedProvider;
pub use selector::{parse_preference, FallbackSelector, Generation};
pub use traits::LlmProvider;

pub use mf_core::ProviderKind;

#[cfg(test)]
mod tests;
