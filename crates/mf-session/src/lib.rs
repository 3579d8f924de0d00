//! In-memory conversation history for mentorship sessions.

pub mod session;
pub mod store;
pub mod transcript;

pub use session::*;
pub use store::ConversationStore;
pub use transcript::render_transcript;

#[cfg(test)]
mod tests;
