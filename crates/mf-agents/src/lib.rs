//! Mentorship agents, topic suggestion, research-journey helpers and
//! professor verification.

pub mod error;
pub mod insights;
pub mod journey;
pub mod kind;
pub mod runner;
pub mod topics;
pub mod verify;

pub use error::AgentError;
pub use insights::{EventMention, Insights, OpportunityMention, ResourceMention};
pub use journey::{
    generate_proposal, literature_summary, professor_guidance, ContactGuidance, KeyPaper, LiteratureSummary, Proposal,
};
pub use kind::AgentKind;
pub use runner::{AgentReply, AgentRequest, AgentRunner};
pub use topics::{suggest_topics, Topic, TopicSuggestions};
pub use verify::{verify_professor, Evidence, ProfessorVerdict};
