pub mod config;
pub mod error;
pub mod types;

pub use config::MentorflowConfig;
pub use error::{MfError, Result};
pub use types::{ProviderKind, Role};

#[cfg(test)]
mod tests;
