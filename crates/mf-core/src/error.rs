use thiserror::Error;

#[derive(Error, Debug)]
pub enum MfError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Invalid config value for {key}: {value}")]
    InvalidConfig { key: String, value: String },
    #[error("Configuration errors: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, MfError>;
