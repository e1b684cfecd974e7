//! Error handling for the match runtime.

use thiserror::Error;
use vocab_core::MatchError;

/// Match runtime error types
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("No tokio runtime available to drive match timers")]
    NoRuntime,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for runtime operations
pub type Result<T> = std::result::Result<T, SessionError>;
