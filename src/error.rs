//! Tota Error Types
//!
//! Centralized error handling for the learn and practice cores.

use thiserror::Error;

/// Central error type for Tota
#[derive(Error, Debug)]
pub enum TotaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resource error: {0}")]
    Resource(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Cannot {action} while {phase}")]
    InvalidTransition { phase: String, action: &'static str },

    #[error("Unknown selection: {0}")]
    UnknownSelection(String),

    #[error("Selection is locked while a session is {0}")]
    SelectionLocked(String),

    #[error("All cards have been reviewed")]
    ReviewExhausted,

    #[error("No active session")]
    NoActiveSession,

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Tota operations
pub type TotaResult<T> = Result<T, TotaError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for TotaError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        TotaError::Lock(err.to_string())
    }
}
