//! Application error type
//!
//! All errors are serializable so a front end can render them directly.

use thiserror::Error;
use serde::Serialize;

/// Fallback message when a transport failure carries no description
pub const ERR_UNKNOWN_TRANSLATION: &str = "Translation failed: Unknown error";

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    /// Remote service failure, already phrased for the user
    #[error("{0}")]
    Network(String),

    /// Rejected input, already phrased for the user
    #[error("{0}")]
    Validation(String),

    #[error("Storage Error: {0}")]
    Storage(String),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether the error should be shown to the user.
    ///
    /// Storage and serialization problems are absorbed by the history store
    /// and only ever logged.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Validation(_))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let msg = err.to_string();
        if msg.trim().is_empty() {
            AppError::Network(ERR_UNKNOWN_TRANSLATION.to_string())
        } else {
            AppError::Network(msg)
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
