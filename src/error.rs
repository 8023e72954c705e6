//! Custom error types for the support-chat pipeline.

use thiserror::Error;

/// Unified error type propagated through every pipeline stage.
#[derive(Debug, Error)]
pub enum SupportChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream model error: {0}")]
    Upstream(String),

    #[error("Input validation error: {0}")]
    InputValidation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
