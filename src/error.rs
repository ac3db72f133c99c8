//! Error types for chat-memory

use thiserror::Error;

/// Result type for context-memory operations
pub type Result<T> = std::result::Result<T, ContextError>;

/// Errors raised at the boundary of the context-memory core.
///
/// The selection, search and summary operations themselves are total; only
/// turning untyped input into typed messages or config can fail.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
