/// Unified error types for the cutecats core
use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum CatError {
    /// Transport-level failures talking to the remote catalog
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Malformed response payloads
    #[error("malformed response: {0}")]
    Decode(String),

    /// Database errors
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Local storage failures (file copy, uploads directory)
    #[error("storage error: {0}")]
    Storage(String),

    /// Duplicate-key conflicts
    #[error("conflict: {0}")]
    Conflict(String),

    /// Configuration validation errors
    #[error("validation error: {0}")]
    Validation(String),

    /// Internal errors
    #[error("internal error: {0}")]
    Internal(String),

    /// IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crate operations
pub type CatResult<T> = Result<T, CatError>;
