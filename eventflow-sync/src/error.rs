//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors raised by the remote tier clients.
///
/// These never escape the synchronizer's public entry points: every
/// public read resolves with a snapshot and every public write resolves
/// with an outcome. Failures are logged and drive tier fallback.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Network error (connect failure, non-success HTTP status).
    #[error("network error: {0}")]
    Network(String),

    /// Malformed remote response (body not in the expected shape).
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The remote tier never answered within its deadline.
    #[error("operation timed out")]
    Timeout,
}
