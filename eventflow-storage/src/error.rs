//! Error types for the cache layer.

use thiserror::Error;

/// Result type for cache operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in cache operations.
///
/// These never cross the public read/write surface; they exist so
/// swallowed failures can be logged with a precise cause.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
