use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors returned by word-list storage backends.
pub enum StorageError {
    /// IO error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A persisted record exists but cannot be trusted.
    #[error("corrupt word list at {path}: {reason}")]
    Corrupt {
        /// Record path.
        path: PathBuf,
        /// What failed.
        reason: String,
    },

    /// Storage root path is missing/unavailable.
    #[error("storage path unavailable: {path}")]
    StorageUnavailable {
        /// Path that was unavailable.
        path: PathBuf,
    },
}

/// Convenience result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
