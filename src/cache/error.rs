use thiserror::Error;

use crate::provider::ProviderError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("word list generation failed: {0}")]
    Generation(#[from] ProviderError),

    #[error("generation for '{target}' produced no usable words")]
    EmptyList { target: String },

    #[error("word list storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("generation for '{target}' is already in flight")]
    InFlight { target: String },

    #[error("storage task failed: {0}")]
    Task(String),
}

pub type CacheResult<T> = Result<T, CacheError>;
