use std::path::PathBuf;
use thiserror::Error;

use crate::cache::CacheError;
use crate::config::ConfigError;
use crate::hint::HintError;
use crate::provider::ProviderError;
use crate::rank::RankError;
use crate::storage::StorageError;
use crate::target::TargetError;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    Rank(#[from] RankError),

    #[error(transparent)]
    Hint(#[from] HintError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("no target catalog loaded (expected {path})")]
    NoCatalog { path: PathBuf },
}

pub type GameResult<T> = Result<T, GameError>;
