//! Funtexto library crate (used by the binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Game`], [`GameError`] - Facade over ranking, hints and the target catalog
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//! - [`RankedWordList`] - Persisted, ordered neighbours of a target
//!
//! ## Ranking & Hints
//! - [`WordListCache`], [`ListLookup`] - Single-flight list generation over durable storage
//! - [`RankResolver`], [`GuessResult`] - Exact match, list rank, embedding fallback
//! - [`HintSelector`], [`HintService`], [`Difficulty`] - Hint index policy and serving
//! - [`format_nearby`] - Nearby-words display list
//!
//! ## Collaborators
//! - [`SimilarityProvider`], [`GeminiProvider`] - Embedding and text generation
//! - [`ListStore`], [`DiskListStore`] - Word-list persistence
//! - [`TargetCatalog`] - Game id and daily target rotation
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod config;
pub mod constants;
pub mod game;
pub mod hashing;
pub mod hint;
pub mod nearby;
pub mod provider;
pub mod rank;
pub mod storage;
pub mod target;
pub mod words;

pub use cache::{CacheError, CacheResult, ListLookup, WordListCache, WordListCacheConfig};
pub use config::{Config, ConfigError};
pub use game::{Game, GameError, GameResult};
pub use hint::{Difficulty, Hint, HintError, HintPick, HintSelector, HintService, HintSource};
pub use nearby::{NearbyEntry, format_nearby};
pub use provider::{GeminiProvider, ProviderError, SimilarityProvider};
pub use rank::{EmbeddingService, GuessResult, RankError, RankResolver, RankSource};
pub use storage::{DiskListStore, ListStore, RankedWordList, StorageError};
pub use target::{TargetCatalog, TargetError, daily_game_id};

#[cfg(any(test, feature = "mock"))]
pub use provider::MockProvider;
#[cfg(any(test, feature = "mock"))]
pub use storage::MemoryListStore;
