//! Game facade.
//!
//! [`Game`] wires the word-list cache, rank resolver, hint service and target catalog into
//! the operations a front end calls: guess, hint, nearby and reveal.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::{GameError, GameResult};

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::cache::{WordListCache, WordListCacheConfig};
use crate::config::Config;
use crate::hint::{Difficulty, Hint, HintService};
use crate::nearby::{NearbyEntry, format_nearby};
use crate::provider::{GeminiProvider, SimilarityProvider};
use crate::rank::{EmbeddingService, GuessResult, RankResolver};
use crate::storage::{DiskListStore, ListStore, RankedWordList};
use crate::target::TargetCatalog;

pub struct Game {
    cache: Arc<WordListCache>,
    resolver: RankResolver,
    hints: HintService,
    provider: Arc<dyn SimilarityProvider>,
    catalog: Option<TargetCatalog>,
    targets_path: PathBuf,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("cache", &self.cache)
            .field("targets", &self.catalog.as_ref().map(TargetCatalog::len))
            .finish()
    }
}

impl Game {
    /// Assembles a game over explicit collaborators.
    pub fn new(
        store: Arc<dyn ListStore>,
        provider: Arc<dyn SimilarityProvider>,
        catalog: Option<TargetCatalog>,
        config: &Config,
    ) -> Self {
        let cache = Arc::new(WordListCache::new(
            store,
            provider.clone(),
            WordListCacheConfig::with_list_size(config.list_size),
        ));
        let embeddings = EmbeddingService::new(provider.clone(), config.embedding_model.clone());

        Self {
            resolver: RankResolver::new(cache.clone(), embeddings),
            hints: HintService::new(cache.clone(), provider.clone()),
            cache,
            provider,
            catalog,
            targets_path: config.targets_path.clone(),
        }
    }

    /// Builds the production game: Gemini provider, disk storage, catalog from
    /// `targets_path` when the file exists.
    pub fn from_config(config: &Config) -> GameResult<Self> {
        let provider = Arc::new(GeminiProvider::from_config(config)?);

        let store = DiskListStore::new(config.storage_path.clone());
        store.ensure_storage_path()?;

        let catalog = if config.targets_path.is_file() {
            let catalog = TargetCatalog::from_json_file(&config.targets_path)?;
            info!(targets = catalog.len(), "Target catalog loaded");
            Some(catalog)
        } else {
            warn!(path = %config.targets_path.display(), "No target catalog found");
            None
        };

        Ok(Self::new(Arc::new(store), provider, catalog, config))
    }

    /// Replaces the hint service's random source.
    pub fn with_hint_rng(mut self, rng: StdRng) -> Self {
        self.hints = HintService::with_rng(self.cache.clone(), self.provider.clone(), rng);
        self
    }

    pub fn cache(&self) -> &Arc<WordListCache> {
        &self.cache
    }

    pub fn catalog(&self) -> GameResult<&TargetCatalog> {
        self.catalog.as_ref().ok_or_else(|| GameError::NoCatalog {
            path: self.targets_path.clone(),
        })
    }

    /// Ranks `word` against `target`.
    pub async fn guess(&self, target: &str, word: &str) -> GameResult<GuessResult> {
        Ok(self.resolver.resolve(word, target).await?)
    }

    pub async fn hint(
        &self,
        target: &str,
        current_best_guess: Option<&str>,
        difficulty: Difficulty,
    ) -> GameResult<Hint> {
        Ok(self
            .hints
            .hint(target, current_best_guess, difficulty)
            .await?)
    }

    /// Nearby words for the end-of-game screen; empty while the list is still generating.
    pub async fn nearby(&self, target: &str) -> Vec<NearbyEntry> {
        match self.cache.get_ranked_list(target).await.into_list() {
            Some(list) => format_nearby(list.target(), &list),
            None => Vec::new(),
        }
    }

    /// Generates the list for `target` if missing and waits for it.
    pub async fn warm(&self, target: &str) -> GameResult<Arc<RankedWordList>> {
        Ok(self.cache.get_or_generate(target).await?)
    }

    /// Waits for background list generations to persist. Call before the runtime exits.
    pub async fn shutdown(&self) {
        self.cache.drain().await;
    }

    /// Secret word for a game id, or for the daily game on `today`.
    pub fn reveal(&self, game_id: Option<i64>, today: NaiveDate) -> GameResult<String> {
        Ok(self.catalog()?.resolve(None, game_id, today))
    }

    /// Target a request plays: explicit secret, then game id, then the daily word.
    pub fn target_for(
        &self,
        secret_override: Option<&str>,
        game_id: Option<i64>,
        today: NaiveDate,
    ) -> GameResult<String> {
        if let Some(secret) = secret_override.map(crate::words::normalize)
            && !secret.is_empty()
        {
            return Ok(secret);
        }
        self.reveal(game_id, today)
    }
}
