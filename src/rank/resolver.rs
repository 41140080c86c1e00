//! Tiered rank resolution: exact match, then the cached list, then embeddings.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::embedding::EmbeddingService;
use super::error::{RankError, RankResult};
use super::similarity::{cosine_similarity, fallback_rank, list_similarity, similarity_to_base_rank};
use super::types::{GuessResult, RankSource};
use crate::cache::WordListCache;
use crate::constants::{DEFAULT_ABSENT_LIST_SIZE, FIRST_LIST_RANK};
use crate::words::normalize;

/// Resolves a guess against a target.
///
/// List ranks always fall in `[2, N + 1]` for a list of length `N`; embedding ranks are
/// offset to start above `N + 1` (or above [`DEFAULT_ABSENT_LIST_SIZE`] + 1 without a
/// list), so a fallback rank can never tie or beat a list rank.
pub struct RankResolver {
    cache: Arc<WordListCache>,
    embeddings: EmbeddingService,
}

impl std::fmt::Debug for RankResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankResolver")
            .field("cache", &self.cache)
            .field("embeddings", &self.embeddings)
            .finish()
    }
}

impl RankResolver {
    pub fn new(cache: Arc<WordListCache>, embeddings: EmbeddingService) -> Self {
        Self { cache, embeddings }
    }

    pub fn cache(&self) -> &Arc<WordListCache> {
        &self.cache
    }

    pub fn embeddings(&self) -> &EmbeddingService {
        &self.embeddings
    }

    #[instrument(skip_all, fields(guess_len = guess.len()))]
    pub async fn resolve(&self, guess: &str, target: &str) -> RankResult<GuessResult> {
        let guess = normalize(guess);
        let target = normalize(target);

        if guess.is_empty() {
            return Err(RankError::EmptyGuess);
        }
        if target.is_empty() {
            return Err(RankError::EmptyTarget);
        }

        if guess == target {
            debug!("Exact match");
            return Ok(GuessResult::exact(guess));
        }

        let list = self.cache.get_ranked_list(&target).await.into_list();

        if let Some(list) = &list
            && let Some(index) = list.position(&guess)
        {
            let rank = index as u64 + FIRST_LIST_RANK;
            debug!(rank, "List hit");
            return Ok(GuessResult {
                word: guess,
                rank,
                similarity: list_similarity(index),
                cached: true,
                source: RankSource::List,
            });
        }

        let (target_vec, guess_vec) = self.embeddings.embed_pair(&target, &guess).await?;
        if target_vec.len() != guess_vec.len() {
            return Err(RankError::DimensionMismatch {
                target: target_vec.len(),
                guess: guess_vec.len(),
            });
        }

        let similarity = cosine_similarity(&target_vec, &guess_vec);
        let list_size = list.as_ref().map_or(DEFAULT_ABSENT_LIST_SIZE, |l| l.len());
        let rank = fallback_rank(similarity_to_base_rank(similarity), list_size);

        info!(rank, similarity, list_size, "Embedding fallback rank");

        Ok(GuessResult {
            word: guess,
            rank,
            similarity,
            cached: false,
            source: RankSource::Embedding,
        })
    }
}
