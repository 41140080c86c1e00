//! Memoized embeddings with a one-shot secondary-model retry.

use std::sync::Arc;

use futures_util::future::try_join;
use moka::sync::Cache;
use tracing::{debug, error, warn};

use super::error::{RankError, RankResult};
use crate::constants::{EMBEDDING_MEMO_CAPACITY, SECONDARY_EMBEDDING_MODEL};
use crate::provider::{ProviderResult, SimilarityProvider};

/// Embedding front-end shared by every resolve call.
///
/// The memo is keyed by `(model, text)` so vectors from different models are never mixed,
/// and is bounded at [`EMBEDDING_MEMO_CAPACITY`] entries.
pub struct EmbeddingService {
    provider: Arc<dyn SimilarityProvider>,
    primary_model: Option<String>,
    memo: Cache<(String, String), Arc<Vec<f32>>>,
}

impl std::fmt::Debug for EmbeddingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingService")
            .field("primary_model", &self.primary_model)
            .field("memo_entries", &self.memo.entry_count())
            .finish()
    }
}

impl EmbeddingService {
    pub fn new(provider: Arc<dyn SimilarityProvider>, primary_model: Option<String>) -> Self {
        Self::with_capacity(provider, primary_model, EMBEDDING_MEMO_CAPACITY)
    }

    pub fn with_capacity(
        provider: Arc<dyn SimilarityProvider>,
        primary_model: Option<String>,
        capacity: u64,
    ) -> Self {
        Self {
            provider,
            primary_model,
            memo: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Model tried first: the configured primary, or the secondary when none is set.
    pub fn primary_model(&self) -> &str {
        self.primary_model
            .as_deref()
            .unwrap_or(SECONDARY_EMBEDDING_MODEL)
    }

    /// Model retried after a primary failure, if it differs from the primary.
    pub fn secondary_model(&self) -> Option<&str> {
        (self.primary_model() != SECONDARY_EMBEDDING_MODEL).then_some(SECONDARY_EMBEDDING_MODEL)
    }

    /// Embeds `target` and `guess` with the same model.
    ///
    /// On any failure with the primary model both texts are retried once against the
    /// secondary model.
    pub async fn embed_pair(
        &self,
        target: &str,
        guess: &str,
    ) -> RankResult<(Arc<Vec<f32>>, Arc<Vec<f32>>)> {
        let primary = self.primary_model();

        let primary_err = match self.embed_pair_with(primary, target, guess).await {
            Ok(pair) => return Ok(pair),
            Err(e) => e,
        };

        let Some(secondary) = self.secondary_model() else {
            error!(model = primary, error = %primary_err, "Embedding failed");
            return Err(RankError::EmbeddingUnavailable {
                tried: primary.to_string(),
                reason: primary_err.to_string(),
            });
        };

        warn!(
            primary,
            secondary,
            error = %primary_err,
            "Primary embedding model failed; retrying with secondary"
        );

        self.embed_pair_with(secondary, target, guess)
            .await
            .map_err(|e| {
                error!(model = secondary, error = %e, "Secondary embedding also failed");
                RankError::EmbeddingUnavailable {
                    tried: format!("{}, {}", primary, secondary),
                    reason: format!("{}; {}", primary_err, e),
                }
            })
    }

    async fn embed_pair_with(
        &self,
        model: &str,
        target: &str,
        guess: &str,
    ) -> ProviderResult<(Arc<Vec<f32>>, Arc<Vec<f32>>)> {
        try_join(self.embed(model, target), self.embed(model, guess)).await
    }

    /// Embeds one text with `model`, consulting the memo first.
    pub async fn embed(&self, model: &str, text: &str) -> ProviderResult<Arc<Vec<f32>>> {
        let key = (model.to_string(), text.to_string());
        if let Some(vector) = self.memo.get(&key) {
            debug!(model, "Embedding memo hit");
            return Ok(vector);
        }

        let vector = Arc::new(self.provider.embed(model, text).await?);
        self.memo.insert(key, Arc::clone(&vector));
        Ok(vector)
    }

    /// Number of memoized vectors.
    pub fn memo_len(&self) -> u64 {
        self.memo.run_pending_tasks();
        self.memo.entry_count()
    }

    pub fn clear_memo(&self) {
        self.memo.invalidate_all();
    }
}
