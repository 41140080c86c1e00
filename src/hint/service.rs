//! Hint serving: list selection first, generative fallback second.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument, warn};

use super::error::{HintError, HintResult};
use super::selector::HintSelector;
use super::types::{Difficulty, Hint, HintSource};
use crate::cache::WordListCache;
use crate::constants::SAFE_DEFAULT_HINT;
use crate::provider::SimilarityProvider;
use crate::words::{clean_generated_word, normalize};

pub struct HintService {
    cache: Arc<WordListCache>,
    provider: Arc<dyn SimilarityProvider>,
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for HintService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HintService")
            .field("cache", &self.cache)
            .finish()
    }
}

impl HintService {
    pub fn new(cache: Arc<WordListCache>, provider: Arc<dyn SimilarityProvider>) -> Self {
        Self::with_rng(cache, provider, StdRng::from_entropy())
    }

    /// Creates a service with an explicit random source (hard-difficulty picks).
    pub fn with_rng(
        cache: Arc<WordListCache>,
        provider: Arc<dyn SimilarityProvider>,
        rng: StdRng,
    ) -> Self {
        Self {
            cache,
            provider,
            rng: Mutex::new(rng),
        }
    }

    /// Serves a hint for `target` given the player's best guess so far.
    ///
    /// Uses the ranked list when one is ready and can improve on the player; otherwise asks
    /// the provider for a related word, falling back to a fixed safe word on failure.
    #[instrument(
        skip_all,
        fields(difficulty = %difficulty, has_guess = current_best_guess.is_some())
    )]
    pub async fn hint(
        &self,
        target: &str,
        current_best_guess: Option<&str>,
        difficulty: Difficulty,
    ) -> HintResult<Hint> {
        let target = normalize(target);
        if target.is_empty() {
            return Err(HintError::EmptyTarget);
        }

        let best = current_best_guess
            .map(normalize)
            .filter(|g| !g.is_empty());

        if let Some(list) = self.cache.get_ranked_list(&target).await.into_list() {
            let picked = {
                let mut rng = self.rng.lock();
                HintSelector::select_word(&list, best.as_deref(), difficulty, &mut *rng)
                    .map(|(index, word)| (index, word.to_string()))
            };

            if let Some((index, word)) = picked {
                debug!(index, "Serving list hint");
                return Ok(Hint {
                    hint: word,
                    source: HintSource::List { index },
                });
            }
            debug!("List cannot improve on best guess; generating hint");
        }

        Ok(self.generate(&target, best.as_deref()).await)
    }

    async fn generate(&self, target: &str, best: Option<&str>) -> Hint {
        let fallback = Hint {
            hint: SAFE_DEFAULT_HINT.to_string(),
            source: HintSource::Default,
        };

        let raw = match self.provider.generate_hint(target, best).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Hint generation failed; using default");
                return fallback;
            }
        };

        let word = clean_generated_word(&raw);
        if word.is_empty() || normalize(&word) == target {
            warn!("Generated hint unusable; using default");
            return fallback;
        }

        Hint {
            hint: word,
            source: HintSource::Generated,
        }
    }
}
