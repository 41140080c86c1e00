use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::error::{ProviderError, ProviderResult};
use super::SimilarityProvider;
use crate::hashing::hash_target;

const MOCK_EMBEDDING_DIM: usize = 8;

/// In-memory provider with scripted responses, call counters and failure switches.
#[derive(Default)]
pub struct MockProvider {
    vectors: RwLock<HashMap<String, Vec<f32>>>,
    word_lists: RwLock<HashMap<String, String>>,
    hints: RwLock<HashMap<String, String>>,
    failing_models: RwLock<HashSet<String>>,
    embed_models: RwLock<Vec<String>>,
    generation_delay: RwLock<Option<Duration>>,
    fail_generation: AtomicBool,
    fail_hints: AtomicBool,
    embed_calls: AtomicUsize,
    generation_calls: AtomicUsize,
    hint_calls: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the embedding returned for `text` (by any model).
    pub fn set_vector(&self, text: &str, vector: Vec<f32>) {
        self.vectors.write().insert(text.to_string(), vector);
    }

    /// Scripts the raw word-list text returned for `target`.
    pub fn set_word_list(&self, target: &str, raw: &str) {
        self.word_lists
            .write()
            .insert(target.to_string(), raw.to_string());
    }

    /// Scripts the raw hint text returned for `target`.
    pub fn set_hint(&self, target: &str, raw: &str) {
        self.hints.write().insert(target.to_string(), raw.to_string());
    }

    /// Makes every embedding call against `model` fail.
    pub fn fail_model(&self, model: &str) {
        self.failing_models.write().insert(model.to_string());
    }

    pub fn set_fail_generation(&self, fail: bool) {
        self.fail_generation.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_hints(&self, fail: bool) {
        self.fail_hints.store(fail, Ordering::SeqCst);
    }

    /// Delays word-list generation, keeping it in flight for concurrency tests.
    pub fn set_generation_delay(&self, delay: Duration) {
        *self.generation_delay.write() = Some(delay);
    }

    pub fn embed_calls(&self) -> usize {
        self.embed_calls.load(Ordering::SeqCst)
    }

    pub fn generation_calls(&self) -> usize {
        self.generation_calls.load(Ordering::SeqCst)
    }

    pub fn hint_calls(&self) -> usize {
        self.hint_calls.load(Ordering::SeqCst)
    }

    /// Models requested by embedding calls, in call order.
    pub fn embed_models(&self) -> Vec<String> {
        self.embed_models.read().clone()
    }

    fn hashed_vector(text: &str) -> Vec<f32> {
        hash_target(text)
            .iter()
            .take(MOCK_EMBEDDING_DIM)
            .map(|b| *b as f32 - 127.5)
            .collect()
    }
}

#[async_trait]
impl SimilarityProvider for MockProvider {
    async fn embed(&self, model: &str, text: &str) -> ProviderResult<Vec<f32>> {
        self.embed_calls.fetch_add(1, Ordering::SeqCst);
        self.embed_models.write().push(model.to_string());

        if self.failing_models.read().contains(model) {
            return Err(ProviderError::Embedding {
                model: model.to_string(),
                reason: "mock model unavailable".to_string(),
            });
        }

        let scripted = self.vectors.read().get(text).cloned();
        Ok(scripted.unwrap_or_else(|| Self::hashed_vector(text)))
    }

    async fn generate_word_list(&self, target: &str, _count: usize) -> ProviderResult<String> {
        self.generation_calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.generation_delay.read();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_generation.load(Ordering::SeqCst) {
            return Err(ProviderError::Generation {
                reason: "mock generation failure".to_string(),
            });
        }

        self.word_lists
            .read()
            .get(target)
            .cloned()
            .ok_or(ProviderError::EmptyResponse)
    }

    async fn generate_hint(
        &self,
        target: &str,
        _current_best_guess: Option<&str>,
    ) -> ProviderResult<String> {
        self.hint_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_hints.load(Ordering::SeqCst) {
            return Err(ProviderError::Generation {
                reason: "mock hint failure".to_string(),
            });
        }

        self.hints
            .read()
            .get(target)
            .cloned()
            .ok_or(ProviderError::EmptyResponse)
    }
}
