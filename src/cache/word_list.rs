//! Ranked word-list cache: in-memory hot layer over durable storage, with single-flight
//! background generation on miss.

use std::sync::Arc;

use moka::sync::Cache;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument, warn};

use super::error::{CacheError, CacheResult};
use super::inflight::{InflightGuard, InflightRegistry};
use super::types::{ListLookup, ListSource};
use crate::constants::{DEFAULT_HOT_LIST_CAPACITY, DEFAULT_LIST_REQUEST_COUNT};
use crate::provider::SimilarityProvider;
use crate::storage::{ListStore, RankedWordList, StorageError};
use crate::words::{normalize, parse_word_list};

/// Tuning for [`WordListCache`].
#[derive(Debug, Clone)]
pub struct WordListCacheConfig {
    /// Words requested per generation call.
    pub list_size: usize,
    /// Max lists kept in memory.
    pub hot_capacity: u64,
}

impl Default for WordListCacheConfig {
    fn default() -> Self {
        Self {
            list_size: DEFAULT_LIST_REQUEST_COUNT,
            hot_capacity: DEFAULT_HOT_LIST_CAPACITY,
        }
    }
}

impl WordListCacheConfig {
    pub fn with_list_size(list_size: usize) -> Self {
        Self {
            list_size,
            ..Default::default()
        }
    }
}

/// Everything a generation run needs, cloned into the spawned task.
#[derive(Clone)]
struct Generator {
    hot: Cache<String, Arc<RankedWordList>>,
    store: Arc<dyn ListStore>,
    provider: Arc<dyn SimilarityProvider>,
    list_size: usize,
}

impl Generator {
    async fn run(&self, target: &str) -> CacheResult<Arc<RankedWordList>> {
        info!(target_word = %target, count = self.list_size, "Generating ranked word list");

        let raw = self
            .provider
            .generate_word_list(target, self.list_size)
            .await?;

        let words = parse_word_list(&raw, target);
        if words.is_empty() {
            return Err(CacheError::EmptyList {
                target: target.to_string(),
            });
        }

        let list = Arc::new(RankedWordList::new(
            target,
            words,
            chrono::Utc::now().timestamp(),
        ));

        let store = Arc::clone(&self.store);
        let to_store = Arc::clone(&list);
        tokio::task::spawn_blocking(move || store.store(&to_store))
            .await
            .map_err(|e| CacheError::Task(e.to_string()))??;

        self.hot.insert(target.to_string(), Arc::clone(&list));
        info!(target_word = %target, words = list.len(), "Generated and cached word list");

        Ok(list)
    }

    async fn run_guarded(&self, guard: InflightGuard) -> CacheResult<Arc<RankedWordList>> {
        let result = self.run(guard.target()).await;
        if let Err(ref e) = result {
            error!(target_word = %guard.target(), error = %e, "Failed to generate word list");
        }
        drop(guard);
        result
    }
}

/// Serves per-target ranked lists without blocking on generation.
pub struct WordListCache {
    generator: Generator,
    inflight: Arc<InflightRegistry>,
    tasks: Mutex<JoinSet<()>>,
}

impl std::fmt::Debug for WordListCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordListCache")
            .field("hot_entries", &self.generator.hot.entry_count())
            .field("inflight", &self.inflight.len())
            .field("list_size", &self.generator.list_size)
            .finish()
    }
}

impl WordListCache {
    pub fn new(
        store: Arc<dyn ListStore>,
        provider: Arc<dyn SimilarityProvider>,
        config: WordListCacheConfig,
    ) -> Self {
        Self {
            generator: Generator {
                hot: Cache::builder().max_capacity(config.hot_capacity).build(),
                store,
                provider,
                list_size: config.list_size,
            },
            inflight: InflightRegistry::new(),
            tasks: Mutex::new(JoinSet::new()),
        }
    }

    /// Returns the list for `target`, or [`ListLookup::Pending`] after starting generation.
    ///
    /// Never waits on the provider; storage reads run on the blocking pool. Concurrent misses
    /// for one target start exactly one generation, and every caller sees `Pending` until that
    /// run has persisted its result.
    #[instrument(skip_all, fields(target_word = %target))]
    pub async fn get_ranked_list(&self, target: &str) -> ListLookup {
        let target = normalize(target);
        if target.is_empty() {
            return ListLookup::Pending;
        }

        if let Some((list, source)) = self.lookup(&target).await {
            debug!(source = %source, words = list.len(), "Word list hit");
            return ListLookup::Ready(list);
        }

        self.trigger_generation(&target);
        ListLookup::Pending
    }

    /// Returns the list without triggering generation.
    pub async fn peek(&self, target: &str) -> Option<Arc<RankedWordList>> {
        self.lookup(&normalize(target)).await.map(|(list, _)| list)
    }

    /// Returns the cached list, generating and awaiting it on a miss.
    pub async fn get_or_generate(&self, target: &str) -> CacheResult<Arc<RankedWordList>> {
        let target = normalize(target);
        if let Some((list, _)) = self.lookup(&target).await {
            return Ok(list);
        }
        self.regenerate(&target).await
    }

    /// Generates and persists a fresh list for `target`, replacing any existing one.
    pub async fn regenerate(&self, target: &str) -> CacheResult<Arc<RankedWordList>> {
        let target = normalize(target);
        let guard = self
            .inflight
            .try_register(&target)
            .ok_or_else(|| CacheError::InFlight {
                target: target.clone(),
            })?;

        self.generator.run_guarded(guard).await
    }

    /// Starts background generation unless one is already running for `target`.
    ///
    /// Returns `true` when a new generation was started. The task is tracked until
    /// [`WordListCache::drain`] joins it.
    pub fn trigger_generation(&self, target: &str) -> bool {
        let target = normalize(target);
        let Some(guard) = self.inflight.try_register(&target) else {
            debug!(target_word = %target, "Generation already in flight");
            return false;
        };

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!(target_word = %target, error = %e, "No async runtime; skipping generation");
                return false;
            }
        };

        let generator = self.generator.clone();
        let mut tasks = self.tasks.lock();
        while tasks.try_join_next().is_some() {}
        tasks.spawn_on(
            async move {
                let _ = generator.run_guarded(guard).await;
            },
            &runtime,
        );
        true
    }

    /// Waits for every background generation started so far, including ones started while
    /// draining. Call before the runtime shuts down so finished lists reach storage.
    pub async fn drain(&self) {
        loop {
            let mut tasks = std::mem::take(&mut *self.tasks.lock());
            if tasks.is_empty() {
                return;
            }

            debug!(tasks = tasks.len(), "Draining background generations");
            while let Some(result) = tasks.join_next().await {
                if let Err(e) = result {
                    warn!(error = %e, "Background generation task did not complete");
                }
            }
        }
    }

    /// Number of tracked background generations that have not been joined yet.
    pub fn pending_tasks(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Returns `true` while generation for `target` is running.
    pub fn is_generating(&self, target: &str) -> bool {
        self.inflight.contains(&normalize(target))
    }

    /// Drops `target` from memory and storage.
    pub fn invalidate(&self, target: &str) -> CacheResult<bool> {
        let target = normalize(target);
        self.generator.hot.invalidate(&target);
        Ok(self.generator.store.remove(&target)?)
    }

    /// Number of lists currently held in memory.
    pub fn hot_len(&self) -> u64 {
        self.generator.hot.run_pending_tasks();
        self.generator.hot.entry_count()
    }

    async fn lookup(&self, target: &str) -> Option<(Arc<RankedWordList>, ListSource)> {
        if let Some(list) = self.generator.hot.get(target) {
            return Some((list, ListSource::Memory));
        }

        let store = Arc::clone(&self.generator.store);
        let key = target.to_string();
        let loaded = match tokio::task::spawn_blocking(move || store.load(&key)).await {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(target_word = %target, error = %e, "Storage read task failed");
                return None;
            }
        };

        match loaded {
            Ok(Some(list)) => {
                let list = Arc::new(list);
                self.generator
                    .hot
                    .insert(target.to_string(), Arc::clone(&list));
                Some((list, ListSource::Storage))
            }
            Ok(None) => None,
            Err(StorageError::Corrupt { path, reason }) => {
                warn!(
                    target_word = %target,
                    path = %path.display(),
                    reason = %reason,
                    "Corrupt word list; regenerating"
                );
                None
            }
            Err(e) => {
                warn!(
                    target_word = %target,
                    error = %e,
                    "Failed to read word list; treating as miss"
                );
                None
            }
        }
    }
}
