use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use super::error::{StorageError, StorageResult};
use super::model::RankedWordList;
use super::ListStore;

/// In-memory [`ListStore`] for tests; can simulate corrupt records.
#[derive(Default, Clone)]
pub struct MemoryListStore {
    entries: Arc<RwLock<HashMap<String, RankedWordList>>>,
    corrupt: Arc<RwLock<Vec<String>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, list: RankedWordList) {
        self.entries.write().insert(list.target().to_string(), list);
    }

    /// Marks `target`'s record as unreadable until it is stored again.
    pub fn mark_corrupt(&self, target: &str) {
        self.corrupt.write().push(target.to_string());
    }

    pub fn get(&self, target: &str) -> Option<RankedWordList> {
        self.entries.read().get(target).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Number of successful `store` calls.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl ListStore for MemoryListStore {
    fn load(&self, target: &str) -> StorageResult<Option<RankedWordList>> {
        if self.corrupt.read().iter().any(|t| t == target) {
            return Err(StorageError::Corrupt {
                path: target.into(),
                reason: "marked corrupt".to_string(),
            });
        }
        Ok(self.get(target))
    }

    fn store(&self, list: &RankedWordList) -> StorageResult<()> {
        self.corrupt.write().retain(|t| t != list.target());
        self.insert(list.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, target: &str) -> StorageResult<bool> {
        Ok(self.entries.write().remove(target).is_some())
    }
}
