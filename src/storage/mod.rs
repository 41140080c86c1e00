//! Durable word-list storage.
//!
//! - [`RankedWordList`] is the on-disk record.
//! - [`DiskListStore`] keeps one `rkyv` file per target, replaced atomically.

/// Storage error types.
pub mod error;
/// Disk-backed storage implementation.
pub mod disk;
#[cfg(any(test, feature = "mock"))]
pub mod memory;
mod model;


pub use disk::DiskListStore;
pub use error::{StorageError, StorageResult};
#[cfg(any(test, feature = "mock"))]
pub use memory::MemoryListStore;
pub use model::{ArchivedRankedWordList, RankedWordList};

/// Whole-record persistence of ranked lists keyed by normalized target.
///
/// Implementations must never expose a partially written record: a `load` observes either
/// the previous record or the new one.
pub trait ListStore: Send + Sync + 'static {
    /// Loads the record for `target`. `Ok(None)` when nothing was ever stored.
    fn load(&self, target: &str) -> StorageResult<Option<RankedWordList>>;

    /// Replaces the record for `list.target()`.
    fn store(&self, list: &RankedWordList) -> StorageResult<()>;

    /// Deletes the record for `target`, returning whether one existed.
    fn remove(&self, target: &str) -> StorageResult<bool>;
}
