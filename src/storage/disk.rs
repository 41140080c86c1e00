//! Disk-backed word-list storage (one file per target).

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use rkyv::rancor::Error as RkyvError;
use rkyv::util::AlignedVec;
use rkyv::{from_bytes, to_bytes};

use super::error::{StorageError, StorageResult};
use super::model::RankedWordList;
use super::ListStore;
use crate::hashing::target_storage_key;

const RKYV_EXTENSION: &str = "rkyv";

const TEMP_EXTENSION: &str = "rkyv.tmp";

#[derive(Debug, Clone)]
/// Stores [`RankedWordList`] records under a root directory, keyed by target hash.
pub struct DiskListStore {
    storage_path: PathBuf,
}

impl DiskListStore {
    /// Creates a store rooted at `storage_path`.
    pub fn new(storage_path: PathBuf) -> Self {
        Self { storage_path }
    }

    /// Returns the root storage directory.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Ensures the root storage directory exists.
    pub fn ensure_storage_path(&self) -> StorageResult<()> {
        if !self.storage_path.exists() {
            fs::create_dir_all(&self.storage_path).map_err(|_| {
                StorageError::StorageUnavailable {
                    path: self.storage_path.clone(),
                }
            })?;
        }
        Ok(())
    }

    /// Path of the record for a normalized target.
    pub fn entry_path(&self, target: &str) -> PathBuf {
        self.storage_path
            .join(format!("{}.{}", target_storage_key(target), RKYV_EXTENSION))
    }

    fn temp_entry_path(&self, target: &str) -> PathBuf {
        self.storage_path
            .join(format!("{}.{}", target_storage_key(target), TEMP_EXTENSION))
    }

    /// Counts persisted records.
    pub fn count(&self) -> StorageResult<usize> {
        if !self.storage_path.exists() {
            return Ok(0);
        }

        let mut count = 0;
        for entry in fs::read_dir(&self.storage_path)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == RKYV_EXTENSION) {
                count += 1;
            }
        }
        Ok(count)
    }
}

impl ListStore for DiskListStore {
    fn load(&self, target: &str) -> StorageResult<Option<RankedWordList>> {
        let path = self.entry_path(target);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let mut aligned = AlignedVec::<16>::with_capacity(bytes.len());
        aligned.extend_from_slice(&bytes);

        let list = from_bytes::<RankedWordList, RkyvError>(&aligned).map_err(|e| {
            StorageError::Corrupt {
                path: path.clone(),
                reason: e.to_string(),
            }
        })?;

        if list.target() != target {
            return Err(StorageError::Corrupt {
                path,
                reason: format!("record belongs to '{}'", list.target()),
            });
        }

        if let Some(reason) = list.invariant_violation() {
            return Err(StorageError::Corrupt { path, reason });
        }

        Ok(Some(list))
    }

    fn store(&self, list: &RankedWordList) -> StorageResult<()> {
        self.ensure_storage_path()?;

        let bytes =
            to_bytes::<RkyvError>(list).map_err(|e| StorageError::Serialization(e.to_string()))?;

        let temp_path = self.temp_entry_path(list.target());
        let final_path = self.entry_path(list.target());

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }

    fn remove(&self, target: &str) -> StorageResult<bool> {
        let path = self.entry_path(target);

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        Ok(true)
    }
}
