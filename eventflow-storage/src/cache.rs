//! File-backed collection store.

use crate::error::StorageResult;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Key-value store holding one JSON-serialized collection per key.
///
/// Each key maps to `<key>.json` under the cache directory. The store is
/// single-writer: the synchronizer owns all mutation, so write-then-rename
/// is enough to keep a reader from observing a torn file.
#[derive(Debug, Clone)]
pub struct LocalCache {
    dir: PathBuf,
}

impl LocalCache {
    /// Opens a cache rooted at `dir`, creating the directory if needed.
    ///
    /// Creation failure is logged and swallowed; writes will keep failing
    /// (and being swallowed) until the directory becomes available.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(err) = fs::create_dir_all(&dir) {
            warn!("failed to create cache directory {}: {err}", dir.display());
        }
        Self { dir }
    }

    /// Reads the collection stored under `key`.
    ///
    /// A missing entry is an empty collection. Corrupt or unreadable data
    /// also degrades to empty, with the cause logged.
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_read(key) {
            Ok(records) => records,
            Err(err) => {
                warn!("cache read for {key} failed, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Overwrites the collection stored under `key`.
    ///
    /// Best-effort: failures (e.g. the device is out of space) are logged
    /// and swallowed.
    pub fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) {
        if let Err(err) = self.try_write(key, records) {
            warn!("cache write for {key} failed: {err}");
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn try_read<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Vec<T>> {
        let path = self.entry_path(key);
        if !path.exists() {
            debug!("no cache entry for {key}");
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn try_write<T: Serialize>(&self, key: &str, records: &[T]) -> StorageResult<()> {
        let path = self.entry_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(records)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
