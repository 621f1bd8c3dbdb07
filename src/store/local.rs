//! Local persistent storage: one JSON file holding the serialized
//! asset array, the on-disk analogue of a single key-value blob.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::Value;

use crate::asset::Asset;
use crate::store::{AssetStore, StoreError};

/// File-backed store. Reads tolerate a missing file (empty collection);
/// writes take an exclusive file lock so overlapping writers from other
/// processes cannot interleave (single-writer discipline).
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default data file under the platform data directory,
    /// `~/.local/share/nexus-inventory/assets.json` on Linux.
    /// Falls back to the current directory if data_dir is unavailable.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("nexus-inventory").join("assets.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssetStore for LocalStore {
    async fn load(&self) -> Result<Vec<Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        // An empty file reads as an empty collection rather than a
        // parse error, so a freshly-created file is usable.
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    async fn persist(&self, assets: &[Asset]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }

        let write_err = |e: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source: e,
        };

        let serialized =
            serde_json::to_vec_pretty(assets).map_err(|e| StoreError::Write {
                path: self.path.clone(),
                source: std::io::Error::other(e),
            })?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(write_err)?;

        // Lock before truncating so a concurrent writer never observes
        // a half-written collection.
        file.lock_exclusive().map_err(write_err)?;
        file.set_len(0).map_err(write_err)?;
        file.write_all(&serialized).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
        fs2::FileExt::unlock(&file).map_err(write_err)?;

        tracing::debug!(count = assets.len(), path = %self.path.display(), "persisted inventory");
        Ok(())
    }
}
