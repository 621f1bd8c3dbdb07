//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;

use nexus_inventory::asset::{Asset, Category, NewAsset};
use nexus_inventory::store::{AssetStore, LocalStore, StoreError};

/// Create a file-backed store in a fresh temp dir. The dir guard must
/// stay alive for the duration of the test.
pub fn temp_store() -> (TempDir, LocalStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = LocalStore::new(dir.path().join("assets.json"));
    (dir, store)
}

/// Path of the data file inside a temp dir, for direct inspection.
pub fn data_path(dir: &TempDir) -> PathBuf {
    dir.path().join("assets.json")
}

/// Minimal valid registration input.
pub fn input(name: &str, category: Category, value: f64) -> NewAsset {
    NewAsset {
        name: name.to_string(),
        category: Some(category),
        value,
        ..NewAsset::default()
    }
}

/// Read the raw persisted collection, bypassing the service layer.
pub fn raw_records(dir: &TempDir) -> Vec<Value> {
    let content = std::fs::read_to_string(data_path(dir)).unwrap_or_else(|_| "[]".to_string());
    serde_json::from_str(&content).expect("data file is not valid JSON")
}

/// Store whose every operation fails with a fixed backend message.
pub struct FailingStore {
    pub message: String,
}

impl FailingStore {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl AssetStore for FailingStore {
    async fn load(&self) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Backend(self.message.clone()))
    }

    async fn persist(&self, _assets: &[Asset]) -> Result<(), StoreError> {
        Err(StoreError::Backend(self.message.clone()))
    }
}
