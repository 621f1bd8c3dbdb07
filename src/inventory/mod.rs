//! In-session inventory state.
//!
//! `Inventory` owns the canonical in-memory collection for the current
//! session and exposes the mutation surface the UI consumes. Mutations
//! trust the service's returned canonical record instead of refetching
//! the whole collection; concurrent mutations are not serialized
//! against each other, so the last full-collection persist wins.

mod filter;

use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::asset::{Asset, AssetPatch, NewAsset};
use crate::service::AssetService;
use crate::store::AssetStore;

pub use filter::{filter_assets, CategoryFilter, FilterState};

/// Observable state consumed by the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryState {
    pub assets: Vec<Asset>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for InventoryState {
    fn default() -> Self {
        // Initial state: loading until the first refresh lands.
        Self {
            assets: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

/// Cheaply cloneable controller handle.
///
/// Allows multiple readers to observe state concurrently while
/// mutations update it atomically.
pub struct Inventory<S> {
    service: Arc<AssetService<S>>,
    state: Arc<RwLock<InventoryState>>,
}

// Hand-written so cloning the handle never requires the store itself
// to be Clone.
impl<S> Clone for Inventory<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: AssetStore> Inventory<S> {
    pub fn new(service: AssetService<S>) -> Self {
        Self {
            service: Arc::new(service),
            state: Arc::new(RwLock::new(InventoryState::default())),
        }
    }

    /// Get a snapshot of the current state.
    ///
    /// This is cheap for inventory-scale collections because
    /// `InventoryState` is Clone.
    pub fn state(&self) -> InventoryState {
        self.state.read().expect("inventory lock poisoned").clone()
    }

    fn update_state(&self, f: impl FnOnce(&mut InventoryState)) {
        let mut guard = self.state.write().expect("inventory lock poisoned");
        f(&mut guard);
    }

    /// Load the collection from storage, replacing the in-memory copy.
    /// On failure the collection is emptied and the error surfaced.
    pub async fn refresh(&self) {
        self.update_state(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.service.get_assets().await;

        self.update_state(|s| {
            match result {
                Ok(assets) => s.assets = assets,
                Err(err) => {
                    s.error = Some(err.to_string());
                    s.assets = Vec::new();
                }
            }
            s.loading = false;
        });
    }

    /// Register a new asset. On success the service's canonical record
    /// is appended without a refetch. Returns a success flag for caller
    /// flow control (e.g. leaving the registration form).
    pub async fn add_asset(&self, input: NewAsset) -> bool {
        self.update_state(|s| {
            s.loading = true;
            s.error = None;
        });

        let result = self.service.save_asset(input).await;

        match result {
            Ok(asset) => {
                self.update_state(|s| {
                    s.assets.push(asset);
                    s.loading = false;
                });
                true
            }
            Err(err) => {
                self.update_state(|s| {
                    s.error = Some(err.to_string());
                    s.loading = false;
                });
                false
            }
        }
    }

    /// Apply a partial update. On success the matching record is
    /// replaced by identity match on id; on failure the collection is
    /// left untouched and the error surfaced.
    pub async fn update_asset(&self, id: Uuid, patch: AssetPatch) -> bool {
        match self.service.update_asset(id, patch).await {
            Ok(updated) => {
                self.update_state(|s| {
                    if let Some(slot) = s.assets.iter_mut().find(|a| a.id == id) {
                        *slot = updated;
                    }
                });
                true
            }
            Err(err) => {
                self.update_state(|s| s.error = Some(err.to_string()));
                false
            }
        }
    }

    /// Delete by id, removing the matching record on success.
    pub async fn delete_asset(&self, id: Uuid) -> bool {
        match self.service.delete_asset(id).await {
            Ok(()) => {
                self.update_state(|s| s.assets.retain(|a| a.id != id));
                true
            }
            Err(err) => {
                self.update_state(|s| s.error = Some(err.to_string()));
                false
            }
        }
    }

    /// Clear a surfaced error, the "dismiss banner" action.
    pub fn dismiss_error(&self) {
        self.update_state(|s| s.error = None);
    }
}
