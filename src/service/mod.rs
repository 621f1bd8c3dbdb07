//! Persistence service: schema-guarded CRUD over an asset store.
//!
//! Every mutation is read-modify-write against the whole collection.
//! Writes only ever commit schema-valid records; reads drop invalid
//! records silently, trading completeness for integrity so corrupted
//! or stale storage never wedges the application.

mod outcome;

use serde_json::Value;
use uuid::Uuid;

use crate::asset::{self, Asset, AssetPatch, NewAsset};
use crate::store::AssetStore;

pub use outcome::{normalize, ServiceError, ServiceResult};

pub struct AssetService<S> {
    store: S,
}

impl<S: AssetStore> AssetService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the stored collection, keeping only records that still
    /// satisfy the schema. Fails only on the lowest-level storage read.
    pub async fn get_assets(&self) -> ServiceResult<Vec<Asset>> {
        let raw = self.store.load().await?;
        let total = raw.len();

        let assets: Vec<Asset> = raw.into_iter().filter_map(keep_valid).collect();

        if assets.len() < total {
            tracing::warn!(
                dropped = total - assets.len(),
                kept = assets.len(),
                "dropped records failing schema validation on read"
            );
        }
        Ok(assets)
    }

    /// Validate registration input, append the resulting record and
    /// persist the whole collection. Returns the canonical created
    /// record with generated id and defaults resolved.
    pub async fn save_asset(&self, input: NewAsset) -> ServiceResult<Asset> {
        let asset = asset::parse_new(input)?;

        let mut assets = self.get_assets().await?;
        assets.push(asset.clone());
        self.store.persist(&assets).await?;

        tracing::info!(id = %asset.id, name = %asset.name, "asset created");
        Ok(asset)
    }

    /// Merge `patch` onto the record with `id`, re-validate the merged
    /// result, persist and return it. An update that would leave the
    /// record invalid is rejected without touching storage.
    pub async fn update_asset(&self, id: Uuid, patch: AssetPatch) -> ServiceResult<Asset> {
        let mut assets = self.get_assets().await?;
        let slot = assets
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(ServiceError::NotFound { id })?;

        let merged = patch.apply_to(slot);
        asset::revalidate(&merged)?;

        *slot = merged.clone();
        self.store.persist(&assets).await?;

        tracing::info!(id = %id, "asset updated");
        Ok(merged)
    }

    /// Remove the record with `id` and persist the reduced collection.
    /// Not-found is detected by the collection length staying unchanged
    /// after filtering.
    pub async fn delete_asset(&self, id: Uuid) -> ServiceResult<()> {
        let assets = self.get_assets().await?;
        let kept: Vec<Asset> = assets.iter().filter(|a| a.id != id).cloned().collect();

        if kept.len() == assets.len() {
            return Err(ServiceError::NotFound { id });
        }

        self.store.persist(&kept).await?;
        tracing::info!(id = %id, "asset deleted");
        Ok(())
    }
}

/// Deserialize and re-check a raw stored value, discarding it on any
/// failure. The discard is deliberate integrity self-healing, not an
/// error path.
fn keep_valid(raw: Value) -> Option<Asset> {
    match serde_json::from_value::<Asset>(raw) {
        Ok(asset) if asset::revalidate(&asset).is_ok() => Some(asset),
        _ => None,
    }
}
