//! Durable storage backends for the asset collection.
//!
//! The service layer treats storage as a flat bag of records: `load`
//! returns raw JSON values (validation and integrity filtering happen
//! above this seam) and `persist` replaces the whole collection.
//! Mutations are therefore read-modify-write over the full collection,
//! which keeps "every persisted record is schema-valid" enforceable at
//! the single write point, at O(n) per mutation.

mod local;
mod remote;

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::asset::Asset;

pub use local::LocalStore;
pub use remote::RemoteStore;

/// Errors from the lowest storage level. Messages from the hosted
/// backend are forwarded verbatim via the `Backend` variant.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read inventory file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write inventory file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Inventory file '{path}' is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request to '{url}' failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0}")]
    Backend(String),
}

/// Storage seam between the persistence service and a concrete backend.
///
/// `load` hands back untyped values on purpose: corrupted or stale
/// records must survive the read so the service can drop them silently
/// instead of failing the whole collection.
#[allow(async_fn_in_trait)]
pub trait AssetStore {
    async fn load(&self) -> Result<Vec<Value>, StoreError>;

    async fn persist(&self, assets: &[Asset]) -> Result<(), StoreError>;
}

/// Runtime-selected backend, chosen by configuration.
pub enum StoreBackend {
    Local(LocalStore),
    Remote(RemoteStore),
}

impl AssetStore for StoreBackend {
    async fn load(&self) -> Result<Vec<Value>, StoreError> {
        match self {
            StoreBackend::Local(store) => store.load().await,
            StoreBackend::Remote(store) => store.load().await,
        }
    }

    async fn persist(&self, assets: &[Asset]) -> Result<(), StoreError> {
        match self {
            StoreBackend::Local(store) => store.persist(assets).await,
            StoreBackend::Remote(store) => store.persist(assets).await,
        }
    }
}
