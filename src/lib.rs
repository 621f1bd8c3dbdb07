//! Asset inventory manager: register, list, filter, update and delete
//! equipment records, backed by a local JSON file or a hosted backend,
//! gated by email/password authentication.
//!
//! # Architecture
//!
//! ```text
//! view ──→ Inventory ──→ AssetService ──→ AssetStore (local | remote)
//!              │               │
//!        InventoryState   asset schema
//! ```
//!
//! The [`inventory::Inventory`] controller owns the in-session
//! collection; [`service::AssetService`] performs schema-guarded
//! read-modify-write persistence; [`store`] holds the durable copy.

pub mod asset;
pub mod auth;
pub mod config;
pub mod inventory;
pub mod logging;
pub mod service;
pub mod store;
