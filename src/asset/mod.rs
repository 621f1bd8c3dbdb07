//! Asset record shape and schema validation.

mod schema;
mod types;

pub use schema::{parse_new, revalidate, ValidationError, Violation};
pub use types::{Asset, AssetPatch, AssetStatus, Category, NewAsset};
