mod common;

use serde_json::json;
use uuid::Uuid;

use nexus_inventory::asset::{AssetPatch, AssetStatus, Category};
use nexus_inventory::service::{AssetService, ServiceError};
use nexus_inventory::store::AssetStore;

use common::{input, raw_records, temp_store};

/// A saved asset comes back from a subsequent read, equal to the
/// record `save_asset` returned.
#[tokio::test]
async fn save_then_get_round_trips() {
    let (dir, store) = temp_store();
    let service = AssetService::new(store);

    let saved = service
        .save_asset(input("MacBook Pro", Category::Laptop, 1999.0))
        .await
        .unwrap();

    let assets = service.get_assets().await.unwrap();
    assert_eq!(assets, vec![saved]);
    drop(dir);
}

#[tokio::test]
async fn save_applies_schema_defaults() {
    let (_dir, store) = temp_store();
    let service = AssetService::new(store);

    let saved = service
        .save_asset(input("Monitor 4K", Category::Monitor, 450.99))
        .await
        .unwrap();

    assert!(!saved.id.is_nil());
    assert_eq!(saved.status, AssetStatus::Active);
    let age = chrono::Utc::now() - saved.purchase_date;
    assert!(age.num_seconds() < 5, "purchase date should default to now");
}

/// A name shorter than 3 characters is rejected and the stored
/// collection is left untouched.
#[tokio::test]
async fn save_rejects_short_name_without_mutating_storage() {
    let (dir, store) = temp_store();
    let service = AssetService::new(store);

    let err = service
        .save_asset(input("ab", Category::Laptop, 100.0))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(err.to_string().contains("Name must be at least 3 characters"));
    assert!(raw_records(&dir).is_empty());
}

/// An update that would leave the record invalid is rejected and the
/// stored record keeps its previous value.
#[tokio::test]
async fn update_revalidates_merged_record() {
    let (_dir, store) = temp_store();
    let service = AssetService::new(store);

    let saved = service
        .save_asset(input("Office Chair", Category::Furniture, 80.0))
        .await
        .unwrap();

    let err = service
        .update_asset(
            saved.id,
            AssetPatch {
                value: Some(-5.0),
                ..AssetPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let assets = service.get_assets().await.unwrap();
    assert_eq!(assets[0].value, 80.0);
}

#[tokio::test]
async fn update_merges_partial_fields() {
    let (_dir, store) = temp_store();
    let service = AssetService::new(store);

    let saved = service
        .save_asset(input("Rack Server", Category::Server, 3200.0))
        .await
        .unwrap();

    let updated = service
        .update_asset(
            saved.id,
            AssetPatch {
                status: Some(AssetStatus::Maintenance),
                ..AssetPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, AssetStatus::Maintenance);
    // Everything else is carried over unchanged, id included.
    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.name, saved.name);
    assert_eq!(updated.value, saved.value);
    assert_eq!(updated.purchase_date, saved.purchase_date);
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let (_dir, store) = temp_store();
    let service = AssetService::new(store);

    let err = service
        .update_asset(Uuid::new_v4(), AssetPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

/// Deleting a non-existent id fails with NotFound and leaves the
/// collection length unchanged.
#[tokio::test]
async fn delete_unknown_id_leaves_collection_intact() {
    let (_dir, store) = temp_store();
    let service = AssetService::new(store);

    service
        .save_asset(input("iPhone", Category::Smartphone, 900.0))
        .await
        .unwrap();

    let err = service.delete_asset(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
    assert_eq!(service.get_assets().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_the_record() {
    let (_dir, store) = temp_store();
    let service = AssetService::new(store);

    let saved = service
        .save_asset(input("Spare Tablet", Category::Tablet, 250.0))
        .await
        .unwrap();

    service.delete_asset(saved.id).await.unwrap();
    assert!(service.get_assets().await.unwrap().is_empty());
}

/// Records failing schema validation are dropped silently on read
/// instead of failing the whole collection.
#[tokio::test]
async fn get_assets_drops_invalid_records_silently() {
    let (dir, store) = temp_store();

    let valid = json!({
        "id": Uuid::new_v4(),
        "name": "Test Laptop",
        "category": "laptop",
        "value": 1500.0,
        "status": "active",
        "purchaseDate": "2023-01-01T00:00:00Z",
    });
    // Negative value; parses but fails constraint re-check.
    let constraint_violation = json!({
        "id": Uuid::new_v4(),
        "name": "Broken Asset",
        "category": "laptop",
        "value": -3.0,
        "status": "active",
        "purchaseDate": "2023-01-01T00:00:00Z",
    });
    // Not even the right shape.
    let garbage = json!({ "hello": "world" });

    std::fs::write(
        common::data_path(&dir),
        serde_json::to_vec(&vec![valid, constraint_violation, garbage]).unwrap(),
    )
    .unwrap();

    let service = AssetService::new(store);
    let assets = service.get_assets().await.unwrap();

    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].name, "Test Laptop");
}

#[tokio::test]
async fn missing_data_file_reads_as_empty_collection() {
    let (_dir, store) = temp_store();
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn corrupt_data_file_is_a_storage_error() {
    let (dir, store) = temp_store();
    std::fs::write(common::data_path(&dir), b"not json at all").unwrap();

    let service = AssetService::new(store);
    let err = service.get_assets().await.unwrap_err();
    assert!(matches!(err, ServiceError::Storage(_)));
}
