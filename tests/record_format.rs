//! Persisted record shape: camelCase field names matching the data
//! written by the original browser clients, so an existing data file
//! keeps working.

mod common;

use serde_json::json;

use nexus_inventory::asset::{parse_new, Asset, AssetStatus, Category};

use common::input;

#[test]
fn records_serialize_with_camel_case_fields() {
    let mut new_asset = input("Test Laptop", Category::Laptop, 1500.0);
    new_asset.serial_number = Some("SN-123".to_string());
    let asset = parse_new(new_asset).unwrap();

    let value = serde_json::to_value(&asset).unwrap();
    let obj = value.as_object().unwrap();

    assert!(obj.contains_key("serialNumber"));
    assert!(obj.contains_key("purchaseDate"));
    assert!(!obj.contains_key("serial_number"));
    // Absent optionals are omitted entirely, not written as null.
    assert!(!obj.contains_key("userId"));
}

#[test]
fn records_from_a_browser_written_file_deserialize() {
    let raw = json!({
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "name": "Test Laptop",
        "serialNumber": "SN-123",
        "category": "laptop",
        "value": 1500,
        "status": "active",
        "purchaseDate": "2023-01-01T00:00:00.000Z",
    });

    let asset: Asset = serde_json::from_value(raw).unwrap();
    assert_eq!(asset.name, "Test Laptop");
    assert_eq!(asset.category, Category::Laptop);
    assert_eq!(asset.status, AssetStatus::Active);
    assert_eq!(asset.serial_number.as_deref(), Some("SN-123"));
    assert_eq!(asset.value, 1500.0);
}

#[test]
fn unknown_status_fails_deserialization() {
    let raw = json!({
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "name": "Test Laptop",
        "category": "laptop",
        "value": 1500.0,
        "status": "exploded",
        "purchaseDate": "2023-01-01T00:00:00Z",
    });
    assert!(serde_json::from_value::<Asset>(raw).is_err());
}

#[test]
fn bad_purchase_date_fails_deserialization() {
    let raw = json!({
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "name": "Test Laptop",
        "category": "laptop",
        "value": 1500.0,
        "status": "active",
        "purchaseDate": "not-a-date",
    });
    assert!(serde_json::from_value::<Asset>(raw).is_err());
}
