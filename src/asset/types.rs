use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One managed inventory item.
///
/// Serialized field names are camelCase so persisted records match the
/// wire shape used by the hosted backend's clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Unique identifier, generated at creation and immutable thereafter.
    pub id: Uuid,
    /// Owner reference; present only when records came from an
    /// authenticated backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    pub category: Category,
    /// Monetary value in a fixed currency, always positive.
    pub value: f64,
    pub status: AssetStatus,
    pub purchase_date: DateTime<Utc>,
}

/// Closed category enumeration, consumed by validation and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Laptop,
    Desktop,
    Smartphone,
    Tablet,
    Monitor,
    Peripheral,
    Network,
    Server,
    Furniture,
    Other,
}

impl Category {
    /// String form matching the serialized representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Laptop => "laptop",
            Category::Desktop => "desktop",
            Category::Smartphone => "smartphone",
            Category::Tablet => "tablet",
            Category::Monitor => "monitor",
            Category::Peripheral => "peripheral",
            Category::Network => "network",
            Category::Server => "server",
            Category::Furniture => "furniture",
            Category::Other => "other",
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "laptop" => Ok(Category::Laptop),
            "desktop" => Ok(Category::Desktop),
            "smartphone" => Ok(Category::Smartphone),
            "tablet" => Ok(Category::Tablet),
            "monitor" => Ok(Category::Monitor),
            "peripheral" => Ok(Category::Peripheral),
            "network" => Ok(Category::Network),
            "server" => Ok(Category::Server),
            "furniture" => Ok(Category::Furniture),
            "other" => Ok(Category::Other),
            other => Err(format!("Unknown category '{}'", other)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Active,
    Maintenance,
    Retired,
    Lost,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::Maintenance => "maintenance",
            AssetStatus::Retired => "retired",
            AssetStatus::Lost => "lost",
        }
    }
}

impl std::str::FromStr for AssetStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(AssetStatus::Active),
            "maintenance" => Ok(AssetStatus::Maintenance),
            "retired" => Ok(AssetStatus::Retired),
            "lost" => Ok(AssetStatus::Lost),
            other => Err(format!("Unknown status '{}'", other)),
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration-form input. Fields with schema defaults may be omitted;
/// `parse_new` fills them in while validating the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewAsset {
    pub id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub serial_number: Option<String>,
    pub category: Option<Category>,
    pub value: f64,
    pub status: Option<AssetStatus>,
    pub purchase_date: Option<DateTime<Utc>>,
}

/// Partial update applied to an existing record. `id` and `user_id`
/// are fixed at creation and cannot be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetPatch {
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub category: Option<Category>,
    pub value: Option<f64>,
    pub status: Option<AssetStatus>,
    pub purchase_date: Option<DateTime<Utc>>,
}

impl AssetPatch {
    /// Merge this patch onto `base`, producing the candidate record.
    /// The result must still pass `schema::revalidate` before it is
    /// committed anywhere.
    pub fn apply_to(&self, base: &Asset) -> Asset {
        let mut merged = base.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(serial) = &self.serial_number {
            merged.serial_number = Some(serial.clone());
        }
        if let Some(category) = self.category {
            merged.category = category;
        }
        if let Some(value) = self.value {
            merged.value = value;
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(purchase_date) = self.purchase_date {
            merged.purchase_date = purchase_date;
        }
        merged
    }

    /// True when no field is set; useful for rejecting no-op updates
    /// at the CLI boundary.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.serial_number.is_none()
            && self.category.is_none()
            && self.value.is_none()
            && self.status.is_none()
            && self.purchase_date.is_none()
    }
}
