//! Structural validation for asset records.
//!
//! Two explicit entry points: `parse_new` validates registration input
//! and fills schema defaults (`id`, `status`, `purchaseDate`), while
//! `revalidate` checks a fully-populated record, as required before
//! committing a merged update. Failures are returned, never panicked,
//! and carry every violated constraint rather than just the first.

use chrono::Utc;
use uuid::Uuid;

use crate::asset::types::{Asset, AssetStatus, NewAsset};

/// Name length bounds, inclusive.
const NAME_MIN: usize = 3;
const NAME_MAX: usize = 50;

/// A single violated constraint: field path plus human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

/// Aggregate validation failure listing every violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

impl std::error::Error for ValidationError {}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed: ")?;
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

struct Checker {
    violations: Vec<Violation>,
}

impl Checker {
    fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    fn check_name(&mut self, name: &str) {
        let len = name.chars().count();
        if len < NAME_MIN {
            self.violations.push(Violation {
                field: "name",
                message: format!("Name must be at least {} characters", NAME_MIN),
            });
        } else if len > NAME_MAX {
            self.violations.push(Violation {
                field: "name",
                message: "Name too long".to_string(),
            });
        }
    }

    fn check_value(&mut self, value: f64) {
        // NaN fails the comparison and is rejected with the rest.
        if !(value > 0.0) {
            self.violations.push(Violation {
                field: "value",
                message: "Value must be positive".to_string(),
            });
        }
    }

    fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                violations: self.violations,
            })
        }
    }
}

/// Validate registration input and produce a fully-populated record.
///
/// Defaults fill the gaps: a fresh v4 id, `active` status and the
/// current time as purchase date. Constraint checks run on everything
/// the caller did supply, and every violation is reported at once.
pub fn parse_new(input: NewAsset) -> Result<Asset, ValidationError> {
    let mut checker = Checker::new();
    checker.check_name(&input.name);
    checker.check_value(input.value);
    if input.category.is_none() {
        checker.violations.push(Violation {
            field: "category",
            message: "Category is required".to_string(),
        });
    }
    checker.finish()?;

    let category = input.category.expect("category checked above");

    Ok(Asset {
        id: input.id.unwrap_or_else(Uuid::new_v4),
        user_id: input.user_id,
        name: input.name,
        serial_number: input.serial_number,
        category,
        value: input.value,
        status: input.status.unwrap_or(AssetStatus::Active),
        purchase_date: input.purchase_date.unwrap_or_else(Utc::now),
    })
}

/// Re-check a fully-populated record, e.g. a merged update candidate or
/// a record read back from storage. Defaults are no-ops here: every
/// field is already present, only the constraints are enforced.
pub fn revalidate(asset: &Asset) -> Result<(), ValidationError> {
    let mut checker = Checker::new();
    checker.check_name(&asset.name);
    checker.check_value(asset.value);
    checker.finish()
}
