//! Pure derived-view filtering of the in-memory collection.

use crate::asset::{Asset, Category};

/// Category selection: the "all" sentinel or one concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "all" and empty both match everything, as in the UI selector.
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse::<Category>().map(CategoryFilter::Only)
        }
    }
}

/// Free-text search plus category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub category: CategoryFilter,
}

/// Project the subsequence of `assets` whose name contains `search`
/// case-insensitively and whose category matches the selection.
///
/// Deterministic and order-preserving; cheap enough to recompute on
/// every render of the view.
pub fn filter_assets(assets: &[Asset], filters: &FilterState) -> Vec<Asset> {
    let needle = filters.search.to_lowercase();

    assets
        .iter()
        .filter(|asset| {
            let matches_search = asset.name.to_lowercase().contains(&needle);
            let matches_category = match filters.category {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => asset.category == category,
            };
            matches_search && matches_category
        })
        .cloned()
        .collect()
}
