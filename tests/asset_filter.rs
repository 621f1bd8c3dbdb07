mod common;

use nexus_inventory::asset::{parse_new, Asset, Category};
use nexus_inventory::inventory::{filter_assets, CategoryFilter, FilterState};

use common::input;

fn asset(name: &str, category: Category) -> Asset {
    parse_new(input(name, category, 100.0)).unwrap()
}

fn sample() -> Vec<Asset> {
    vec![
        asset("MacBook Pro", Category::Laptop),
        asset("Office Chair", Category::Furniture),
        asset("iPhone", Category::Laptop),
    ]
}

#[test]
fn search_and_category_combine() {
    let filters = FilterState {
        search: "phone".to_string(),
        category: CategoryFilter::Only(Category::Laptop),
    };

    let shown = filter_assets(&sample(), &filters);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].name, "iPhone");
}

#[test]
fn all_sentinel_with_empty_search_returns_everything_in_order() {
    let assets = sample();
    let shown = filter_assets(&assets, &FilterState::default());
    assert_eq!(shown, assets);
}

#[test]
fn search_is_case_insensitive() {
    let filters = FilterState {
        search: "MACBOOK".to_string(),
        category: CategoryFilter::All,
    };
    let shown = filter_assets(&sample(), &filters);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].name, "MacBook Pro");
}

#[test]
fn category_alone_narrows_the_collection() {
    let filters = FilterState {
        search: String::new(),
        category: CategoryFilter::Only(Category::Furniture),
    };
    let shown = filter_assets(&sample(), &filters);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].name, "Office Chair");
}

#[test]
fn filter_does_not_mutate_its_input() {
    let assets = sample();
    let before = assets.clone();
    let _ = filter_assets(
        &assets,
        &FilterState {
            search: "nothing matches this".to_string(),
            category: CategoryFilter::All,
        },
    );
    assert_eq!(assets, before);
}

#[test]
fn category_filter_parses_sentinels_and_names() {
    assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
    assert_eq!(
        "laptop".parse::<CategoryFilter>().unwrap(),
        CategoryFilter::Only(Category::Laptop)
    );
    assert!("spaceship".parse::<CategoryFilter>().is_err());
}
