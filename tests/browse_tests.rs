//! Integration tests for catalog browsing: filtering, sorting, and the
//! bounded comparison set.

use pantry_tools::{
    browse, parse_catalog, Catalog, CatalogFilter, ComparisonSet, ProductId, SortKey,
    ToggleOutcome,
};
use std::path::Path;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn trio_catalog() -> Catalog {
    parse_catalog(&fixture_path("catalog/trio.json")).expect("fixture catalog parses")
}

fn storefront_catalog() -> Catalog {
    parse_catalog(&fixture_path("catalog/storefront.json")).expect("fixture catalog parses")
}

fn names<'a>(products: &[&'a pantry_tools::Product]) -> Vec<&'a str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

// ============================================================================
// Sorting
// ============================================================================

mod sorting {
    use super::*;

    #[test]
    fn test_price_low_ordering() {
        let catalog = trio_catalog();
        let view = browse(&catalog, &CatalogFilter::default(), SortKey::PriceLow);
        assert_eq!(names(&view), ["Banana Bites", "Cherry Crisp", "Apple Mix"]);
    }

    #[test]
    fn test_price_high_ordering() {
        let catalog = trio_catalog();
        let view = browse(&catalog, &CatalogFilter::default(), SortKey::PriceHigh);
        assert_eq!(names(&view), ["Apple Mix", "Cherry Crisp", "Banana Bites"]);
    }

    #[test]
    fn test_featured_first_stable() {
        let catalog = trio_catalog();
        let view = browse(&catalog, &CatalogFilter::default(), SortKey::Featured);
        // Banana Bites is the only featured product; the rest keep catalog
        // order (Apple Mix before Cherry Crisp).
        assert_eq!(names(&view), ["Banana Bites", "Apple Mix", "Cherry Crisp"]);
    }

    #[test]
    fn test_name_ordering_default() {
        let catalog = trio_catalog();
        let view = browse(&catalog, &CatalogFilter::default(), SortKey::Name);
        assert_eq!(names(&view), ["Apple Mix", "Banana Bites", "Cherry Crisp"]);
    }
}

// ============================================================================
// Filtering
// ============================================================================

mod filtering {
    use super::*;

    #[test]
    fn test_free_text_matches_name_and_description() {
        let catalog = storefront_catalog();

        let filter = CatalogFilter {
            query: Some("oats".to_string()),
            ..Default::default()
        };
        let view = browse(&catalog, &filter, SortKey::Name);
        assert_eq!(names(&view), ["Honey Almond Granola", "Overnight Oats"]);
    }

    #[test]
    fn test_category_and_flags_combined() {
        let catalog = storefront_catalog();

        let filter = CatalogFilter {
            category: Some("savory-treats".to_string()),
            gluten_free_only: true,
            ..Default::default()
        };
        let view = browse(&catalog, &filter, SortKey::PriceLow);
        assert_eq!(names(&view), ["Sea Salt Kale Chips", "Smoked Pepper Jerky"]);
    }

    #[test]
    fn test_category_all_is_no_filter() {
        let catalog = storefront_catalog();
        let filter = CatalogFilter {
            category: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(browse(&catalog, &filter, SortKey::Name).len(), catalog.len());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog = storefront_catalog();
        let filter = CatalogFilter {
            query: Some("pizza".to_string()),
            ..Default::default()
        };
        assert!(browse(&catalog, &filter, SortKey::Name).is_empty());
    }
}

// ============================================================================
// Comparison set
// ============================================================================

mod comparison {
    use super::*;

    #[test]
    fn test_fifth_member_is_noop() {
        let mut set = ComparisonSet::new();
        let ids: Vec<ProductId> = ["oats-01", "bar-07", "shake-02", "fudge-03", "chips-04"]
            .iter()
            .map(|s| ProductId::new(*s))
            .collect();

        for id in &ids[..4] {
            assert_eq!(set.toggle(id), ToggleOutcome::Added);
        }
        assert_eq!(set.toggle(&ids[4]), ToggleOutcome::Full);
        assert_eq!(set.len(), 4);
        assert!(!set.contains(&ids[4]));
    }

    #[test]
    fn test_toggle_is_idempotent_add_remove() {
        let mut set = ComparisonSet::new();
        let id = ProductId::new("oats-01");

        assert_eq!(set.toggle(&id), ToggleOutcome::Added);
        assert_eq!(set.toggle(&id), ToggleOutcome::Removed);
        assert_eq!(set.toggle(&id), ToggleOutcome::Added);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_resolves_against_catalog() {
        let catalog = storefront_catalog();
        let mut set = ComparisonSet::new();
        set.toggle(&ProductId::new("pudding-08"));
        set.toggle(&ProductId::new("oats-01"));

        let products = set.products(&catalog);
        assert_eq!(names(&products), ["Chia Breakfast Pudding", "Overnight Oats"]);
    }
}
