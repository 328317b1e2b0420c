//! Bounded side-by-side comparison set.

use crate::model::{Catalog, Product, ProductId};

/// Maximum number of products that fit in a comparison view.
pub const MAX_COMPARE: usize = 4;

/// Outcome of a comparison-set toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The product was added to the set
    Added,
    /// The product was already present and has been removed
    Removed,
    /// The set is full; the toggle was a no-op
    Full,
}

/// A bounded set of product ids selected for side-by-side comparison.
///
/// Toggling is idempotent: toggling a member removes it, toggling a
/// non-member adds it, and adding to a full set is a no-op rather than an
/// error. Insertion order is preserved for display.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSet {
    ids: Vec<ProductId>,
}

impl ComparisonSet {
    /// Create an empty comparison set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a product in or out of the set.
    pub fn toggle(&mut self, id: &ProductId) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            return ToggleOutcome::Removed;
        }
        if self.ids.len() >= MAX_COMPARE {
            tracing::debug!(product_id = %id, "comparison set full, toggle ignored");
            return ToggleOutcome::Full;
        }
        self.ids.push(id.clone());
        ToggleOutcome::Added
    }

    /// Check membership.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True when no further product can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARE
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Resolve the selection against a catalog, in insertion order.
    ///
    /// Ids no longer present in the catalog are skipped.
    #[must_use]
    pub fn products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.ids.iter().filter_map(|id| catalog.get(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, NutritionFacts};

    fn make_product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price: 1.0,
            category: Category::from_slug("natural-foods"),
            nutrition: NutritionFacts::default(),
            is_vegan: false,
            is_gluten_free: false,
            is_organic: false,
            featured: false,
        }
    }

    #[test]
    fn test_fifth_toggle_is_noop() {
        let mut set = ComparisonSet::new();
        for i in 0..4 {
            assert_eq!(
                set.toggle(&ProductId::new(format!("p{i}"))),
                ToggleOutcome::Added
            );
        }
        assert!(set.is_full());
        assert_eq!(set.toggle(&ProductId::new("p4")), ToggleOutcome::Full);
        assert_eq!(set.len(), 4);
        assert!(!set.contains(&ProductId::new("p4")));
    }

    #[test]
    fn test_toggle_removes_existing_member() {
        let mut set = ComparisonSet::new();
        let id = ProductId::new("p1");
        assert_eq!(set.toggle(&id), ToggleOutcome::Added);
        assert!(set.contains(&id));
        assert_eq!(set.toggle(&id), ToggleOutcome::Removed);
        assert!(set.is_empty());
    }

    #[test]
    fn test_full_set_accepts_toggle_after_removal() {
        let mut set = ComparisonSet::new();
        for i in 0..4 {
            set.toggle(&ProductId::new(format!("p{i}")));
        }
        set.toggle(&ProductId::new("p0"));
        assert_eq!(set.len(), 3);
        assert_eq!(set.toggle(&ProductId::new("p9")), ToggleOutcome::Added);
        assert!(set.is_full());
    }

    #[test]
    fn test_products_resolve_in_insertion_order() {
        let catalog =
            Catalog::from_products(vec![make_product("a"), make_product("b"), make_product("c")]);

        let mut set = ComparisonSet::new();
        set.toggle(&ProductId::new("c"));
        set.toggle(&ProductId::new("a"));
        set.toggle(&ProductId::new("missing"));

        let names: Vec<&str> = set
            .products(&catalog)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        // "missing" is skipped; insertion order holds for the rest.
        assert_eq!(names, ["Product c", "Product a"]);
    }

    #[test]
    fn test_clear() {
        let mut set = ComparisonSet::new();
        set.toggle(&ProductId::new("p1"));
        set.clear();
        assert!(set.is_empty());
    }
}
