//! Catalog filtering for the browse view.

use crate::model::{Catalog, Product};

/// Filter criteria for browsing a catalog.
///
/// All active criteria are AND-combined: a product must match every
/// non-empty criterion to be included in the view.
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Free-text query, matched case-insensitively against name and
    /// description
    pub query: Option<String>,
    /// Category selector; `None` means all categories
    pub category: Option<String>,
    /// Only vegan products
    pub vegan_only: bool,
    /// Only gluten-free products
    pub gluten_free_only: bool,
    /// Only organic products
    pub organic_only: bool,
    /// Only featured products
    pub featured_only: bool,
}

impl CatalogFilter {
    /// Check if a product matches all active criteria.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref query) = self.query {
            let query_lower = query.to_lowercase();
            if !query_lower.is_empty()
                && !product.name.to_lowercase().contains(&query_lower)
                && !product.description.to_lowercase().contains(&query_lower)
            {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if category != "all" && product.category.effective_id() != category {
                return false;
            }
        }

        if self.vegan_only && !product.is_vegan {
            return false;
        }
        if self.gluten_free_only && !product.is_gluten_free {
            return false;
        }
        if self.organic_only && !product.is_organic {
            return false;
        }
        if self.featured_only && !product.featured {
            return false;
        }

        true
    }

    /// Apply the filter to a catalog, preserving feed order.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }

    /// Returns true if no criteria are set (would match everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().map_or(true, str::is_empty)
            && self.category.as_deref().map_or(true, |c| c == "all")
            && !self.vegan_only
            && !self.gluten_free_only
            && !self.organic_only
            && !self.featured_only
    }

    /// Build a human-readable description of the active criteria.
    #[must_use]
    pub fn description(&self) -> String {
        let mut parts = Vec::new();
        if let Some(ref q) = self.query {
            if !q.is_empty() {
                parts.push(format!("\"{q}\""));
            }
        }
        if let Some(ref c) = self.category {
            if c != "all" {
                parts.push(format!("category={c}"));
            }
        }
        if self.vegan_only {
            parts.push("vegan".to_string());
        }
        if self.gluten_free_only {
            parts.push("gluten-free".to_string());
        }
        if self.organic_only {
            parts.push("organic".to_string());
        }
        if self.featured_only {
            parts.push("featured".to_string());
        }
        if parts.is_empty() {
            "*".to_string()
        } else {
            parts.join(" AND ")
        }
    }
}
