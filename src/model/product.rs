//! Core product record and nutrition data structures.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Unique product identifier within a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying id string
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Category a product belongs to.
///
/// Catalog feeds always carry a `slug`; `id` and `name` are optional and fall
/// back to the slug when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Category {
    /// URL-safe category key (e.g. `natural-foods`, `sweet-treats`)
    pub slug: String,
    /// Category identifier, when the feed distinguishes it from the slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Category {
    /// Create a category from a slug only
    #[must_use]
    pub fn from_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            id: None,
            name: None,
        }
    }

    /// The identifier used for category filtering.
    ///
    /// Feeds that omit an explicit id key categories by slug.
    #[must_use]
    pub fn effective_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.slug)
    }
}

/// Per-serving nutrition facts. All values are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl NutritionFacts {
    /// Validate the non-negativity invariant.
    ///
    /// Catalog feeds are rejected at the ingestion boundary when any
    /// nutrient is negative or non-finite.
    pub fn validate(&self, product_id: &str) -> Result<()> {
        for (field, value) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("fiber", self.fiber),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::invalid_value(
                    format!("nutritionalInfo.{field}"),
                    format!("must be a non-negative number, got {value} (product {product_id})"),
                ));
            }
        }
        Ok(())
    }
}

/// A catalog product record, supplied read-only by the product-data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within a catalog snapshot
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Display description
    #[serde(default)]
    pub description: String,
    /// Price as a plain number (currency-minor-unit-agnostic)
    pub price: f64,
    /// Product category
    pub category: Category,
    /// Per-serving nutrition facts
    #[serde(rename = "nutritionalInfo", alias = "nutrition")]
    pub nutrition: NutritionFacts,
    /// Vegan flag
    #[serde(default)]
    pub is_vegan: bool,
    /// Gluten-free flag
    #[serde(default)]
    pub is_gluten_free: bool,
    /// Organic flag
    #[serde(default)]
    pub is_organic: bool,
    /// Featured in the storefront
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Validate the product-level invariants (non-negative nutrition).
    pub fn validate(&self) -> Result<()> {
        self.nutrition.validate(self.id.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product_json() -> &'static str {
        r#"{
            "id": "p-001",
            "name": "Overnight Oats",
            "description": "Rolled oats with chia",
            "price": 4.5,
            "category": {"slug": "natural-foods"},
            "nutritionalInfo": {"calories": 180.0, "protein": 8.0, "carbs": 30.0, "fat": 4.0, "fiber": 6.0},
            "isVegan": true,
            "isGlutenFree": false,
            "isOrganic": true,
            "featured": false
        }"#
    }

    #[test]
    fn test_product_deserializes_feed_field_names() {
        let product: Product = serde_json::from_str(sample_product_json()).expect("valid product");
        assert_eq!(product.id.value(), "p-001");
        assert!(product.is_vegan);
        assert!(!product.is_gluten_free);
        assert!(product.is_organic);
        assert_eq!(product.nutrition.fiber, 6.0);
        assert_eq!(product.category.slug, "natural-foods");
    }

    #[test]
    fn test_flags_default_to_false() {
        let json = r#"{
            "id": "p-002",
            "name": "Trail Mix",
            "price": 3.0,
            "category": {"slug": "savory-treats"},
            "nutritionalInfo": {"calories": 250.0, "protein": 9.0, "carbs": 20.0, "fat": 14.0, "fiber": 3.0}
        }"#;
        let product: Product = serde_json::from_str(json).expect("valid product");
        assert!(!product.is_vegan);
        assert!(!product.featured);
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_nutrition_validation_rejects_negative() {
        let mut product: Product = serde_json::from_str(sample_product_json()).expect("valid");
        product.nutrition.protein = -1.0;
        let err = product.validate().expect_err("negative protein must fail");
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_nutrition_validation_rejects_nan() {
        let mut product: Product = serde_json::from_str(sample_product_json()).expect("valid");
        product.nutrition.calories = f64::NAN;
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_category_effective_id_falls_back_to_slug() {
        let plain = Category::from_slug("natural-foods");
        assert_eq!(plain.effective_id(), "natural-foods");

        let keyed = Category {
            slug: "natural-foods".to_string(),
            id: Some("cat-17".to_string()),
            name: Some("Natural Foods".to_string()),
        };
        assert_eq!(keyed.effective_id(), "cat-17");
    }
}
