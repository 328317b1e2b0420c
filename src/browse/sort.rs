//! Stable sorting for the browse view.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Product;

/// Sort key for the catalog browse view.
///
/// All sorts are stable: products comparing equal keep their relative feed
/// order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Case-insensitive name, ascending
    #[default]
    Name,
    /// Price ascending
    PriceLow,
    /// Price descending
    PriceHigh,
    /// Featured products first
    Featured,
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::PriceLow => write!(f, "price-low"),
            SortKey::PriceHigh => write!(f, "price-high"),
            SortKey::Featured => write!(f, "featured"),
        }
    }
}

/// Stable-sort a product view by the given key.
pub fn sort_products(products: &mut [&Product], key: SortKey) {
    match key {
        SortKey::Name => {
            products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::PriceLow => {
            products.sort_by(|a, b| a.price.total_cmp(&b.price));
        }
        SortKey::PriceHigh => {
            products.sort_by(|a, b| b.price.total_cmp(&a.price));
        }
        SortKey::Featured => {
            // false sorts after true via the negation
            products.sort_by_key(|p| !p.featured);
        }
    }
}
