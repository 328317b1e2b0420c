//! Catalog snapshot - the read-only product list all scoring and browsing
//! operations run over.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use super::{Product, ProductId};

/// An in-memory catalog snapshot.
///
/// Products are keyed by id in feed order. Feed order is semantically
/// load-bearing: ranking and sorting are stable, and ties keep the relative
/// catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Products indexed by id, in feed order
    pub products: IndexMap<ProductId, Product>,
    /// Content hash for quick snapshot equality checks
    pub content_hash: u64,
    /// Number of duplicate-id collisions encountered while building
    #[serde(skip)]
    pub collision_count: usize,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a product list, preserving feed order.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.add_product(product);
        }
        catalog.calculate_content_hash();
        catalog
    }

    /// Add a product to the catalog.
    ///
    /// Returns `true` if a collision occurred (a product with the same id was
    /// already present and has been overwritten). The id-uniqueness invariant
    /// makes collisions a feed defect; they are counted and summarized once.
    pub fn add_product(&mut self, product: Product) -> bool {
        let id = product.id.clone();
        if self.products.contains_key(&id) {
            self.collision_count += 1;
            self.products.insert(id, product);
            true
        } else {
            self.products.insert(id, product);
            false
        }
    }

    /// Log a single summary line if any id collisions occurred while building.
    pub fn log_collision_summary(&self) {
        if self.collision_count > 0 {
            tracing::warn!(
                collision_count = self.collision_count,
                "Duplicate product ids in catalog feed: {} product(s) were overwritten. \
                 Product ids must be unique within a snapshot.",
                self.collision_count
            );
        }
    }

    /// Get a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Iterate products in feed order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Total product count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Calculate and update the content hash.
    ///
    /// The hash covers every product record in feed order, so two snapshots
    /// with identical content and order compare equal.
    pub fn calculate_content_hash(&mut self) {
        let mut hasher_input = Vec::new();
        for product in self.products.values() {
            if let Ok(bytes) = serde_json::to_vec(product) {
                hasher_input.extend(bytes);
            }
        }
        self.content_hash = xxh3_64(&hasher_input);
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = indexmap::map::Values<'a, ProductId, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.values()
    }
}
