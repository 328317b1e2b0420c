//! Catalog browsing: filtering, stable sorting, and the bounded
//! comparison set.

mod compare;
mod filter;
mod sort;

pub use compare::{ComparisonSet, ToggleOutcome, MAX_COMPARE};
pub use filter::CatalogFilter;
pub use sort::{sort_products, SortKey};

use crate::model::{Catalog, Product};

/// Produce the filtered, sorted browse view of a catalog.
#[must_use]
pub fn browse<'a>(catalog: &'a Catalog, filter: &CatalogFilter, sort: SortKey) -> Vec<&'a Product> {
    let mut view = filter.apply(catalog);
    sort_products(&mut view, sort);
    view
}
