//! Catalog and profile feed parsers.
//!
//! Catalog feeds arrive as JSON in one of two layouts: a bare product array,
//! or a document with a top-level `products` array (the storefront export
//! format). Layout is detected before deserialization, and the §3 data-model
//! invariants are enforced at this boundary: nutrition values must be
//! non-negative, and duplicate product ids are counted and summarized with a
//! single warning.
//!
//! ## Usage
//!
//! ```no_run
//! use pantry_tools::parsers::parse_catalog;
//! use std::path::Path;
//!
//! let catalog = parse_catalog(Path::new("catalog.json")).unwrap();
//! println!("{} products", catalog.len());
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, PreferenceProfile, Product};

/// Storefront export document layout.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
}

/// Maximum catalog file size (64 MB). Catalogs are in-memory lists; anything
/// larger is a feed defect, not a use case.
const MAX_CATALOG_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Read and parse a catalog feed from a file.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let metadata = std::fs::metadata(path).map_err(|e| CatalogError::io(path, e))?;
    if metadata.len() > MAX_CATALOG_FILE_SIZE {
        return Err(CatalogError::validation(format!(
            "catalog file is {} MB, exceeding the {} MB limit",
            metadata.len() / (1024 * 1024),
            MAX_CATALOG_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_catalog_str(&content).map_err(|e| match e {
        CatalogError::Parse { context, source } => CatalogError::Parse {
            context: format!("{context} (at {})", path.display()),
            source,
        },
        other => other,
    })
}

/// Parse a catalog feed from string content.
///
/// Accepts either a bare JSON product array or a `{"products": [...]}`
/// document.
pub fn parse_catalog_str(content: &str) -> Result<Catalog> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let products: Vec<Product> = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        serde_json::Value::Object(ref map) if map.contains_key("products") => {
            let document: CatalogDocument = serde_json::from_value(value)?;
            document.products
        }
        _ => return Err(CatalogError::unknown_layout("catalog content")),
    };

    for product in &products {
        product.validate()?;
    }

    let catalog = Catalog::from_products(products);
    catalog.log_collision_summary();
    Ok(catalog)
}

/// Read and parse a preference profile from a file.
pub fn parse_profile(path: &Path) -> Result<PreferenceProfile> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    parse_profile_str(&content)
}

/// Parse a preference profile from string content (wizard export payload).
pub fn parse_profile_str(content: &str) -> Result<PreferenceProfile> {
    let profile: PreferenceProfile = serde_json::from_str(content)?;
    Ok(profile)
}
