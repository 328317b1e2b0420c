//! **Nutrition-aware product recommendation and catalog querying.**
//!
//! `pantry-tools` scores a food-product catalog against a user preference
//! profile and produces ranked, human-readable recommendations. It also
//! provides the catalog browse primitives a storefront needs: AND-combined
//! filtering, stable sorting, and a bounded side-by-side comparison set.
//! It powers both a command-line interface and a Rust library for
//! programmatic integration.
//!
//! ## Key Features
//!
//! - **Additive match scoring**: per-product scoring over goal, activity
//!   level, dietary restrictions, meal times, and age band, with explicit
//!   enum-keyed rule tables - no hidden weights.
//! - **Ranked recommendations**: products clearing the inclusion threshold
//!   are capped at a match score of 100, stable-sorted, and truncated to a
//!   bounded top-N list with reasons and benefit strings.
//! - **Catalog browsing**: free-text/category/flag filtering and stable
//!   sorting by name, price, or featured status.
//! - **Bounded comparison**: an idempotent toggle set of at most four
//!   products for side-by-side attribute comparison.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the catalog data model - read-only [`Product`] records,
//!   the transient [`PreferenceProfile`], and the [`Catalog`] snapshot.
//! - **[`recommend`]**: the [`RecommendationEngine`] and its rule tables.
//!   Scoring is a pure function of `(catalog, profile)`; it performs no I/O
//!   and holds no mutable state.
//! - **[`browse`]**: filtering, sorting, and the comparison set.
//! - **[`parsers`]**: JSON catalog/profile ingestion with boundary
//!   validation of the data-model invariants.
//! - **[`config`]**: layered configuration (defaults, YAML file, CLI).
//!
//! ## Getting Started: Generating Recommendations
//!
//! ```no_run
//! use std::path::Path;
//! use pantry_tools::{parse_catalog, Goal, PreferenceProfile, RecommendationEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = parse_catalog(Path::new("catalog.json"))?;
//!     let profile = PreferenceProfile::new().with_goal(Goal::WeightLoss);
//!
//!     let engine = RecommendationEngine::new();
//!     for rec in engine.generate(&catalog, &profile) {
//!         println!("{:>3}  {}  - {}", rec.match_score, rec.product.name, rec.reason);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Browsing a Catalog
//!
//! ```no_run
//! use std::path::Path;
//! use pantry_tools::{browse, parse_catalog, CatalogFilter, SortKey};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = parse_catalog(Path::new("catalog.json"))?;
//!     let filter = CatalogFilter {
//!         query: Some("oats".to_string()),
//!         vegan_only: true,
//!         ..Default::default()
//!     };
//!
//!     for product in browse(&catalog, &filter, SortKey::PriceLow) {
//!         println!("{}  {:.2}", product.name, product.price);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `pantry_tools` library crate. If you are
//! looking for the command-line tool, install it via `cargo install
//! pantry-tools` and see `pantry-tools --help`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: the capped match score is bounded to [0, 100] before
    // narrowing
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Filter structs legitimately use several bools for toggle flags
    clippy::struct_excessive_bools
)]

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod recommend;
pub mod reports;

// Re-export main types for convenience
pub use browse::{browse, CatalogFilter, ComparisonSet, SortKey, ToggleOutcome, MAX_COMPARE};
pub use config::{AppConfig, AppConfigBuilder, BrowseConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{CatalogError, ParseErrorKind, Result};
pub use model::{
    ActivityLevel, AgeBand, Catalog, Category, DietaryRestriction, Goal, MealTime,
    NutritionFacts, PreferenceProfile, Product, ProductId,
};
pub use parsers::{parse_catalog, parse_catalog_str, parse_profile, parse_profile_str};
pub use recommend::{
    Recommendation, RecommendationEngine, ScoreBreakdown, ScoringLimits, SCORING_RULES_VERSION,
};
pub use reports::{OutputTarget, ReportFormat};
