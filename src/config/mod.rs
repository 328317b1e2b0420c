//! Configuration module for pantry-tools.
//!
//! Provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging (CLI overrides file settings)
//!
//! # Quick Start
//!
//! ```rust
//! use pantry_tools::config::AppConfig;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .max_results(3)
//!     .inclusion_threshold(25)
//!     .build();
//! ```
//!
//! # Configuration File
//!
//! Place a `.pantry-tools.yaml` file in your project root or
//! `~/.config/pantry-tools/`:
//!
//! ```yaml
//! scoring:
//!   inclusion_threshold: 20
//!   max_results: 4
//! browse:
//!   default_sort: price-low
//! ```

pub mod file;
mod types;
mod validation;

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
pub use types::{AppConfig, AppConfigBuilder, BrowseConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents all options that can be set in `.pantry-tools.yaml`
/// config files and can be used by editors for validation and completion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
