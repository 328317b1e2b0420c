//! Configuration types for pantry-tools operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::browse::SortKey;
use crate::recommend::ScoringLimits;
use crate::reports::ReportFormat;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or
/// config files.
///
/// CLI arguments override file settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring limits (inclusion threshold, caps)
    pub scoring: ScoringLimits,
    /// Output configuration (format, file)
    pub output: OutputConfig,
    /// Browse defaults
    pub browse: BrowseConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    #[must_use]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with a fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the inclusion threshold.
    pub const fn inclusion_threshold(mut self, threshold: i32) -> Self {
        self.config.scoring.inclusion_threshold = threshold;
        self
    }

    /// Set the maximum number of recommendations.
    pub const fn max_results(mut self, max: usize) -> Self {
        self.config.scoring.max_results = max;
        self
    }

    /// Set the scoring limits wholesale.
    pub const fn scoring(mut self, limits: ScoringLimits) -> Self {
        self.config.scoring = limits;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Set the default browse sort key.
    pub const fn default_sort(mut self, sort: SortKey) -> Self {
        self.config.browse.default_sort = sort;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section configs
// ============================================================================

/// Output configuration shared by all subcommands.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (stdout if not set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Browse view defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BrowseConfig {
    /// Default sort key when none is given on the command line
    pub default_sort: SortKey,
}
