//! Configuration validation.

use super::types::{AppConfig, BrowseConfig, OutputConfig};
use crate::recommend::ScoringLimits;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.output.validate());
        errors.extend(self.browse.validate());
        errors
    }
}

impl Validatable for ScoringLimits {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.inclusion_threshold >= i32::from(self.score_cap) {
            errors.push(ConfigError {
                field: "scoring.inclusion_threshold".to_string(),
                message: format!(
                    "threshold {} must be below the score cap {}",
                    self.inclusion_threshold, self.score_cap
                ),
            });
        }

        if self.max_results == 0 {
            errors.push(ConfigError {
                field: "scoring.max_results".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.max_benefits == 0 {
            errors.push(ConfigError {
                field: "scoring.max_benefits".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

impl Validatable for BrowseConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}
