//! Unified error types for pantry-tools.
//!
//! Errors only arise at the ingestion, configuration, and reporting
//! boundaries. The scorer and browse operations are total over well-formed
//! inputs and never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pantry-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    /// Errors during catalog or profile ingestion
    #[error("Failed to parse input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {0}")]
    Report(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Unknown catalog layout - expected a product array or a {{\"products\": [...]}} document")]
    UnknownLayout,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Unknown {what} value: {value} (expected one of {expected})")]
    UnknownVariant {
        what: String,
        value: String,
        expected: String,
    },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for pantry-tools operations
pub type Result<T> = std::result::Result<T, CatalogError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl CatalogError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for an unrecognized catalog layout
    pub fn unknown_layout(path: impl Into<String>) -> Self {
        Self::parse(format!("at {}", path.into()), ParseErrorKind::UnknownLayout)
    }

    /// Create a parse error for a missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create a parse error for a field holding an out-of-range value
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::parse(
            "invalid field value",
            ParseErrorKind::InvalidValue {
                field: field.into(),
                message: message.into(),
            },
        )
    }

    /// Create a parse error for an unrecognized enum value
    pub fn unknown_variant(
        what: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::parse(
            "unknown value",
            ParseErrorKind::UnknownVariant {
                what: what.into(),
                value: value.into(),
                expected: expected.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}
