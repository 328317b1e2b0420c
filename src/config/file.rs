//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".pantry-tools.yaml",
    ".pantry-tools.yml",
    "pantry-tools.yaml",
    "pantry-tools.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (`~/.config/pantry-tools/`)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("pantry-tools")) {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load configuration from a specific file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load configuration with discovery, falling back to defaults.
///
/// Returns the config and the path it was loaded from (`None` when defaults
/// were used). A file that exists but fails to parse is reported with a
/// warning rather than aborting; the defaults are used instead.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    match discover_config_file(explicit_path) {
        Some(path) => match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {e}", path.display());
                (AppConfig::default(), None)
            }
        },
        None => (AppConfig::default(), None),
    }
}

/// Generate an example `.pantry-tools.yaml` with the default values spelled
/// out.
#[must_use]
pub fn generate_example_config() -> String {
    String::from(
        "# pantry-tools configuration\n\
         #\n\
         # Place this file in your project root as .pantry-tools.yaml or in\n\
         # ~/.config/pantry-tools/. Command-line flags override these values.\n\
         \n\
         scoring:\n\
         \x20 # Raw score a product must strictly exceed to be recommended\n\
         \x20 inclusion_threshold: 20\n\
         \x20 # Ceiling applied to the reported match score\n\
         \x20 score_cap: 100\n\
         \x20 # Maximum number of recommendations returned\n\
         \x20 max_results: 4\n\
         \x20 # Maximum number of benefit strings per recommendation\n\
         \x20 max_benefits: 3\n\
         \n\
         output:\n\
         \x20 # auto, table, json, or csv\n\
         \x20 format: auto\n\
         \x20 quiet: false\n\
         \n\
         browse:\n\
         \x20 # name, price-low, price-high, or featured\n\
         \x20 default_sort: name\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_file_not_found() {
        let err = load_config_file(Path::new("/nonexistent/.pantry-tools.yaml"))
            .expect_err("missing file must fail");
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn test_load_config_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "scoring:\n  max_results: 2").expect("write");

        let config = load_config_file(file.path()).expect("valid config");
        assert_eq!(config.scoring.max_results, 2);
        assert_eq!(config.scoring.inclusion_threshold, 20);
    }

    #[test]
    fn test_load_config_file_bad_yaml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "scoring: [not a map").expect("write");

        let err = load_config_file(file.path()).expect_err("bad yaml must fail");
        assert!(matches!(err, ConfigFileError::Parse(_)));
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let example = generate_example_config();
        let config: AppConfig = serde_yaml::from_str(&example).expect("example must parse");
        assert_eq!(config.scoring.max_results, 4);
        assert_eq!(config.scoring.inclusion_threshold, 20);
    }
}
