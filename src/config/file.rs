//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".mar-suitability.yaml",
    ".mar-suitability.yml",
    "mar-suitability.yaml",
    "mar-suitability.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/mar-suitability/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // 1. Use explicit path if provided
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    // 2. Search current directory
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    // 3. Search git root (if in a repo)
    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    // 4. Search user config directory
    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("mar-suitability")) {
            return Some(path);
        }
    }

    // 5. Search home directory
    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Failure to read a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override; this is how CLI
    /// flags are layered over file config.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Engine config
        if other.engine.consistency_threshold != defaults.engine.consistency_threshold {
            self.engine.consistency_threshold = other.engine.consistency_threshold;
        }
        if other.engine.ahp_iterations != defaults.engine.ahp_iterations {
            self.engine.ahp_iterations = other.engine.ahp_iterations;
        }
        if other.engine.partial_credit != defaults.engine.partial_credit {
            self.engine.partial_credit = other.engine.partial_credit;
        }

        // Sensitivity config
        if other.sensitivity.range_percent != defaults.sensitivity.range_percent {
            self.sensitivity.range_percent = other.sensitivity.range_percent;
        }
        if other.sensitivity.step_percent != defaults.sensitivity.step_percent {
            self.sensitivity.step_percent = other.sensitivity.step_percent;
        }

        // Output config - only override if explicitly set
        if other.output.format != ReportFormat::default() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.min_suitability.is_some() {
            self.behavior.min_suitability = other.behavior.min_suitability;
        }
        if other.behavior.require_consistent {
            self.behavior.require_consistent = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# MAR suitability configuration
# Place this file at .mar-suitability.yaml in your project root or ~/.config/mar-suitability/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# MAR Suitability Configuration File
# ===================================
#
# Place it at:
#   - .mar-suitability.yaml in your project root
#   - ~/.config/mar-suitability/mar-suitability.yaml for global config
#
# CLI arguments always override file settings.

# Numerical engine
engine:
  # Consistency ratio above which AHP judgments are flagged
  consistency_threshold: 0.1
  # Fixed power-iteration budget
  ahp_iterations: 50
  # Completeness credit of a Partial variable (0.0-1.0)
  partial_credit: 0.5

# Default sensitivity sweep
sensitivity:
  # ±range in percent of the base weight (0-50)
  range_percent: 20.0
  # Grid step in percent
  step_percent: 5.0

# Output configuration
output:
  # Format: auto, summary, json
  format: auto
  # Output file path (omit for stdout)
  # file: report.json
  no_color: false

# Exit-code gates
behavior:
  # Exit with code 1 if the leading group scores below this value (0-4)
  # min_suitability: 2.5
  # Exit with code 1 if pairwise judgments are inconsistent
  require_consistent: false
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".mar-suitability.yaml");
        std::fs::write(&config_path, "engine:\n  consistency_threshold: 0.05\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
engine:
  consistency_threshold: 0.05
sensitivity:
  range_percent: 30
output:
  format: json
behavior:
  require_consistent: true
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.engine.consistency_threshold, 0.05);
        assert_eq!(config.sensitivity.range_percent, 30.0);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.behavior.require_consistent);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_yaml_falls_back() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "engine: [unclosed").unwrap();

        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
        let (config, loaded_from) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert_eq!(loaded_from, None);
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::default();
        base.sensitivity.step_percent = 2.0;
        let overrides = AppConfig::builder()
            .consistency_threshold(0.05)
            .require_consistent(true)
            .build();

        base.merge(&overrides);

        assert_eq!(base.engine.consistency_threshold, 0.05);
        assert!(base.behavior.require_consistent);
        // untouched by a default-valued override
        assert_eq!(base.sensitivity.step_percent, 2.0);
    }

    #[test]
    fn test_generate_example_config() {
        let example = generate_example_config();
        assert!(example.contains("engine:"));
        assert!(example.contains("consistency_threshold"));
        let parsed: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "engine:\n  ahp_iterations: 80").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
