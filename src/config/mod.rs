//! Configuration module for mar-suitability.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use mar_suitability::config::{AppConfig, ConfigPreset};
//!
//! // Use defaults
//! let config = AppConfig::default();
//! assert_eq!(config.engine.ahp_iterations, 50);
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Strict);
//! assert!(config.behavior.require_consistent);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .consistency_threshold(0.08)
//!     .sensitivity(30.0, 5.0)
//!     .build();
//! assert_eq!(config.sensitivity.range_percent, 30.0);
//! ```
//!
//! # Configuration File
//!
//! Place a `.mar-suitability.yaml` file in your project root or
//! `~/.config/mar-suitability/`:
//!
//! ```yaml
//! engine:
//!   consistency_threshold: 0.05
//! sensitivity:
//!   range_percent: 30
//!   step_percent: 2.5
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::{
    ConfigPreset, DEFAULT_AHP_ITERATIONS, DEFAULT_CONSISTENCY_THRESHOLD, DEFAULT_PARTIAL_CREDIT,
    DEFAULT_SENSITIVITY_RANGE, DEFAULT_SENSITIVITY_STEP,
};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, EngineConfig, OutputConfig, SensitivityConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.mar-suitability.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
