//! Configuration validation.

use super::types::{AppConfig, BehaviorConfig, EngineConfig, OutputConfig, SensitivityConfig};
use crate::error::MarError;
use crate::suitability::MAX_RANGE_PERCENT;

// ============================================================================
// Configuration Error
// ============================================================================

/// One invalid setting, addressed by its dotted YAML path.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

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

impl AppConfig {
    /// Return the config unchanged if it is valid, or every problem joined
    /// into one [`MarError::Config`].
    pub fn validated(self) -> crate::Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(self);
        }
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        Err(MarError::config(details.join("; ")))
    }
}

fn error(field: &str, message: String) -> ConfigError {
    ConfigError {
        field: field.to_string(),
        message,
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.engine.validate());
        errors.extend(self.sensitivity.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(0.0..=1.0).contains(&self.consistency_threshold) {
            errors.push(error(
                "engine.consistency_threshold",
                format!(
                    "Threshold must be between 0.0 and 1.0, got {}",
                    self.consistency_threshold
                ),
            ));
        }
        if self.ahp_iterations == 0 {
            errors.push(error(
                "engine.ahp_iterations",
                "At least one iteration is required".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.partial_credit) {
            errors.push(error(
                "engine.partial_credit",
                format!(
                    "Partial credit must be between 0.0 and 1.0, got {}",
                    self.partial_credit
                ),
            ));
        }
        errors
    }
}

impl Validatable for SensitivityConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(0.0..=MAX_RANGE_PERCENT).contains(&self.range_percent) {
            errors.push(error(
                "sensitivity.range_percent",
                format!(
                    "Range must be between 0 and {MAX_RANGE_PERCENT}, got {}",
                    self.range_percent
                ),
            ));
        }
        if !(self.step_percent.is_finite() && self.step_percent > 0.0) {
            errors.push(error(
                "sensitivity.step_percent",
                format!("Step must be positive, got {}", self.step_percent),
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(error(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min) = self.min_suitability {
            if !(0.0..=4.0).contains(&min) {
                errors.push(error(
                    "behavior.min_suitability",
                    format!("Minimum suitability must be between 0 and 4, got {min}"),
                ));
            }
        }
        errors
    }
}
