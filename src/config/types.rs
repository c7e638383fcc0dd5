//! Configuration types for suitability evaluation.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Numerical engine settings (AHP, completeness credit)
    pub engine: EngineConfig,
    /// Default sensitivity sweep
    pub sensitivity: SensitivityConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Exit-code gates and verbosity
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// CR above which judgments are reported as inconsistent.
    pub const fn consistency_threshold(mut self, threshold: f64) -> Self {
        self.config.engine.consistency_threshold = threshold;
        self
    }

    /// Fixed power-iteration budget.
    pub const fn ahp_iterations(mut self, iterations: usize) -> Self {
        self.config.engine.ahp_iterations = iterations;
        self
    }

    /// Credit given to Partial variables in the completeness index.
    pub const fn partial_credit(mut self, credit: f64) -> Self {
        self.config.engine.partial_credit = credit;
        self
    }

    /// Default sensitivity range and step, in percent.
    pub const fn sensitivity(mut self, range_percent: f64, step_percent: f64) -> Self {
        self.config.sensitivity.range_percent = range_percent;
        self.config.sensitivity.step_percent = step_percent;
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

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Fail (exit 1) when the leading group scores below this value.
    pub const fn min_suitability(mut self, min: Option<f64>) -> Self {
        self.config.behavior.min_suitability = min;
        self
    }

    /// Fail (exit 1) when AHP judgments are inconsistent.
    pub const fn require_consistent(mut self, require: bool) -> Self {
        self.config.behavior.require_consistent = require;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Numerical engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EngineConfig {
    /// Consistency ratio above which AHP judgments are flagged (default 0.10)
    #[schemars(range(min = 0.0, max = 1.0))]
    pub consistency_threshold: f64,
    /// Power-iteration budget for the AHP eigenvector (default 50)
    #[schemars(range(min = 1))]
    pub ahp_iterations: usize,
    /// Completeness credit of a Partial variable (default 0.5)
    #[schemars(range(min = 0.0, max = 1.0))]
    pub partial_credit: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: super::DEFAULT_CONSISTENCY_THRESHOLD,
            ahp_iterations: super::DEFAULT_AHP_ITERATIONS,
            partial_credit: super::DEFAULT_PARTIAL_CREDIT,
        }
    }
}

/// Default sensitivity sweep parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SensitivityConfig {
    /// ±range in percent of the base weight (0-50)
    #[schemars(range(min = 0.0, max = 50.0))]
    pub range_percent: f64,
    /// Grid step in percent (> 0)
    pub step_percent: f64,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            range_percent: super::DEFAULT_SENSITIVITY_RANGE,
            step_percent: super::DEFAULT_SENSITIVITY_STEP,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Exit-code gates and verbosity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when the best group's suitability is below this value (0-4)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_suitability: Option<f64>,
    /// Exit with code 1 when AHP judgments are inconsistent
    pub require_consistent: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}
