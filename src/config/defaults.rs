//! Default values and named presets.

use super::types::{AppConfig, BehaviorConfig, EngineConfig, OutputConfig, SensitivityConfig};

/// Default CR threshold for AHP consistency
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = crate::ahp::DEFAULT_CONSISTENCY_THRESHOLD;

/// Default AHP power-iteration budget
pub const DEFAULT_AHP_ITERATIONS: usize = crate::ahp::DEFAULT_ITERATIONS;

/// Default completeness credit for Partial evidence
pub const DEFAULT_PARTIAL_CREDIT: f64 = crate::suitability::DEFAULT_PARTIAL_CREDIT;

/// Default sensitivity ±range, in percent
pub const DEFAULT_SENSITIVITY_RANGE: f64 = 20.0;

/// Default sensitivity step, in percent
pub const DEFAULT_SENSITIVITY_STEP: f64 = 5.0;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default balanced settings
    Default,
    /// Tighter consistency threshold, fails on inconsistent judgments
    Strict,
    /// Wide, fine-grained sensitivity sweep
    Exploratory,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Exploratory => "exploratory",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            "exploratory" | "explore" | "wide" => Some(Self::Exploratory),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "CR threshold 0.10, sensitivity ±20% in 5% steps",
            Self::Strict => "CR threshold 0.05, inconsistent judgments fail the run",
            Self::Exploratory => "Sensitivity ±50% in 2.5% steps",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Exploratory]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::Exploratory => Self::exploratory_preset(),
        }
    }

    /// Strict preset.
    ///
    /// - CR threshold 0.05
    /// - Inconsistent judgments exit with code 1
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            engine: EngineConfig {
                consistency_threshold: 0.05,
                ..EngineConfig::default()
            },
            sensitivity: SensitivityConfig::default(),
            output: OutputConfig::default(),
            behavior: BehaviorConfig {
                require_consistent: true,
                ..BehaviorConfig::default()
            },
        }
    }

    /// Exploratory preset: widest allowed sweep at a fine step.
    #[must_use]
    pub fn exploratory_preset() -> Self {
        Self {
            sensitivity: SensitivityConfig {
                range_percent: 50.0,
                step_percent: 2.5,
            },
            ..Self::default()
        }
    }
}
