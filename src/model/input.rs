//! Case input document: evidence, weighting and operator overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::evidence::EvidenceSnapshot;
use super::ids::{CriterionId, TechGroup, VariableId};
use super::scenario::ScenarioSelection;
use crate::error::{ErrorContext, MarError, Result};

/// Everything the engine needs to evaluate one case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseInput {
    pub evidence: EvidenceSnapshot,
    pub weighting: Weighting,
    pub manual_overrides: BTreeMap<VariableId, ManualOverride>,
    /// Sparse `(variable, group)` pins used during aggregation only
    pub custom_influence: BTreeMap<VariableId, BTreeMap<TechGroup, f64>>,
    pub scenario: ScenarioSelection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<SensitivityRequest>,
}

impl CaseInput {
    #[must_use]
    pub fn new(evidence: EvidenceSnapshot) -> Self {
        Self {
            evidence,
            ..Self::default()
        }
    }

    /// Parse a case from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("parsing case input")
    }

    /// Read and parse a case file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MarError::io(path, e))?;
        Self::from_json(&content).with_context(|| format!("case file {}", path.display()))
    }

    /// Stable hash of the canonical JSON encoding, usable as a cache key.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        crate::utils::fingerprint(self)
    }

    #[must_use]
    pub fn with_scenario(mut self, scenario: ScenarioSelection) -> Self {
        self.scenario = scenario;
        self
    }

    #[must_use]
    pub fn with_user_weights(mut self, weights: BTreeMap<CriterionId, f64>) -> Self {
        self.weighting.user_weights = weights;
        self
    }

    #[must_use]
    pub fn with_judgments(mut self, judgments: Vec<PairwiseJudgment>) -> Self {
        self.weighting.judgments = judgments;
        self
    }

    #[must_use]
    pub fn with_manual_override(mut self, variable: VariableId, score: f64) -> Self {
        self.manual_overrides.insert(
            variable,
            ManualOverride {
                enabled: true,
                score,
            },
        );
        self
    }

    #[must_use]
    pub fn with_custom_influence(mut self, variable: VariableId, group: TechGroup, value: f64) -> Self {
        self.custom_influence
            .entry(variable)
            .or_default()
            .insert(group, value);
        self
    }

    #[must_use]
    pub fn with_sensitivity(mut self, request: SensitivityRequest) -> Self {
        self.sensitivity = Some(request);
        self
    }
}

/// Criterion weighting inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weighting {
    /// Direct percentages per criterion; authoritative when they sum above 0
    pub user_weights: BTreeMap<CriterionId, f64>,
    pub judgments: Vec<PairwiseJudgment>,
    pub invert_hierarchy: bool,
}

/// Which side of a pairwise comparison is more important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    A,
    B,
}

/// One Saaty-scale judgment between two criteria.
///
/// Ids are kept as text so a malformed entry can be skipped with a warning
/// instead of rejecting the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseJudgment {
    pub a: String,
    pub b: String,
    pub winner: Winner,
    #[serde(default = "default_intensity")]
    pub intensity: f64,
}

const fn default_intensity() -> f64 {
    1.0
}

impl PairwiseJudgment {
    #[must_use]
    pub fn new(a: CriterionId, b: CriterionId, winner: Winner, intensity: f64) -> Self {
        Self {
            a: a.id().to_string(),
            b: b.id().to_string(),
            winner,
            intensity,
        }
    }

    /// Read a bare judgment list from a JSON file.
    pub fn load_list(path: &Path) -> Result<Vec<Self>> {
        let content = std::fs::read_to_string(path).map_err(|e| MarError::io(path, e))?;
        serde_json::from_str(&content).with_context(|| format!("judgments file {}", path.display()))
    }
}

/// Operator-entered score replacing the automatic one for every group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManualOverride {
    #[serde(default)]
    pub enabled: bool,
    pub score: f64,
}

/// Sensitivity sweep parameters; unset values fall back to configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityRequest {
    pub criterion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_percent: Option<f64>,
}

impl SensitivityRequest {
    #[must_use]
    pub fn new(criterion: CriterionId) -> Self {
        Self {
            criterion: criterion.id().to_string(),
            range_percent: None,
            step_percent: None,
        }
    }

    #[must_use]
    pub const fn with_range(mut self, range_percent: f64, step_percent: f64) -> Self {
        self.range_percent = Some(range_percent);
        self.step_percent = Some(step_percent);
        self
    }
}
