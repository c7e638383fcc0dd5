//! Evaluation report: the full output contract of one case.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::ahp::AhpSolution;
use crate::error::MarError;
use crate::model::{ScenarioLevel, TechGroup, VariableId};
use crate::scoring::{CriterionScore, ScenarioOverride, VariableResult};
use crate::suitability::{
    CompletenessIndex, GlobalSuitability, Recommendation, SensitivityOutcome, WeightSource,
    WeightVector,
};

/// Version of the scoring rules; bumped whenever a table or rule changes.
pub const ENGINE_VERSION: &str = "1.0";

/// Scenario section of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub detected: ScenarioLevel,
    pub applied: ScenarioLevel,
    pub required: Vec<VariableId>,
    pub blocked: Vec<VariableId>,
    pub overrides: BTreeMap<VariableId, ScenarioOverride>,
    /// Tier above the detected one, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<ScenarioLevel>,
    /// Variables that must become Complete to reach `next`
    pub missing_for_next: Vec<VariableId>,
}

/// Authoritative weights and where they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightsReport {
    pub source: WeightSource,
    pub values: WeightVector,
}

/// Complete result of evaluating one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct EvaluationReport {
    pub engine_version: &'static str,
    /// xxh3-64 of the canonical input, hex encoded
    pub fingerprint: String,
    pub scenario: ScenarioReport,
    pub variables: Vec<VariableResult>,
    pub criteria: Vec<CriterionScore>,
    pub weights: WeightsReport,
    pub ahp: AhpSolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ahp_inverted: Option<AhpSolution>,
    pub global: GlobalSuitability,
    pub completeness: CompletenessIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<SensitivityOutcome>,
    pub recommendations: Vec<Recommendation>,
    pub warnings: Vec<String>,
}

impl EvaluationReport {
    /// Best-ranked technology group.
    #[must_use]
    pub fn leader(&self) -> TechGroup {
        self.global.leader()
    }

    /// Suitability of the best-ranked group.
    #[must_use]
    pub fn best_suitability(&self) -> f64 {
        self.global.suitability.get(self.leader())
    }

    /// Whether the AHP matrix that produced the weights is consistent.
    ///
    /// Always true when user weights are authoritative.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self.weights.source {
            WeightSource::User => true,
            WeightSource::Ahp => self.ahp.consistent,
            WeightSource::AhpInverted => self.ahp_inverted.as_ref().map_or(self.ahp.consistent, |a| a.consistent),
        }
    }

    /// Pretty JSON encoding of the full report.
    pub fn to_json(&self) -> crate::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MarError::Serialization(e.to_string()))
    }

    #[must_use]
    pub fn variable(&self, id: VariableId) -> Option<&VariableResult> {
        self.variables.iter().find(|v| v.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CaseInput, EvidenceSnapshot};
    use crate::pipeline::SuitabilityEngine;

    #[test]
    fn test_report_json_shape() {
        let input = CaseInput::new(
            EvidenceSnapshot::new().with_field("hidrogeologia", "tipo_acuifero", "Libre"),
        );
        let report = SuitabilityEngine::default().evaluate(&input);
        let json = serde_json::to_value(&report).expect("serialize");
        for key in [
            "engine_version",
            "fingerprint",
            "scenario",
            "variables",
            "criteria",
            "weights",
            "ahp",
            "global",
            "completeness",
            "recommendations",
            "warnings",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json.get("sensitivity").is_none());
        assert_eq!(json["fingerprint"].as_str().map(str::len), Some(16));
        assert_eq!(json["weights"]["source"], "ahp");

        let text = report.to_json().expect("encode");
        assert_eq!(serde_json::from_str::<serde_json::Value>(&text).expect("parse"), json);
    }
}
