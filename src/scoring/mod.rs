//! Variable scoring: evidence, automatic rules, scenario gating and overrides.
//!
//! Scores for a (variable, group) are resolved with a strict precedence:
//! a Blocked variable reads 0 and never contributes; otherwise a manual
//! override beats a scenario override, which beats the automatic score.
//! Custom influence pins apply later, during criterion aggregation only.

mod criteria;
mod resolver;
mod rules;
mod scenario;

pub use criteria::{aggregate_criteria, score_matrix, Confidence, CriterionScore, MemberScore};
pub use resolver::{resolve_evidence, resolve_variable};
pub use rules::{automatic_score, Unscored};
pub use scenario::{
    compute_overrides, detect_scenario, resolve_scenario, ScenarioOverride, ScenarioResolution,
};

use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::{self, VariableDef};
use crate::model::{
    clamp_score, CriterionId, EvidenceRecord, EvidenceStatus, GroupScores, ManualOverride,
    Provenance, VariableId,
};

/// Scored variable as shown in the raw variable list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableResult {
    pub id: VariableId,
    pub name: &'static str,
    pub criterion: CriterionId,
    /// Evidence status, or `Blocked` when the scenario excludes the variable
    pub status: EvidenceStatus,
    /// `None` means unscored; Blocked variables read 0
    pub scores: Option<GroupScores>,
    pub provenance: Option<Provenance>,
    /// Evidence-derived score, kept for audit when an override replaced it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic: Option<GroupScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unscored_reason: Option<String>,
    pub evidence: EvidenceRecord,
}

impl VariableResult {
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.status == EvidenceStatus::Blocked
    }

    /// Counts toward criterion aggregation.
    #[must_use]
    pub fn is_available(&self) -> bool {
        if self.is_blocked() || self.scores.is_none() {
            return false;
        }
        self.status.has_evidence()
            || matches!(
                self.provenance,
                Some(Provenance::ManualOverride | Provenance::ScenarioOverride)
            )
    }
}

/// All variable results plus warnings raised while scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableScoring {
    pub variables: Vec<VariableResult>,
    pub warnings: Vec<String>,
    /// Variables whose manual override was refused
    pub refused_overrides: Vec<VariableId>,
}

/// Score every cataloged variable.
#[must_use]
pub fn score_variables(
    records: &[EvidenceRecord],
    scenario: &ScenarioResolution,
    manual_overrides: &BTreeMap<VariableId, ManualOverride>,
) -> VariableScoring {
    let mut scoring = VariableScoring::default();

    for id in manual_overrides.keys() {
        if catalog::variable(*id).is_none() {
            tracing::warn!("Ignoring manual override for unknown variable {id}");
            scoring
                .warnings
                .push(format!("manual override for unknown variable {id} ignored"));
        }
    }

    for record in records {
        let Some(def) = catalog::variable(record.variable) else {
            continue;
        };
        let result = score_one(def, record, scenario, manual_overrides.get(&def.id), &mut scoring);
        scoring.variables.push(result);
    }

    scoring
}

fn score_one(
    def: &'static VariableDef,
    record: &EvidenceRecord,
    scenario: &ScenarioResolution,
    manual: Option<&ManualOverride>,
    scoring: &mut VariableScoring,
) -> VariableResult {
    let evidence_status = record.status();
    let automatic = automatic_score(def, record);

    let mut result = VariableResult {
        id: def.id,
        name: def.name,
        criterion: def.criterion,
        status: evidence_status,
        scores: None,
        provenance: None,
        automatic: automatic.as_ref().ok().copied(),
        unscored_reason: None,
        evidence: record.clone(),
    };

    if scenario.is_blocked(def.id) {
        result.status = EvidenceStatus::Blocked;
        result.scores = Some(GroupScores::zero());
        return result;
    }

    let manual = manual.filter(|m| m.enabled);
    if let Some(manual) = manual {
        if def.overridable {
            result.scores = Some(GroupScores::uniform(clamp_score(manual.score)));
            result.provenance = Some(Provenance::ManualOverride);
            return result;
        }
        tracing::warn!(
            "Manual override refused for {} ({}): score must come from evidence",
            def.id,
            def.name
        );
        scoring.warnings.push(format!(
            "manual override refused for {} ({}); it is always evidence-derived",
            def.id, def.name
        ));
        scoring.refused_overrides.push(def.id);
    }

    if let Some(fallback) = scenario.overrides.get(&def.id) {
        result.scores = Some(fallback.scores);
        result.provenance = Some(Provenance::ScenarioOverride);
        return result;
    }

    match automatic {
        Ok(scores) => {
            result.scores = Some(scores);
            result.provenance = Some(Provenance::Automatic);
        }
        Err(reason) => {
            if reason != Unscored::NoEvidence {
                tracing::warn!("{} ({}) left unscored: {reason}", def.id, def.name);
                scoring
                    .warnings
                    .push(format!("{} left unscored: {reason}", def.id));
            }
            result.unscored_reason = Some(reason.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EvidenceSnapshot, ScenarioLevel, ScenarioSelection};

    fn run(
        snapshot: &EvidenceSnapshot,
        selection: ScenarioSelection,
        manual: &BTreeMap<VariableId, ManualOverride>,
    ) -> VariableScoring {
        let records = resolve_evidence(snapshot);
        let scenario = resolve_scenario(selection, &records, snapshot);
        score_variables(&records, &scenario, manual)
    }

    fn find(scoring: &VariableScoring, id: u8) -> &VariableResult {
        scoring
            .variables
            .iter()
            .find(|v| v.id == VariableId::new(id))
            .expect("variable scored")
    }

    fn enabled(score: f64) -> ManualOverride {
        ManualOverride {
            enabled: true,
            score,
        }
    }

    #[test]
    fn test_blocked_variables_read_zero() {
        let snapshot = EvidenceSnapshot::new()
            .with_field("hidrogeologia", "tipo_acuifero", "Libre")
            .with_field("sitio", "pendiente", 3);
        let scoring = run(
            &snapshot,
            ScenarioSelection::Fixed(ScenarioLevel::Minimum),
            &BTreeMap::new(),
        );
        let slope = find(&scoring, 24);
        assert!(slope.is_blocked());
        assert_eq!(slope.scores, Some(GroupScores::zero()));
        assert!(!slope.is_available());
        assert!(slope.automatic.is_some());

        let v8 = find(&scoring, 8);
        assert_eq!(v8.provenance, Some(Provenance::ScenarioOverride));
        assert_eq!(v8.scores, Some(GroupScores::new(4.0, 3.0, 4.0)));
    }

    #[test]
    fn test_missing_variable_is_unscored() {
        let scoring = run(&EvidenceSnapshot::new(), ScenarioSelection::Auto, &BTreeMap::new());
        let v2 = find(&scoring, 2);
        assert_eq!(v2.status, EvidenceStatus::Missing);
        assert_eq!(v2.scores, None);
        assert!(!v2.is_available());
        assert!(scoring.warnings.is_empty());
    }

    #[test]
    fn test_manual_override_beats_scenario_override() {
        let snapshot = EvidenceSnapshot::new().with_field("hidrogeologia", "tipo_acuifero", "Libre");
        let manual = BTreeMap::from([(VariableId::new(8), enabled(2.0))]);
        let scoring = run(&snapshot, ScenarioSelection::Fixed(ScenarioLevel::Minimum), &manual);
        let v8 = find(&scoring, 8);
        assert_eq!(v8.provenance, Some(Provenance::ManualOverride));
        assert_eq!(v8.scores, Some(GroupScores::uniform(2.0)));
    }

    #[test]
    fn test_manual_override_on_missing_variable_makes_it_available() {
        let manual = BTreeMap::from([(VariableId::new(13), enabled(9.0))]);
        let scoring = run(&EvidenceSnapshot::new(), ScenarioSelection::Auto, &manual);
        let v13 = find(&scoring, 13);
        assert_eq!(v13.scores, Some(GroupScores::uniform(4.0)));
        assert!(v13.is_available());
    }

    #[test]
    fn test_permeability_and_porosity_refuse_manual_override() {
        let snapshot = EvidenceSnapshot::new().with_field("hidrogeologia", "permeabilidad", 2.0);
        let manual = BTreeMap::from([
            (VariableId::new(7), enabled(0.0)),
            (VariableId::new(9), enabled(4.0)),
        ]);
        let scoring = run(&snapshot, ScenarioSelection::Auto, &manual);
        let v7 = find(&scoring, 7);
        assert_eq!(v7.provenance, Some(Provenance::Automatic));
        assert_eq!(v7.scores, Some(GroupScores::new(3.0, 3.0, 3.0)));
        let v9 = find(&scoring, 9);
        assert_eq!(v9.scores, None);
        assert_eq!(
            scoring.refused_overrides,
            vec![VariableId::new(7), VariableId::new(9)]
        );
        assert_eq!(scoring.warnings.len(), 2);
    }

    #[test]
    fn test_disabled_override_is_ignored() {
        let snapshot = EvidenceSnapshot::new().with_field("hidrogeologia", "tipo_acuifero", "Confinado");
        let manual = BTreeMap::from([(
            VariableId::new(8),
            ManualOverride {
                enabled: false,
                score: 0.0,
            },
        )]);
        let scoring = run(&snapshot, ScenarioSelection::Auto, &manual);
        assert_eq!(find(&scoring, 8).provenance, Some(Provenance::Automatic));
    }
}
