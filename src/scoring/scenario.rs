//! Scenario resolver: tier detection, blocking and fallback overrides.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::{self, OverrideFacet};
use crate::model::{
    EvidenceRecord, EvidenceSnapshot, EvidenceStatus, GroupScores, ScenarioLevel,
    ScenarioSelection, TechGroup, VariableId,
};

/// Synthetic triple for one variable plus the facets it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOverride {
    pub scores: GroupScores,
    pub facets: Vec<&'static str>,
}

/// Outcome of scenario resolution for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResolution {
    /// Highest tier the evidence satisfies
    pub detected: ScenarioLevel,
    /// Tier used for gating (detected unless fixed by the operator)
    pub applied: ScenarioLevel,
    /// Required set of the applied tier, sorted by id
    pub required: Vec<VariableId>,
    pub overrides: BTreeMap<VariableId, ScenarioOverride>,
}

impl ScenarioResolution {
    /// Whether the applied tier excludes this variable from scoring.
    #[must_use]
    pub fn is_blocked(&self, id: VariableId) -> bool {
        self.applied.is_gated() && self.required.binary_search(&id).is_err()
    }

    /// Variables outside the applied tier's required set.
    #[must_use]
    pub fn blocked(&self) -> Vec<VariableId> {
        catalog::all_ids()
            .into_iter()
            .filter(|id| self.is_blocked(*id))
            .collect()
    }
}

/// Highest tier whose required set is entirely Complete.
#[must_use]
pub fn detect_scenario(records: &[EvidenceRecord]) -> ScenarioLevel {
    let complete = |set: &[VariableId]| {
        set.iter().all(|id| {
            records
                .iter()
                .find(|r| r.variable == *id)
                .is_some_and(|r| r.status() == EvidenceStatus::Complete)
        })
    };

    [ScenarioLevel::Full, ScenarioLevel::Partial, ScenarioLevel::Minimum]
        .into_iter()
        .find(|level| complete(&catalog::required_set(*level)))
        .unwrap_or(ScenarioLevel::Insufficient)
}

/// Detect the tier, apply the selection and compute overrides for gated tiers.
#[must_use]
pub fn resolve_scenario(
    selection: ScenarioSelection,
    records: &[EvidenceRecord],
    snapshot: &EvidenceSnapshot,
) -> ScenarioResolution {
    let detected = detect_scenario(records);
    let applied = match selection {
        ScenarioSelection::Auto => detected,
        ScenarioSelection::Fixed(level) => level,
    };
    tracing::debug!(
        "scenario detected {}, applied {}",
        detected.number(),
        applied.number()
    );

    let required = catalog::required_set(applied);
    let overrides = if applied.is_gated() {
        compute_overrides(&required, snapshot)
    } else {
        BTreeMap::new()
    };

    ScenarioResolution {
        detected,
        applied,
        required,
        overrides,
    }
}

/// Overrides for targets inside `required` with at least one resolving facet.
#[must_use]
pub fn compute_overrides(
    required: &[VariableId],
    snapshot: &EvidenceSnapshot,
) -> BTreeMap<VariableId, ScenarioOverride> {
    let mut overrides = BTreeMap::new();
    for def in catalog::scenario_overrides() {
        if !required.contains(&def.target) {
            continue;
        }
        if let Some(result) = override_triple(def.facets, snapshot) {
            tracing::debug!(
                "scenario override for {} from {:?}: {:?}",
                def.target,
                result.facets,
                result.scores
            );
            overrides.insert(def.target, result);
        }
    }
    overrides
}

/// Per-group mean of the resolving facets, rounded half-up.
fn override_triple(facets: &[OverrideFacet], snapshot: &EvidenceSnapshot) -> Option<ScenarioOverride> {
    let mut sums = [0.0_f64; 3];
    let mut used = Vec::new();

    for facet in facets {
        let Some(token) = snapshot.token(facet.field.module, facet.field.field) else {
            continue;
        };
        let Some(category) = catalog::lookup(facet.table, &token) else {
            continue;
        };
        for (sum, score) in sums.iter_mut().zip(category.scores) {
            *sum += f64::from(score);
        }
        used.push(facet.label);
    }

    if used.is_empty() {
        return None;
    }

    let count = used.len() as f64;
    let mut scores = GroupScores::zero();
    for group in TechGroup::ALL {
        scores.set(group, round_half_up(sums[group.index()] / count));
    }
    Some(ScenarioOverride {
        scores,
        facets: used,
    })
}

fn round_half_up(value: f64) -> f64 {
    // Facet means are multiples of 1/3 or 1/2; nudge for float error at .5
    (value + 0.5 + 1e-9).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::resolve_evidence;

    fn complete_minimum_snapshot() -> EvidenceSnapshot {
        EvidenceSnapshot::new()
            .with_field("objetivo", "uso_final", "Riego")
            .with_field("hidrogeologia", "litologia", "Arena")
            .with_field("hidrogeologia", "profundidad_nivel", 12)
            .with_field("hidrogeologia", "tipo_acuifero", "Libre")
            .with_field("fuente", "tipo_fuente", "Escorrentía")
            .with_field("calidad", "calidad_fuente", "Buena")
    }

    #[test]
    fn test_detect_insufficient_and_minimum() {
        let empty = resolve_evidence(&EvidenceSnapshot::new());
        assert_eq!(detect_scenario(&empty), ScenarioLevel::Insufficient);

        let minimum = resolve_evidence(&complete_minimum_snapshot());
        assert_eq!(detect_scenario(&minimum), ScenarioLevel::Minimum);
    }

    #[test]
    fn test_blocking_only_in_gated_tiers() {
        let snapshot = complete_minimum_snapshot();
        let records = resolve_evidence(&snapshot);
        let resolution = resolve_scenario(ScenarioSelection::Auto, &records, &snapshot);
        assert!(resolution.is_blocked(VariableId::new(3)));
        assert!(!resolution.is_blocked(VariableId::new(8)));
        assert_eq!(resolution.blocked().len(), 29);

        let forced = resolve_scenario(
            ScenarioSelection::Fixed(ScenarioLevel::Full),
            &records,
            &snapshot,
        );
        assert_eq!(forced.detected, ScenarioLevel::Minimum);
        assert!(forced.blocked().is_empty());
        assert!(forced.overrides.is_empty());
    }

    #[test]
    fn test_free_aquifer_override_rounds_half_up() {
        let snapshot = EvidenceSnapshot::new().with_field("hidrogeologia", "tipo_acuifero", "Libre");
        let overrides = compute_overrides(&catalog::required_set(ScenarioLevel::Minimum), &snapshot);
        let v8 = overrides.get(&VariableId::new(8)).expect("V8 override");
        assert_eq!(v8.scores, GroupScores::new(4.0, 3.0, 4.0));
        assert_eq!(v8.facets, vec!["confinement", "storage"]);
        // V25 is outside the minimum set
        assert!(!overrides.contains_key(&VariableId::new(25)));
    }

    #[test]
    fn test_partial_tier_enables_more_overrides() {
        let snapshot = EvidenceSnapshot::new()
            .with_field("hidrogeologia", "tipo_acuifero", "Confinado")
            .with_field("fuente", "conectividad", "Indirecta");
        let overrides = compute_overrides(&catalog::required_set(ScenarioLevel::Partial), &snapshot);
        // (1,4,1) + (1,3,1) + (2,4,2) = (4,11,4) / 3
        assert_eq!(overrides[&VariableId::new(8)].scores, GroupScores::new(1.0, 4.0, 1.0));
        assert_eq!(overrides[&VariableId::new(10)].scores, GroupScores::new(2.0, 4.0, 2.0));
        // (1,3,1) + (2,3,2) = (1.5, 3, 1.5)
        assert_eq!(overrides[&VariableId::new(25)].scores, GroupScores::new(2.0, 3.0, 2.0));
        assert!(!overrides.contains_key(&VariableId::new(20)));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(11.0 / 3.0), 4.0);
        assert_eq!(round_half_up(4.0 / 3.0), 1.0);
    }
}
