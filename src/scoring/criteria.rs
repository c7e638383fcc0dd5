//! Criterion aggregation (WLC within a criterion).

use serde::Serialize;
use std::collections::BTreeMap;

use super::VariableResult;
use crate::model::{clamp_score, CriterionId, GroupScores, Provenance, TechGroup, VariableId};

/// How much of a criterion's in-scope evidence backs its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    None,
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Band the share of available in-scope members.
    #[must_use]
    pub fn from_share(share: f64) -> Self {
        if share >= 0.75 {
            Self::High
        } else if share >= 0.5 {
            Self::Medium
        } else if share > 0.0 {
            Self::Low
        } else {
            Self::None
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One value that entered a criterion mean, with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemberScore {
    pub variable: VariableId,
    pub group: TechGroup,
    pub value: f64,
    pub provenance: Provenance,
}

/// Aggregated score of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionScore {
    pub criterion: CriterionId,
    pub name: &'static str,
    pub scores: GroupScores,
    pub confidence: Confidence,
    /// No member contributed although some were in scope
    pub critical_gap: bool,
    /// Every member is outside the applied scenario
    pub blocked: bool,
    pub members: usize,
    pub in_scope: usize,
    pub available: usize,
    /// Members whose scores were averaged
    pub contributors: Vec<VariableId>,
    /// Members with at least one custom influence pin applied
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pinned: Vec<VariableId>,
    /// Every averaged value, by group then member
    pub breakdown: Vec<MemberScore>,
}

/// Aggregate variables into one score per (criterion, group), in C1..C5 order.
///
/// Unavailable members are left out of the mean instead of counting as 0. A
/// custom influence pin replaces the contribution of its (variable, group)
/// and makes that pair count even without evidence; it never overrides a
/// Blocked variable.
#[must_use]
pub fn aggregate_criteria(
    variables: &[VariableResult],
    custom_influence: &BTreeMap<VariableId, BTreeMap<TechGroup, f64>>,
) -> Vec<CriterionScore> {
    CriterionId::ALL
        .iter()
        .map(|&criterion| aggregate_one(criterion, variables, custom_influence))
        .collect()
}

fn aggregate_one(
    criterion: CriterionId,
    variables: &[VariableResult],
    custom_influence: &BTreeMap<VariableId, BTreeMap<TechGroup, f64>>,
) -> CriterionScore {
    let members: Vec<&VariableResult> = variables.iter().filter(|v| v.criterion == criterion).collect();
    let in_scope: Vec<&VariableResult> = members.iter().copied().filter(|v| !v.is_blocked()).collect();
    let available = in_scope.iter().filter(|v| v.is_available()).count();

    let mut result = CriterionScore {
        criterion,
        name: criterion.name(),
        scores: GroupScores::zero(),
        confidence: Confidence::None,
        critical_gap: false,
        blocked: in_scope.is_empty(),
        members: members.len(),
        in_scope: in_scope.len(),
        available,
        contributors: Vec::new(),
        pinned: Vec::new(),
        breakdown: Vec::new(),
    };
    if result.blocked {
        return result;
    }

    let mut any_contribution = false;
    for group in TechGroup::ALL {
        let mut sum = 0.0;
        let mut count = 0_usize;
        for variable in &in_scope {
            let pin = custom_influence
                .get(&variable.id)
                .and_then(|groups| groups.get(&group))
                .copied();
            let entry = match (pin, variable.scores) {
                (Some(pinned), _) => Some((clamp_score(pinned), Provenance::CustomInfluence)),
                (None, Some(scores)) if variable.is_available() => Some((
                    scores.get(group),
                    variable.provenance.unwrap_or(Provenance::Automatic),
                )),
                _ => None,
            };
            if let Some((value, provenance)) = entry {
                sum += value;
                count += 1;
                result.breakdown.push(MemberScore {
                    variable: variable.id,
                    group,
                    value,
                    provenance,
                });
            }
        }
        if count > 0 {
            result.scores.set(group, sum / count as f64);
            any_contribution = true;
        }
    }

    result.contributors = in_scope
        .iter()
        .filter(|v| v.is_available())
        .map(|v| v.id)
        .collect();
    result.pinned = in_scope
        .iter()
        .filter(|v| custom_influence.get(&v.id).is_some_and(|g| !g.is_empty()))
        .map(|v| v.id)
        .collect();
    result.critical_gap = !any_contribution;
    result.confidence = Confidence::from_share(available as f64 / in_scope.len() as f64);
    result
}

/// Criterion scores as a dense matrix indexed by [`CriterionId::index`].
#[must_use]
pub fn score_matrix(criteria: &[CriterionScore]) -> [GroupScores; CriterionId::COUNT] {
    let mut matrix = [GroupScores::zero(); CriterionId::COUNT];
    for criterion in criteria {
        matrix[criterion.criterion.index()] = criterion.scores;
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EvidenceRecord, EvidenceStatus};

    fn variable(id: u8, criterion: CriterionId, status: EvidenceStatus, scores: Option<GroupScores>) -> VariableResult {
        VariableResult {
            id: VariableId::new(id),
            name: "test",
            criterion,
            status,
            scores,
            provenance: scores.map(|_| Provenance::Automatic),
            automatic: scores,
            unscored_reason: None,
            evidence: EvidenceRecord {
                variable: VariableId::new(id),
                present_inputs: 0,
                required_inputs: 1,
                categorical_token: None,
                numeric_value: None,
                artifacts_present: 0,
                artifacts_required: 0,
            },
        }
    }

    fn get(criteria: &[CriterionScore], c: CriterionId) -> &CriterionScore {
        &criteria[c.index()]
    }

    #[test]
    fn test_all_missing_sets_critical_gap() {
        let vars = vec![
            variable(2, CriterionId::C2, EvidenceStatus::Missing, None),
            variable(3, CriterionId::C2, EvidenceStatus::Missing, None),
        ];
        let criteria = aggregate_criteria(&vars, &BTreeMap::new());
        let c2 = get(&criteria, CriterionId::C2);
        assert_eq!(c2.scores, GroupScores::zero());
        assert!(c2.critical_gap);
        assert!(!c2.blocked);
        assert_eq!(c2.confidence, Confidence::None);
    }

    #[test]
    fn test_missing_members_excluded_from_denominator() {
        let vars = vec![
            variable(2, CriterionId::C2, EvidenceStatus::Complete, Some(GroupScores::new(4.0, 2.0, 3.0))),
            variable(3, CriterionId::C2, EvidenceStatus::Missing, None),
            variable(4, CriterionId::C2, EvidenceStatus::Missing, None),
        ];
        let criteria = aggregate_criteria(&vars, &BTreeMap::new());
        let c2 = get(&criteria, CriterionId::C2);
        assert_eq!(c2.scores, GroupScores::new(4.0, 2.0, 3.0));
        assert!(!c2.critical_gap);
        assert_eq!(c2.confidence, Confidence::Low);
        assert_eq!(c2.contributors, vec![VariableId::new(2)]);
    }

    #[test]
    fn test_mean_of_available_members() {
        let vars = vec![
            variable(2, CriterionId::C2, EvidenceStatus::Complete, Some(GroupScores::new(4.0, 2.0, 3.0))),
            variable(3, CriterionId::C2, EvidenceStatus::Partial, Some(GroupScores::new(2.0, 2.0, 2.0))),
        ];
        let criteria = aggregate_criteria(&vars, &BTreeMap::new());
        let c2 = get(&criteria, CriterionId::C2);
        assert_eq!(c2.scores, GroupScores::new(3.0, 2.0, 2.5));
        assert_eq!(c2.confidence, Confidence::High);
    }

    #[test]
    fn test_all_blocked_criterion_is_not_a_gap() {
        let vars = vec![variable(
            24,
            CriterionId::C4,
            EvidenceStatus::Blocked,
            Some(GroupScores::zero()),
        )];
        let criteria = aggregate_criteria(&vars, &BTreeMap::new());
        let c4 = get(&criteria, CriterionId::C4);
        assert!(c4.blocked);
        assert!(!c4.critical_gap);
        assert_eq!(c4.scores, GroupScores::zero());
    }

    #[test]
    fn test_custom_influence_pins_single_group() {
        let vars = vec![
            variable(21, CriterionId::C3, EvidenceStatus::Complete, Some(GroupScores::new(4.0, 2.0, 4.0))),
            variable(15, CriterionId::C3, EvidenceStatus::Complete, Some(GroupScores::new(4.0, 2.0, 4.0))),
        ];
        let pins = BTreeMap::from([(VariableId::new(21), BTreeMap::from([(TechGroup::G2, 4.0)]))]);
        let criteria = aggregate_criteria(&vars, &pins);
        let c3 = get(&criteria, CriterionId::C3);
        assert_eq!(c3.scores, GroupScores::new(4.0, 3.0, 4.0));
        assert_eq!(c3.pinned, vec![VariableId::new(21)]);
        let pinned: Vec<&MemberScore> = c3
            .breakdown
            .iter()
            .filter(|m| m.provenance == Provenance::CustomInfluence)
            .collect();
        assert_eq!(pinned.len(), 1);
        assert_eq!(pinned[0].variable, VariableId::new(21));
        assert_eq!(pinned[0].group, TechGroup::G2);
        assert_eq!(pinned[0].value, 4.0);
        assert_eq!(c3.breakdown.len(), 6);
        // Raw variable list is untouched
        assert_eq!(vars[0].scores, Some(GroupScores::new(4.0, 2.0, 4.0)));
    }

    #[test]
    fn test_custom_influence_never_unblocks() {
        let vars = vec![variable(
            24,
            CriterionId::C4,
            EvidenceStatus::Blocked,
            Some(GroupScores::zero()),
        )];
        let pins = BTreeMap::from([(VariableId::new(24), BTreeMap::from([(TechGroup::G1, 4.0)]))]);
        let criteria = aggregate_criteria(&vars, &pins);
        assert_eq!(get(&criteria, CriterionId::C4).scores, GroupScores::zero());
    }
}
