//! Evidence-gap recommendations.

use serde::Serialize;

use super::CompletenessIndex;
use crate::ahp::AhpSolution;
use crate::catalog;
use crate::model::{CriterionId, EvidenceRecord, EvidenceStatus, ScenarioLevel, VariableId};
use crate::scoring::{CriterionScore, ScenarioResolution, VariableResult};

/// Recommendation for improving the evidence base
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Priority (1 = highest, 5 = lowest)
    pub priority: u8,
    pub category: RecommendationCategory,
    pub message: String,
    /// Affected variables (if applicable)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<VariableId>,
    /// Estimated gain in completeness index points (0-100)
    pub impact: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RecommendationCategory {
    Scenario,
    CriticalGap,
    Consistency,
    Completeness,
    Override,
}

impl RecommendationCategory {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scenario => "Scenario",
            Self::CriticalGap => "Critical gap",
            Self::Consistency => "Consistency",
            Self::Completeness => "Completeness",
            Self::Override => "Override",
        }
    }
}

/// Everything the recommendation pass looks at.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    pub scenario: &'a ScenarioResolution,
    pub records: &'a [EvidenceRecord],
    pub variables: &'a [VariableResult],
    pub criteria: &'a [CriterionScore],
    pub completeness: &'a CompletenessIndex,
    pub ahp: Option<&'a AhpSolution>,
    pub refused_overrides: &'a [VariableId],
    pub partial_credit: f64,
}

/// Tier above the detected one and its required variables not yet Complete.
#[must_use]
pub fn missing_for_next(scenario: &ScenarioResolution, records: &[EvidenceRecord]) -> Option<(ScenarioLevel, Vec<VariableId>)> {
    let next = scenario.detected.next()?;
    let missing = catalog::required_set(next)
        .into_iter()
        .filter(|id| {
            !records
                .iter()
                .any(|r| r.variable == *id && r.status() == EvidenceStatus::Complete)
        })
        .collect();
    Some((next, missing))
}

/// Prioritized recommendations, sorted by priority then impact.
#[must_use]
pub fn generate_recommendations(ctx: &RecommendationContext<'_>) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    // Priority 1: reach the next scenario tier
    if let Some((next, missing)) = missing_for_next(ctx.scenario, ctx.records) {
        if !missing.is_empty() {
            let impact = missing.iter().map(|id| impact_of(ctx, *id, 1.0)).sum();
            recommendations.push(Recommendation {
                priority: 1,
                category: RecommendationCategory::Scenario,
                message: format!(
                    "Complete {} variable(s) to reach scenario {next}",
                    missing.len()
                ),
                variables: missing,
                impact,
            });
        }
    }

    // Priority 2: criteria with no usable evidence
    for criterion in ctx.criteria.iter().filter(|c| c.critical_gap) {
        let members = catalog::criterion_members(criterion.criterion);
        let in_scope: Vec<VariableId> = members
            .into_iter()
            .filter(|id| !ctx.scenario.is_blocked(*id))
            .collect();
        recommendations.push(Recommendation {
            priority: 2,
            category: RecommendationCategory::CriticalGap,
            message: format!(
                "{} ({}) has no usable evidence; its score of 0 is a data gap, not an unfavorable rating",
                criterion.criterion, criterion.name
            ),
            impact: in_scope.iter().map(|id| impact_of(ctx, *id, 1.0)).sum(),
            variables: in_scope,
        });
    }

    // Priority 3: inconsistent pairwise judgments
    if let Some(ahp) = ctx.ahp.filter(|a| !a.consistent) {
        recommendations.push(Recommendation {
            priority: 3,
            category: RecommendationCategory::Consistency,
            message: format!(
                "Review pairwise judgments: consistency ratio {:.3} is above the accepted threshold",
                ahp.consistency_ratio
            ),
            variables: Vec::new(),
            impact: 0.0,
        });
    }

    // Priority 4: partial evidence, one entry per criterion
    for criterion in CriterionId::ALL {
        let partial: Vec<VariableId> = ctx
            .variables
            .iter()
            .filter(|v| v.criterion == criterion && v.status == EvidenceStatus::Partial)
            .map(|v| v.id)
            .collect();
        if partial.is_empty() {
            continue;
        }
        let gain = 1.0 - ctx.partial_credit;
        recommendations.push(Recommendation {
            priority: 4,
            category: RecommendationCategory::Completeness,
            message: format!(
                "Complete the partial evidence of {} variable(s) in {criterion} ({})",
                partial.len(),
                criterion.name()
            ),
            impact: partial.iter().map(|id| impact_of(ctx, *id, gain)).sum(),
            variables: partial,
        });
    }

    // Priority 5: refused manual overrides
    if !ctx.refused_overrides.is_empty() {
        recommendations.push(Recommendation {
            priority: 5,
            category: RecommendationCategory::Override,
            message: "Supply measured values instead of manual overrides for evidence-only variables"
                .to_string(),
            variables: ctx.refused_overrides.to_vec(),
            impact: 0.0,
        });
    }

    recommendations.sort_by(|a, b| {
        a.priority.cmp(&b.priority).then_with(|| {
            b.impact
                .partial_cmp(&a.impact)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    });

    recommendations
}

/// Completeness points gained by raising one variable's credit by `gain`.
fn impact_of(ctx: &RecommendationContext<'_>, id: VariableId, gain: f64) -> f64 {
    let Some(def) = catalog::variable(id) else {
        return 0.0;
    };
    let Some(detail) = ctx.completeness.breakdown.get(&def.criterion) else {
        return 0.0;
    };
    if detail.in_scope == 0 || ctx.scenario.is_blocked(id) {
        return 0.0;
    }
    detail.effective_weight / detail.in_scope as f64 * gain * 100.0
}
