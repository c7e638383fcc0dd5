//! Completeness index (IC): weighted share of in-scope evidence available.

use indexmap::IndexMap;
use serde::Serialize;

use super::WeightVector;
use crate::model::{CriterionId, EvidenceStatus};
use crate::scoring::VariableResult;

/// Default credit for a Partial variable.
pub const DEFAULT_PARTIAL_CREDIT: f64 = 0.5;

/// Confidence band of the completeness index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum CompletenessBand {
    /// < 30
    VeryLow,
    /// 30-49
    Low,
    /// 50-69
    Medium,
    /// 70-89
    High,
    /// 90-100
    VeryHigh,
}

impl CompletenessBand {
    #[must_use]
    pub fn from_index(index: f64) -> Self {
        if index >= 90.0 {
            Self::VeryHigh
        } else if index >= 70.0 {
            Self::High
        } else if index >= 50.0 {
            Self::Medium
        } else if index >= 30.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }

    /// Fixed interpretation shown with the index.
    #[must_use]
    pub const fn interpretation(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Evidence base is comprehensive; ranking is well supported.",
            Self::High => "Evidence base is solid; minor gaps unlikely to change the ranking.",
            Self::Medium => "Evidence base is partial; treat the ranking as indicative.",
            Self::Low => "Evidence base is weak; ranking is preliminary and may change.",
            Self::VeryLow => "Evidence base is insufficient; ranking is not reliable.",
        }
    }
}

/// Per-criterion completeness detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionCompleteness {
    /// `None` when every member is Blocked (N/A)
    pub ratio: Option<f64>,
    pub complete: usize,
    pub partial: usize,
    pub in_scope: usize,
    /// Weight after N/A criteria were redistributed
    pub effective_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletenessIndex {
    /// 0-100
    pub index: f64,
    pub band: CompletenessBand,
    pub interpretation: &'static str,
    pub breakdown: IndexMap<CriterionId, CriterionCompleteness>,
}

impl CompletenessIndex {
    /// `IC = Σ w_i · available_i / in_scope_i × 100`.
    ///
    /// Complete variables count 1, Partial variables `partial_credit`.
    /// Blocked variables leave both counts; a criterion with nothing left is
    /// N/A and its weight is redistributed over the others.
    #[must_use]
    pub fn compute(weights: &WeightVector, variables: &[VariableResult], partial_credit: f64) -> Self {
        let mut counts = [(0_usize, 0_usize, 0_usize); CriterionId::COUNT];
        for variable in variables.iter().filter(|v| !v.is_blocked()) {
            let slot = &mut counts[variable.criterion.index()];
            slot.2 += 1;
            match variable.status {
                EvidenceStatus::Complete => slot.0 += 1,
                EvidenceStatus::Partial => slot.1 += 1,
                _ => {}
            }
        }

        let applicable = counts.map(|(_, _, in_scope)| in_scope > 0);
        let effective = weights.renormalize(&applicable);

        let mut index = 0.0;
        let mut breakdown = IndexMap::with_capacity(CriterionId::COUNT);
        for criterion in CriterionId::ALL {
            let (complete, partial, in_scope) = counts[criterion.index()];
            let ratio = (in_scope > 0)
                .then(|| (complete as f64 + partial_credit * partial as f64) / in_scope as f64);
            if let Some(ratio) = ratio {
                index += effective.get(criterion) * ratio;
            }
            breakdown.insert(
                criterion,
                CriterionCompleteness {
                    ratio,
                    complete,
                    partial,
                    in_scope,
                    effective_weight: effective.get(criterion),
                },
            );
        }

        let index = (index * 100.0).clamp(0.0, 100.0);
        let band = CompletenessBand::from_index(index);
        Self {
            index,
            band,
            interpretation: band.interpretation(),
            breakdown,
        }
    }
}
