//! Global suitability (WLC across criteria) and group ranking.

use indexmap::IndexMap;
use serde::Serialize;

use super::WeightVector;
use crate::model::{CriterionId, GroupScores, TechGroup};

/// Separator used in ranking strings.
pub const RANKING_SEPARATOR: &str = " > ";

/// Suitability per group with its per-criterion breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalSuitability {
    pub suitability: GroupScores,
    /// `weight[i] * score[i][G]` per criterion, in C1..C5 order
    pub contributions: IndexMap<CriterionId, GroupScores>,
    /// Groups by descending suitability, ties in G1, G2, G3 order
    pub ranking: Vec<TechGroup>,
    pub ranking_label: String,
}

impl GlobalSuitability {
    /// Weighted linear combination of the criterion score matrix.
    #[must_use]
    pub fn compute(weights: &WeightVector, matrix: &[GroupScores; CriterionId::COUNT]) -> Self {
        let mut suitability = GroupScores::zero();
        let mut contributions = IndexMap::with_capacity(CriterionId::COUNT);

        for criterion in CriterionId::ALL {
            let weight = weights.get(criterion);
            let contribution = matrix[criterion.index()].map(|score| weight * score);
            for group in TechGroup::ALL {
                suitability.set(group, suitability.get(group) + contribution.get(group));
            }
            contributions.insert(criterion, contribution);
        }

        let ranking = rank_groups(&suitability);
        let ranking_label = ranking_label(&ranking);
        Self {
            suitability,
            contributions,
            ranking,
            ranking_label,
        }
    }

    /// Best-ranked group.
    #[must_use]
    pub fn leader(&self) -> TechGroup {
        self.ranking.first().copied().unwrap_or(TechGroup::G1)
    }
}

/// Only the suitability vector, for sweeps that don't need the breakdown.
#[must_use]
pub fn suitability_only(weights: &WeightVector, matrix: &[GroupScores; CriterionId::COUNT]) -> GroupScores {
    let mut suitability = GroupScores::zero();
    for criterion in CriterionId::ALL {
        let weight = weights.get(criterion);
        for group in TechGroup::ALL {
            let score = matrix[criterion.index()].get(group);
            suitability.set(group, suitability.get(group) + weight * score);
        }
    }
    suitability
}

/// Descending stable sort of the groups by suitability.
#[must_use]
pub fn rank_groups(suitability: &GroupScores) -> Vec<TechGroup> {
    let mut ranking = TechGroup::ALL.to_vec();
    ranking.sort_by(|a, b| {
        suitability
            .get(*b)
            .partial_cmp(&suitability.get(*a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranking
}

#[must_use]
pub fn ranking_label(ranking: &[TechGroup]) -> String {
    ranking
        .iter()
        .map(|g| g.id())
        .collect::<Vec<_>>()
        .join(RANKING_SEPARATOR)
}
