//! Suitability across criteria: weights, WLC ranking, completeness index,
//! sensitivity sweep and evidence-gap recommendations.

mod completeness;
mod global;
mod recommendations;
mod sensitivity;
mod weights;

pub use completeness::{
    CompletenessBand, CompletenessIndex, CriterionCompleteness, DEFAULT_PARTIAL_CREDIT,
};
pub use global::{
    rank_groups, ranking_label, suitability_only, GlobalSuitability, RANKING_SEPARATOR,
};
pub use recommendations::{
    generate_recommendations, missing_for_next, Recommendation, RecommendationCategory,
    RecommendationContext,
};
pub use sensitivity::{
    delta_grid, SensitivityAnalyzer, SensitivityOutcome, SensitivityReport, SensitivityRow,
    MAX_RANGE_PERCENT, MAX_STEPS_PER_SIDE,
};
pub use weights::{WeightSource, WeightVector};
