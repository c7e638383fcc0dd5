//! Analytic Hierarchy Process: criterion weights from pairwise judgments.
//!
//! Judgments on the Saaty 1-9 scale build a reciprocal matrix whose principal
//! eigenvector, estimated by a fixed number of power iterations, gives the
//! criterion weights. The consistency ratio is reported, never enforced.
//!
//! ```
//! use mar_suitability::ahp::AhpEngine;
//! use mar_suitability::model::{CriterionId, PairwiseJudgment, Winner};
//!
//! let judgments = vec![PairwiseJudgment::new(CriterionId::C2, CriterionId::C1, Winner::A, 3.0)];
//! let (solution, _warnings) = AhpEngine::new().solve_judgments(&judgments);
//! assert!(solution.weights[1] > solution.weights[0]);
//! ```

mod engine;
mod matrix;

pub use engine::{
    mirror_permutation, random_index, AhpEngine, AhpSolution, DEFAULT_CONSISTENCY_THRESHOLD,
    DEFAULT_ITERATIONS, RANDOM_INDEX,
};
pub use matrix::{clamp_intensity, PairwiseMatrix, MAX_INTENSITY, MIN_INTENSITY};
