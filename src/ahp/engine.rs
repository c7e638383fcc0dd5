//! Priority vector estimation and consistency validation.

use serde::Serialize;

use super::matrix::PairwiseMatrix;
use crate::config::EngineConfig;
use crate::model::PairwiseJudgment;

/// Saaty random index, `RANDOM_INDEX[n - 1]` for `n` = 1..=10.
pub const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Fixed power-iteration budget.
pub const DEFAULT_ITERATIONS: usize = 50;

/// CR above this marks the judgments inconsistent.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Random index for an `n`-element matrix; sizes above 10 reuse RI(10).
#[must_use]
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        n => RANDOM_INDEX[n.min(RANDOM_INDEX.len()) - 1],
    }
}

/// Weights and consistency measures for one matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AhpSolution {
    pub matrix: PairwiseMatrix,
    pub weights: Vec<f64>,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub consistency_ratio: f64,
    /// CR within the configured threshold
    pub consistent: bool,
    pub iterations: usize,
    /// L1 change of the priority vector in the last iteration
    pub residual: f64,
}

/// Power-iteration AHP solver.
#[derive(Debug, Clone)]
pub struct AhpEngine {
    iterations: usize,
    consistency_threshold: f64,
}

impl Default for AhpEngine {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            consistency_threshold: DEFAULT_CONSISTENCY_THRESHOLD,
        }
    }
}

impl AhpEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            iterations: config.ahp_iterations,
            consistency_threshold: config.consistency_threshold,
        }
    }

    #[must_use]
    pub const fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub const fn with_consistency_threshold(mut self, threshold: f64) -> Self {
        self.consistency_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn consistency_threshold(&self) -> f64 {
        self.consistency_threshold
    }

    /// Build the criterion matrix from judgments and solve it.
    #[must_use]
    pub fn solve_judgments(&self, judgments: &[PairwiseJudgment]) -> (AhpSolution, Vec<String>) {
        let (matrix, mut warnings) = PairwiseMatrix::from_judgments(judgments);
        let solution = self.solve(matrix);
        if !solution.consistent {
            let message = format!(
                "pairwise judgments are inconsistent: CR = {:.3} exceeds {:.2}",
                solution.consistency_ratio, self.consistency_threshold
            );
            tracing::warn!("{message}");
            warnings.push(message);
        }
        (solution, warnings)
    }

    /// Estimate the priority vector by power iteration from the uniform vector.
    ///
    /// The iteration count is fixed; convergence is reported through
    /// `residual` but never shortens the run.
    #[must_use]
    pub fn solve(&self, matrix: PairwiseMatrix) -> AhpSolution {
        let n = matrix.size();
        let mut weights = vec![1.0 / n.max(1) as f64; n];
        let mut residual = 0.0;

        for _ in 0..self.iterations {
            let next = matrix.multiply(&weights);
            let sum: f64 = next.iter().sum();
            if sum <= 0.0 || !sum.is_finite() {
                break;
            }
            let next: Vec<f64> = next.iter().map(|v| v / sum).collect();
            residual = next.iter().zip(&weights).map(|(a, b)| (a - b).abs()).sum();
            weights = next;
        }
        tracing::debug!(
            "AHP power iteration: {} iterations, residual {residual:.3e}",
            self.iterations
        );

        self.with_consistency(matrix, weights, residual)
    }

    /// Attach λmax, CI and CR for a matrix and a given weight vector.
    fn with_consistency(&self, matrix: PairwiseMatrix, weights: Vec<f64>, residual: f64) -> AhpSolution {
        let n = matrix.size();
        let lambda_max = principal_eigenvalue(&matrix, &weights);
        let consistency_index = if n > 1 {
            ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0)
        } else {
            0.0
        };
        let ri = random_index(n);
        let consistency_ratio = if ri > 0.0 {
            consistency_index / ri
        } else {
            0.0
        };

        AhpSolution {
            matrix,
            weights,
            lambda_max,
            consistency_index,
            consistency_ratio,
            consistent: consistency_ratio <= self.consistency_threshold,
            iterations: self.iterations,
            residual,
        }
    }

    /// Mirror-rank "what-if": the criterion ranked `r` takes the weight of the
    /// one ranked `n - 1 - r`, and the matrix is relabelled to match.
    #[must_use]
    pub fn invert_hierarchy(&self, solution: &AhpSolution) -> AhpSolution {
        let mirror = mirror_permutation(&solution.weights);
        let weights: Vec<f64> = mirror.iter().map(|&source| solution.weights[source]).collect();
        let matrix = solution.matrix.permuted(&mirror);
        self.with_consistency(matrix, weights, solution.residual)
    }
}

/// λmax as the mean of `(M·w)[i] / w[i]` over entries with positive weight.
fn principal_eigenvalue(matrix: &PairwiseMatrix, weights: &[f64]) -> f64 {
    let product = matrix.multiply(weights);
    let ratios: Vec<f64> = product
        .iter()
        .zip(weights)
        .filter(|(_, w)| **w > 0.0)
        .map(|(mw, w)| mw / w)
        .collect();
    if ratios.is_empty() {
        return matrix.size() as f64;
    }
    ratios.iter().sum::<f64>() / ratios.len() as f64
}

/// `p[i]` = index whose weight criterion `i` receives after inversion.
///
/// Ranks are by descending weight with ties kept in original order.
#[must_use]
pub fn mirror_permutation(weights: &[f64]) -> Vec<usize> {
    let n = weights.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        weights[b]
            .partial_cmp(&weights[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut mirror = vec![0; n];
    for (rank, &criterion) in order.iter().enumerate() {
        mirror[criterion] = order[n - 1 - rank];
    }
    mirror
}
