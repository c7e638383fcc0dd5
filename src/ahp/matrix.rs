//! Reciprocal pairwise comparison matrix.

use serde::Serialize;

use crate::model::{CriterionId, PairwiseJudgment, Winner};

/// Lowest Saaty intensity (equal importance).
pub const MIN_INTENSITY: f64 = 1.0;
/// Highest Saaty intensity (extreme importance).
pub const MAX_INTENSITY: f64 = 9.0;

/// Square positive matrix with `M[i][j] * M[j][i] = 1` and a unit diagonal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "Vec<Vec<f64>>")]
pub struct PairwiseMatrix {
    size: usize,
    /// Row-major entries
    values: Vec<f64>,
}

impl PairwiseMatrix {
    /// All-ones matrix: every element equally important.
    #[must_use]
    pub fn identity(size: usize) -> Self {
        Self {
            size,
            values: vec![1.0; size * size],
        }
    }

    /// Perfectly consistent matrix `M[i][j] = w_i / w_j`.
    ///
    /// Non-positive weights are treated as equal importance for their pairs.
    #[must_use]
    pub fn from_weights(weights: &[f64]) -> Self {
        let mut matrix = Self::identity(weights.len());
        for i in 0..weights.len() {
            for j in (i + 1)..weights.len() {
                if weights[i] > 0.0 && weights[j] > 0.0 {
                    matrix.set_pair(i, j, weights[i] / weights[j]);
                }
            }
        }
        matrix
    }

    /// Build the criterion matrix from judgments.
    ///
    /// Pairs may be listed in either orientation and the last entry for a pair
    /// wins. Self-pairs and unknown ids are skipped; every skip or clamp is
    /// returned as a warning.
    #[must_use]
    pub fn from_judgments(judgments: &[PairwiseJudgment]) -> (Self, Vec<String>) {
        let mut matrix = Self::identity(CriterionId::COUNT);
        let mut warnings = Vec::new();

        for judgment in judgments {
            let (Ok(a), Ok(b)) = (
                judgment.a.parse::<CriterionId>(),
                judgment.b.parse::<CriterionId>(),
            ) else {
                let message = format!(
                    "judgment {} vs {} ignored: unknown criterion id",
                    judgment.a, judgment.b
                );
                tracing::warn!("{message}");
                warnings.push(message);
                continue;
            };
            if a == b {
                let message = format!("judgment {a} vs {b} ignored: a criterion cannot be compared with itself");
                tracing::warn!("{message}");
                warnings.push(message);
                continue;
            }

            let intensity = clamp_intensity(judgment.intensity);
            if intensity != judgment.intensity {
                let message = format!(
                    "judgment {a} vs {b}: intensity {} clamped to {intensity}",
                    judgment.intensity
                );
                tracing::warn!("{message}");
                warnings.push(message);
            }

            let value = match judgment.winner {
                Winner::A => intensity,
                Winner::B => 1.0 / intensity,
            };
            matrix.set_pair(a.index(), b.index(), value);
        }

        (matrix, warnings)
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.size + col]
    }

    /// Set `M[i][j] = value` and its reciprocal `M[j][i]`.
    pub fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        if i == j || value <= 0.0 || !value.is_finite() {
            return;
        }
        self.values[i * self.size + j] = value;
        self.values[j * self.size + i] = 1.0 / value;
    }

    /// `M · v`
    #[must_use]
    pub fn multiply(&self, vector: &[f64]) -> Vec<f64> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.get(row, col) * vector.get(col).copied().unwrap_or(0.0))
                    .sum()
            })
            .collect()
    }

    /// Matrix with rows and columns relabelled: `M'[i][j] = M[p[i]][p[j]]`.
    #[must_use]
    pub fn permuted(&self, permutation: &[usize]) -> Self {
        let mut values = Vec::with_capacity(self.values.len());
        for i in 0..self.size {
            for j in 0..self.size {
                values.push(self.get(permutation[i], permutation[j]));
            }
        }
        Self {
            size: self.size,
            values,
        }
    }

    /// Reciprocity within `tolerance`, diagonal included.
    #[must_use]
    pub fn is_reciprocal(&self, tolerance: f64) -> bool {
        (0..self.size).all(|i| {
            (0..self.size).all(|j| (self.get(i, j) * self.get(j, i) - 1.0).abs() <= tolerance)
        })
    }

    #[must_use]
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.size.max(1))
            .map(<[f64]>::to_vec)
            .collect()
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.rows()
    }
}

/// Clamp to the Saaty scale; non-finite input reads as equal importance.
#[must_use]
pub fn clamp_intensity(intensity: f64) -> f64 {
    if intensity.is_finite() {
        intensity.clamp(MIN_INTENSITY, MAX_INTENSITY)
    } else {
        MIN_INTENSITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn judgment(a: &str, b: &str, winner: Winner, intensity: f64) -> PairwiseJudgment {
        PairwiseJudgment {
            a: a.to_string(),
            b: b.to_string(),
            winner,
            intensity,
        }
    }

    #[test]
    fn test_default_matrix_is_all_ones() {
        let (matrix, warnings) = PairwiseMatrix::from_judgments(&[]);
        assert!(warnings.is_empty());
        assert_eq!(matrix.size(), 5);
        assert!(matrix.rows().iter().flatten().all(|v| (*v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_winner_orientation_and_reciprocity() {
        let (matrix, _) = PairwiseMatrix::from_judgments(&[
            judgment("C1", "C2", Winner::B, 3.0),
            judgment("C4", "C3", Winner::A, 5.0),
        ]);
        assert!((matrix.get(0, 1) - 1.0 / 3.0).abs() < 1e-12);
        assert!((matrix.get(1, 0) - 3.0).abs() < 1e-12);
        assert!((matrix.get(3, 2) - 5.0).abs() < 1e-12);
        assert!((matrix.get(2, 3) - 0.2).abs() < 1e-12);
        assert!(matrix.is_reciprocal(1e-12));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let (matrix, _) = PairwiseMatrix::from_judgments(&[
            judgment("C1", "C2", Winner::A, 7.0),
            judgment("C2", "C1", Winner::A, 2.0),
        ]);
        assert!((matrix.get(1, 0) - 2.0).abs() < 1e-12);
        assert!((matrix.get(0, 1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_judgments_are_skipped_with_warnings() {
        let (matrix, warnings) = PairwiseMatrix::from_judgments(&[
            judgment("C1", "C9", Winner::A, 3.0),
            judgment("C2", "C2", Winner::A, 3.0),
            judgment("C3", "C5", Winner::A, 42.0),
        ]);
        assert_eq!(warnings.len(), 3);
        assert!((matrix.get(2, 4) - 9.0).abs() < 1e-12);
        assert!(matrix.is_reciprocal(1e-12));
    }

    #[test]
    fn test_permuted_matrix_stays_reciprocal() {
        let matrix = PairwiseMatrix::from_weights(&[0.4, 0.3, 0.15, 0.1, 0.05]);
        let permuted = matrix.permuted(&[4, 3, 2, 1, 0]);
        assert!(permuted.is_reciprocal(1e-12));
        assert!((permuted.get(0, 4) - matrix.get(4, 0)).abs() < 1e-12);
    }
}
