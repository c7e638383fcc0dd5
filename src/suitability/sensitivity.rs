//! One-at-a-time weight sensitivity sweep.
//!
//! The target criterion's weight is scaled by `1 + delta/100` for every delta
//! on a fixed symmetric grid, the other weights are rescaled proportionally to
//! keep the sum at 1, and the group ranking is recomputed. Rows are emitted in
//! ascending delta order and the first row whose ranking differs from the
//! delta = 0 row is the first-change point.

use serde::Serialize;

use super::global::{rank_groups, ranking_label, suitability_only};
use super::WeightVector;
use crate::config::SensitivityConfig;
use crate::model::{CriterionId, GroupScores, SensitivityRequest};

/// Largest accepted perturbation, in percent.
pub const MAX_RANGE_PERCENT: f64 = 50.0;

/// Most grid points on each side of delta 0.
pub const MAX_STEPS_PER_SIDE: usize = 500;

/// Grid resolution for delta values.
const DELTA_PRECISION: f64 = 1e9;

/// Result of one perturbation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityRow {
    pub delta_percent: f64,
    pub tested_weight: f64,
    pub weights: WeightVector,
    pub suitability: GroupScores,
    pub ranking: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityReport {
    pub criterion: CriterionId,
    pub base_weight: f64,
    /// Effective range after clamping
    pub range_percent: f64,
    /// Effective step after fallback
    pub step_percent: f64,
    pub baseline_ranking: String,
    pub rows: Vec<SensitivityRow>,
    /// First row, in ascending delta order, whose ranking differs from baseline
    pub first_change: Option<SensitivityRow>,
    pub fully_robust: bool,
}

/// Either a full sweep or the reason none was run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SensitivityOutcome {
    Ready(SensitivityReport),
    NotReady { criterion: String, reason: String },
}

impl SensitivityOutcome {
    #[must_use]
    pub const fn report(&self) -> Option<&SensitivityReport> {
        match self {
            Self::Ready(report) => Some(report),
            Self::NotReady { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Sweep runner holding the default range and step.
#[derive(Debug, Clone)]
pub struct SensitivityAnalyzer {
    default_range: f64,
    default_step: f64,
}

impl Default for SensitivityAnalyzer {
    fn default() -> Self {
        Self::from_config(&SensitivityConfig::default())
    }
}

impl SensitivityAnalyzer {
    #[must_use]
    pub fn from_config(config: &SensitivityConfig) -> Self {
        Self {
            default_range: config.range_percent,
            default_step: config.step_percent,
        }
    }

    /// Run the sweep described by `request` against a fixed score matrix.
    ///
    /// Out-of-range parameters are clamped or replaced by the defaults, and
    /// each adjustment is returned as a warning.
    #[must_use]
    pub fn analyze(
        &self,
        request: &SensitivityRequest,
        weights: &WeightVector,
        matrix: &[GroupScores; CriterionId::COUNT],
    ) -> (SensitivityOutcome, Vec<String>) {
        let mut warnings = Vec::new();

        let Ok(criterion) = request.criterion.parse::<CriterionId>() else {
            return (
                SensitivityOutcome::NotReady {
                    criterion: request.criterion.clone(),
                    reason: format!("unknown criterion '{}'", request.criterion),
                },
                warnings,
            );
        };
        let base_weight = weights.get(criterion);
        if base_weight <= 0.0 {
            return (
                SensitivityOutcome::NotReady {
                    criterion: criterion.id().to_string(),
                    reason: format!("{criterion} has weight 0; there is nothing to perturb"),
                },
                warnings,
            );
        }

        let range = self.effective_range(request.range_percent, &mut warnings);
        let step = self.effective_step(request.step_percent, range, &mut warnings);
        let baseline_ranking = ranking_label(&rank_groups(&suitability_only(weights, matrix)));

        let rows: Vec<SensitivityRow> = delta_grid(range, step)
            .into_iter()
            .map(|delta| {
                let tested_weight = (base_weight * (1.0 + delta / 100.0)).clamp(0.0, 1.0);
                let adjusted = weights.with_adjusted(criterion, tested_weight);
                let suitability = suitability_only(&adjusted, matrix);
                SensitivityRow {
                    delta_percent: delta,
                    tested_weight,
                    weights: adjusted,
                    suitability,
                    ranking: ranking_label(&rank_groups(&suitability)),
                }
            })
            .collect();

        let first_change = rows.iter().find(|row| row.ranking != baseline_ranking).cloned();
        tracing::debug!(
            "sensitivity on {criterion}: {} rows, first change at {:?}",
            rows.len(),
            first_change.as_ref().map(|row| row.delta_percent)
        );

        let report = SensitivityReport {
            criterion,
            base_weight,
            range_percent: range,
            step_percent: step,
            baseline_ranking,
            fully_robust: first_change.is_none(),
            first_change,
            rows,
        };
        (SensitivityOutcome::Ready(report), warnings)
    }

    fn effective_range(&self, requested: Option<f64>, warnings: &mut Vec<String>) -> f64 {
        let range = requested.unwrap_or(self.default_range);
        let clamped = if range.is_finite() {
            range.clamp(0.0, MAX_RANGE_PERCENT)
        } else {
            self.default_range.clamp(0.0, MAX_RANGE_PERCENT)
        };
        if clamped != range {
            let message = format!("sensitivity range {range}% clamped to {clamped}%");
            tracing::warn!("{message}");
            warnings.push(message);
        }
        clamped
    }

    fn effective_step(&self, requested: Option<f64>, range: f64, warnings: &mut Vec<String>) -> f64 {
        let step = requested.unwrap_or(self.default_step);
        let step = if step.is_finite() && step > 0.0 {
            step
        } else {
            let message = format!(
                "sensitivity step {step}% is not positive; using {}%",
                self.default_step
            );
            tracing::warn!("{message}");
            warnings.push(message);
            self.default_step
        };

        let min_step = range / MAX_STEPS_PER_SIDE as f64;
        if step < min_step {
            let message = format!(
                "sensitivity step {step}% raised to {min_step}% (at most {MAX_STEPS_PER_SIDE} steps per side)"
            );
            tracing::warn!("{message}");
            warnings.push(message);
            return min_step;
        }
        step
    }
}

/// Ascending, symmetric deltas `k * step` for `k = -m..=m` with
/// `m = floor(range / step)`, plus `±range` when it is not on the grid.
///
/// `m` is capped at [`MAX_STEPS_PER_SIDE`].
#[must_use]
pub fn delta_grid(range: f64, step: f64) -> Vec<f64> {
    if range <= 0.0 || step <= 0.0 || !range.is_finite() || !step.is_finite() {
        return vec![0.0];
    }
    let m = ((range / step + 1e-9).floor() as i64).min(MAX_STEPS_PER_SIDE as i64);
    let off_grid = range - m as f64 * step > 1e-9;

    let mut deltas = Vec::with_capacity(2 * m as usize + 3);
    if off_grid {
        deltas.push(-range);
    }
    deltas.extend((-m..=m).map(|k| round_delta(k as f64 * step)));
    if off_grid {
        deltas.push(range);
    }
    deltas
}

fn round_delta(value: f64) -> f64 {
    let rounded = (value * DELTA_PRECISION).round() / DELTA_PRECISION;
    // normalize -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> [GroupScores; 5] {
        [
            GroupScores::new(3.0, 3.0, 3.0),
            GroupScores::new(1.0, 4.0, 1.0),
            GroupScores::new(3.0, 2.0, 3.0),
            GroupScores::new(3.0, 3.0, 3.0),
            GroupScores::new(3.0, 3.0, 3.0),
        ]
    }

    #[test]
    fn test_delta_grid() {
        assert_eq!(
            delta_grid(20.0, 5.0),
            vec![-20.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0]
        );
        assert_eq!(
            delta_grid(12.0, 5.0),
            vec![-12.0, -10.0, -5.0, 0.0, 5.0, 10.0, 12.0]
        );
        assert_eq!(delta_grid(3.0, 5.0), vec![-3.0, 0.0, 3.0]);
        assert_eq!(delta_grid(0.0, 5.0), vec![0.0]);
        assert_eq!(delta_grid(1.0, 0.1).len(), 21);
        // capped grid still ends at ±range
        let capped = delta_grid(50.0, 1e-9);
        assert_eq!(capped.len(), 2 * MAX_STEPS_PER_SIDE + 3);
        assert_eq!(capped.first(), Some(&-50.0));
        assert_eq!(capped.last(), Some(&50.0));
    }

    #[test]
    fn test_tiny_step_is_raised() {
        let request = SensitivityRequest::new(CriterionId::C2).with_range(50.0, 1e-9);
        let (outcome, warnings) =
            SensitivityAnalyzer::default().analyze(&request, &WeightVector::uniform(), &matrix());
        let report = outcome.report().expect("ready");
        assert!((report.step_percent - 0.1).abs() < 1e-12);
        assert_eq!(report.rows.len(), 2 * MAX_STEPS_PER_SIDE + 1);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("raised"));
    }

    #[test]
    fn test_zero_base_weight_is_not_ready() {
        let weights = WeightVector::from_array([0.0, 0.5, 0.5, 0.0, 0.0]).expect("valid");
        let request = SensitivityRequest::new(CriterionId::C1);
        let (outcome, _) = SensitivityAnalyzer::default().analyze(&request, &weights, &matrix());
        assert!(!outcome.is_ready());
        assert!(matches!(outcome, SensitivityOutcome::NotReady { ref criterion, .. } if criterion == "C1"));
    }

    #[test]
    fn test_unknown_criterion_is_not_ready() {
        let request = SensitivityRequest {
            criterion: "C7".to_string(),
            range_percent: None,
            step_percent: None,
        };
        let (outcome, _) =
            SensitivityAnalyzer::default().analyze(&request, &WeightVector::uniform(), &matrix());
        assert!(outcome.report().is_none());
    }

    #[test]
    fn test_zero_delta_row_matches_baseline() {
        let request = SensitivityRequest::new(CriterionId::C2).with_range(20.0, 5.0);
        let (outcome, warnings) =
            SensitivityAnalyzer::default().analyze(&request, &WeightVector::uniform(), &matrix());
        assert!(warnings.is_empty());
        let report = outcome.report().expect("ready");
        let zero = report
            .rows
            .iter()
            .find(|row| row.delta_percent == 0.0)
            .expect("zero row");
        assert_eq!(zero.ranking, report.baseline_ranking);
        assert_eq!(zero.weights, WeightVector::uniform());
        for row in &report.rows {
            assert!((row.weights.sum() - 1.0).abs() < 1e-9);
        }
        assert!(report.fully_robust);
        assert!(report.first_change.is_none());
    }

    #[test]
    fn test_parameters_are_clamped() {
        let request = SensitivityRequest::new(CriterionId::C2).with_range(80.0, -1.0);
        let (outcome, warnings) =
            SensitivityAnalyzer::default().analyze(&request, &WeightVector::uniform(), &matrix());
        let report = outcome.report().expect("ready");
        assert_eq!(report.range_percent, 50.0);
        assert_eq!(report.step_percent, 5.0);
        assert_eq!(report.rows.len(), 21);
        assert_eq!(warnings.len(), 2);
    }
}
