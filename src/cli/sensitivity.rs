//! Sensitivity command handler.

use super::{emit, load_case, AppConfig};
use crate::model::{CriterionId, SensitivityRequest};
use crate::pipeline::{exit_codes, SuitabilityEngine};
use crate::suitability::SensitivityOutcome;
use anyhow::Result;
use std::path::PathBuf;

/// Sensitivity command configuration
#[derive(Debug, Clone)]
pub struct SensitivityOptions {
    pub case_path: PathBuf,
    pub criterion: CriterionId,
    pub range_percent: Option<f64>,
    pub step_percent: Option<f64>,
}

/// Run a one-at-a-time sweep for a single criterion of a case.
///
/// A sweep that cannot run (zero base weight) is reported, not an error.
pub fn run_sensitivity(options: SensitivityOptions, config: &AppConfig) -> Result<i32> {
    let mut case = load_case(&options.case_path)?;
    case.sensitivity = Some(SensitivityRequest {
        criterion: options.criterion.id().to_string(),
        range_percent: options.range_percent,
        step_percent: options.step_percent,
    });

    let report = SuitabilityEngine::new(config).evaluate(&case);
    let outcome = report.sensitivity.unwrap_or_else(|| SensitivityOutcome::NotReady {
        criterion: options.criterion.id().to_string(),
        reason: "no sweep was run".to_string(),
    });
    for warning in &report.warnings {
        tracing::warn!("{warning}");
    }

    emit(config, |reporter| reporter.generate_sensitivity_report(&outcome))?;
    Ok(exit_codes::SUCCESS)
}
