//! Evaluate command handler.
//!
//! Implements the `evaluate` subcommand: one case file in, one report out.

use super::{emit, gate_exit_code, load_case, AppConfig};
use crate::model::{CriterionId, ScenarioSelection, SensitivityRequest};
use crate::pipeline::SuitabilityEngine;
use anyhow::Result;
use std::path::PathBuf;

/// Per-invocation overrides layered over the case document
#[derive(Debug, Clone, Default)]
pub struct EvaluateOptions {
    pub case_path: PathBuf,
    /// Replaces the document's `scenario` when set
    pub scenario: Option<ScenarioSelection>,
    /// Adds (or replaces) a sensitivity request
    pub criterion: Option<CriterionId>,
    pub range_percent: Option<f64>,
    pub step_percent: Option<f64>,
    pub invert_hierarchy: bool,
}

/// Run the evaluate command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_evaluate(options: EvaluateOptions, config: &AppConfig) -> Result<i32> {
    let mut case = load_case(&options.case_path)?;

    if let Some(scenario) = options.scenario {
        case.scenario = scenario;
    }
    if options.invert_hierarchy {
        case.weighting.invert_hierarchy = true;
    }
    if let Some(criterion) = options.criterion {
        case.sensitivity = Some(SensitivityRequest {
            criterion: criterion.id().to_string(),
            range_percent: options.range_percent,
            step_percent: options.step_percent,
        });
    }

    let engine = SuitabilityEngine::new(config);
    let report = engine.evaluate(&case);
    tracing::info!(
        "Evaluated {}: {} (IC {:.1}%)",
        options.case_path.display(),
        report.global.ranking_label,
        report.completeness.index
    );

    emit(config, |reporter| reporter.generate_evaluation_report(&report))?;
    Ok(gate_exit_code(&report, &config.behavior))
}
