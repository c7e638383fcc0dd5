//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod ahp;
mod batch;
mod catalog;
mod evaluate;
mod sensitivity;

pub use ahp::run_ahp;
pub use batch::run_batch;
pub use catalog::run_catalog;
pub use evaluate::{run_evaluate, EvaluateOptions};
pub use sensitivity::{run_sensitivity, SensitivityOptions};

// Re-export config types used by handlers
pub use crate::config::{AppConfig, BehaviorConfig};

use crate::model::CaseInput;
use crate::pipeline::{
    auto_detect_format, exit_codes, should_use_color, write_output, EvaluationReport,
    OutputTarget, PipelineError,
};
use crate::reports::{create_reporter_with_options, ReportError, ReportGenerator};
use anyhow::Result;
use std::path::Path;

/// Read a case document, tagging failures with the path.
fn load_case(path: &Path) -> Result<CaseInput> {
    let case = CaseInput::from_path(path).map_err(|e| PipelineError::LoadFailed {
        path: path.display().to_string(),
        source: e.into(),
    })?;
    tracing::info!("Loaded case {}", path.display());
    Ok(case)
}

/// Resolve format and color for the configured target, render, and write.
fn emit<F>(config: &AppConfig, generate: F) -> Result<()>
where
    F: FnOnce(&dyn ReportGenerator) -> std::result::Result<String, ReportError>,
{
    let target = OutputTarget::from_option(config.output.file.clone());
    let format = auto_detect_format(config.output.format, &target);
    let colored = should_use_color(config.output.no_color) && target.is_terminal();
    let reporter = create_reporter_with_options(format, colored);
    let content = generate(reporter.as_ref()).map_err(|e| PipelineError::ReportFailed {
        source: e.into(),
    })?;
    write_output(&content, &target, config.behavior.quiet)
}

/// Apply the `--min-suitability` and `--require-consistent` gates.
#[must_use]
pub fn gate_exit_code(report: &EvaluationReport, behavior: &BehaviorConfig) -> i32 {
    if let Some(min) = behavior.min_suitability {
        let best = report.best_suitability();
        if best < min {
            tracing::error!(
                "Best suitability {:.3} ({}) is below minimum threshold {:.3}",
                best,
                report.leader(),
                min
            );
            return exit_codes::THRESHOLD_NOT_MET;
        }
    }
    if behavior.require_consistent && !report.is_consistent() {
        tracing::error!("Pairwise judgments are inconsistent and --require-consistent is set");
        return exit_codes::THRESHOLD_NOT_MET;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CriterionId, EvidenceSnapshot, PairwiseJudgment, Winner};
    use crate::pipeline::SuitabilityEngine;

    fn evaluate(input: &CaseInput) -> EvaluationReport {
        SuitabilityEngine::default().evaluate(input)
    }

    #[test]
    fn test_gate_passes_by_default() {
        let report = evaluate(&CaseInput::default());
        assert_eq!(gate_exit_code(&report, &BehaviorConfig::default()), exit_codes::SUCCESS);
    }

    #[test]
    fn test_min_suitability_gate() {
        let report = evaluate(&CaseInput::default());
        let behavior = BehaviorConfig {
            min_suitability: Some(1.0),
            ..BehaviorConfig::default()
        };
        assert_eq!(gate_exit_code(&report, &behavior), exit_codes::THRESHOLD_NOT_MET);
    }

    #[test]
    fn test_require_consistent_gate() {
        // C1 > C2, C2 > C3 but C3 > C1: cyclic and far from consistent
        let judgments = vec![
            PairwiseJudgment::new(CriterionId::C1, CriterionId::C2, Winner::A, 9.0),
            PairwiseJudgment::new(CriterionId::C2, CriterionId::C3, Winner::A, 9.0),
            PairwiseJudgment::new(CriterionId::C1, CriterionId::C3, Winner::B, 9.0),
        ];
        let report = evaluate(&CaseInput::new(EvidenceSnapshot::new()).with_judgments(judgments));
        assert!(!report.is_consistent());
        let behavior = BehaviorConfig {
            require_consistent: true,
            ..BehaviorConfig::default()
        };
        assert_eq!(gate_exit_code(&report, &behavior), exit_codes::THRESHOLD_NOT_MET);
    }
}
