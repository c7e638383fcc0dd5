//! AHP command handler.
//!
//! Solves a standalone judgments file without any case evidence.

use super::{emit, AppConfig};
use crate::ahp::AhpEngine;
use crate::model::PairwiseJudgment;
use crate::pipeline::{exit_codes, PipelineError};
use anyhow::Result;
use std::path::Path;

/// Run the ahp command, returning the desired exit code.
pub fn run_ahp(judgments_path: &Path, invert_hierarchy: bool, config: &AppConfig) -> Result<i32> {
    let judgments = PairwiseJudgment::load_list(judgments_path).map_err(|e| {
        PipelineError::LoadFailed {
            path: judgments_path.display().to_string(),
            source: e.into(),
        }
    })?;
    tracing::info!("Loaded {} judgments from {}", judgments.len(), judgments_path.display());

    let engine = AhpEngine::from_config(&config.engine);
    let (solution, warnings) = engine.solve_judgments(&judgments);
    let inverted = invert_hierarchy.then(|| engine.invert_hierarchy(&solution));

    emit(config, |reporter| {
        reporter.generate_ahp_report(&solution, inverted.as_ref(), &warnings)
    })?;

    if config.behavior.require_consistent && !solution.consistent {
        tracing::error!(
            "Consistency ratio {:.4} exceeds threshold {:.2}",
            solution.consistency_ratio,
            engine.consistency_threshold()
        );
        return Ok(exit_codes::THRESHOLD_NOT_MET);
    }
    Ok(exit_codes::SUCCESS)
}
