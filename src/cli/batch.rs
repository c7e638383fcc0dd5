//! Batch command handler.
//!
//! Loads every case up front, then evaluates them in parallel.

use super::{emit, gate_exit_code, load_case, AppConfig};
use crate::pipeline::{exit_codes, SuitabilityEngine};
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Run the batch command. The exit code is the worst gate result.
pub fn run_batch(case_paths: &[PathBuf], config: &AppConfig) -> Result<i32> {
    if case_paths.is_empty() {
        bail!("batch needs at least one case file");
    }

    let cases = case_paths
        .iter()
        .map(|path| load_case(path))
        .collect::<Result<Vec<_>>>()?;

    let engine = SuitabilityEngine::new(config);
    let reports = engine.evaluate_batch(&cases);
    tracing::info!("Evaluated {} cases", reports.len());

    let labelled: Vec<(String, _)> = case_paths
        .iter()
        .map(|path| path.display().to_string())
        .zip(reports)
        .collect();

    emit(config, |reporter| reporter.generate_batch_report(&labelled))?;

    let code = labelled
        .iter()
        .map(|(_, report)| gate_exit_code(report, &config.behavior))
        .max()
        .unwrap_or(exit_codes::SUCCESS);
    Ok(code)
}
