//! Pipeline orchestration: load → evaluate → report.
//!
//! [`SuitabilityEngine`] runs every stage for one case; the batch helpers
//! fan independent cases out over a rayon pool. Output helpers are shared by
//! the CLI handlers.

mod batch;
mod engine;
mod output;
mod result;

pub use engine::SuitabilityEngine;
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use result::{EvaluationReport, ScenarioReport, WeightsReport, ENGINE_VERSION};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an input document
    #[error("Load failed for {path}: {source}")]
    LoadFailed {
        path: String,
        source: anyhow::Error,
    },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// A `--min-suitability` or `--require-consistent` gate was not met
    pub const THRESHOLD_NOT_MET: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::THRESHOLD_NOT_MET, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::LoadFailed {
            path: "case.json".to_string(),
            source: anyhow::anyhow!("missing field `evidence`"),
        };
        assert!(err.to_string().contains("case.json"));
    }
}
