//! Report generation for evaluation results.
//!
//! Two formats:
//! - JSON: the full output contract, for programmatic integration
//! - Summary: aligned, optionally colored text for the terminal

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use crate::ahp::AhpSolution;
use crate::pipeline::EvaluationReport;
use crate::suitability::SensitivityOutcome;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for one evaluated case
    fn generate_evaluation_report(&self, report: &EvaluationReport) -> Result<String, ReportError>;

    /// Generate a report for a standalone AHP solve
    fn generate_ahp_report(
        &self,
        solution: &AhpSolution,
        inverted: Option<&AhpSolution>,
        warnings: &[String],
    ) -> Result<String, ReportError>;

    /// Generate a report for a sensitivity sweep
    fn generate_sensitivity_report(&self, outcome: &SensitivityOutcome) -> Result<String, ReportError>;

    /// Generate a report for several labelled cases
    fn generate_batch_report(&self, reports: &[(String, EvaluationReport)]) -> Result<String, ReportError>;

    /// Generate a listing of the variable catalog
    fn generate_catalog_report(&self) -> Result<String, ReportError>;

    /// Write an evaluation report to a writer
    fn write_evaluation_report(
        &self,
        report: &EvaluationReport,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let content = self.generate_evaluation_report(report)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
///
/// `Auto` should be resolved by the caller; it falls back to the summary.
#[must_use]
pub fn create_reporter_with_options(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
