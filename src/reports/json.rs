//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::ahp::AhpSolution;
use crate::catalog;
use crate::pipeline::EvaluationReport;
use crate::suitability::SensitivityOutcome;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct AhpDocument<'a> {
    #[serde(flatten)]
    solution: &'a AhpSolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    inverted: Option<&'a AhpSolution>,
    warnings: &'a [String],
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    case: &'a str,
    report: &'a EvaluationReport,
}

impl ReportGenerator for JsonReporter {
    fn generate_evaluation_report(&self, report: &EvaluationReport) -> Result<String, ReportError> {
        self.render(report)
    }

    fn generate_ahp_report(
        &self,
        solution: &AhpSolution,
        inverted: Option<&AhpSolution>,
        warnings: &[String],
    ) -> Result<String, ReportError> {
        self.render(&AhpDocument {
            solution,
            inverted,
            warnings,
        })
    }

    fn generate_sensitivity_report(&self, outcome: &SensitivityOutcome) -> Result<String, ReportError> {
        self.render(outcome)
    }

    fn generate_batch_report(&self, reports: &[(String, EvaluationReport)]) -> Result<String, ReportError> {
        let entries: Vec<BatchEntry<'_>> = reports
            .iter()
            .map(|(case, report)| BatchEntry { case, report })
            .collect();
        self.render(&entries)
    }

    fn generate_catalog_report(&self) -> Result<String, ReportError> {
        self.render(catalog::variables())
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
