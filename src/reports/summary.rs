//! Summary report generator for shell output.
//!
//! Provides a compact, aligned, human-readable view of an evaluation.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::ahp::AhpSolution;
use crate::catalog;
use crate::model::{CriterionId, GroupScores, TechGroup};
use crate::pipeline::EvaluationReport;
use crate::suitability::{CompletenessBand, SensitivityOutcome, SensitivityReport};
use unicode_width::UnicodeWidthStr;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Pad to a display width; names carry accented characters.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    if used >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - used))
    }
}

fn triple(scores: &GroupScores) -> String {
    let [g1, g2, g3] = scores.as_array();
    format!("{g1:>5.2} {g2:>5.2} {g3:>5.2}")
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(48).as_str(), "dim"));
    }

    fn band_color(band: CompletenessBand) -> &'static str {
        match band {
            CompletenessBand::VeryLow | CompletenessBand::Low => "red",
            CompletenessBand::Medium => "yellow",
            CompletenessBand::High | CompletenessBand::VeryHigh => "green",
        }
    }

    fn ahp_lines(&self, lines: &mut Vec<String>, label: &str, solution: &AhpSolution) {
        let verdict = if solution.consistent {
            self.color("consistent", "green")
        } else {
            self.color("inconsistent", "red")
        };
        lines.push(format!(
            "{} λmax={:.4}  CI={:.4}  CR={:.4}  {}",
            self.color(label, "cyan"),
            solution.lambda_max,
            solution.consistency_index,
            solution.consistency_ratio,
            verdict
        ));
        for (criterion, weight) in CriterionId::ALL.iter().zip(&solution.weights) {
            lines.push(format!(
                "  {} {}  {:>6.2}%",
                criterion,
                pad(criterion.name(), 34),
                weight * 100.0
            ));
        }
    }

    fn sensitivity_lines(&self, lines: &mut Vec<String>, outcome: &SensitivityOutcome, detailed: bool) {
        match outcome {
            SensitivityOutcome::NotReady { criterion, reason } => {
                lines.push(format!(
                    "{} {criterion}: {}",
                    self.color("Sensitivity:", "cyan"),
                    self.color(reason, "yellow")
                ));
            }
            SensitivityOutcome::Ready(report) => {
                lines.push(format!(
                    "{} {} base {:.1}% (±{}% step {}%)",
                    self.color("Sensitivity:", "cyan"),
                    report.criterion,
                    report.base_weight * 100.0,
                    report.range_percent,
                    report.step_percent
                ));
                lines.push(format!("  baseline  {}", report.baseline_ranking));
                lines.push(format!("  {}", self.first_change_line(report)));
                if detailed {
                    lines.push(String::new());
                    lines.push(format!(
                        "  {:>7}  {:>7}  {:>5} {:>5} {:>5}  ranking",
                        "delta", "weight", "G1", "G2", "G3"
                    ));
                    for row in &report.rows {
                        lines.push(format!(
                            "  {:>+6.1}%  {:>6.2}%  {}  {}",
                            row.delta_percent,
                            row.tested_weight * 100.0,
                            triple(&row.suitability),
                            row.ranking
                        ));
                    }
                }
            }
        }
    }

    fn first_change_line(&self, report: &SensitivityReport) -> String {
        match &report.first_change {
            Some(row) => self.color(
                &format!(
                    "ranking changes at {:+.1}% (weight {:.2}%): {}",
                    row.delta_percent,
                    row.tested_weight * 100.0,
                    row.ranking
                ),
                "yellow",
            ),
            None => self.color("fully robust across the tested range", "green"),
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_evaluation_report(&self, report: &EvaluationReport) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, "MAR Suitability Summary");

        let scenario = &report.scenario;
        lines.push(format!(
            "{} detected {}, applied {}",
            self.color("Scenario:", "cyan"),
            scenario.detected,
            scenario.applied
        ));
        if !scenario.blocked.is_empty() {
            lines.push(format!(
                "  {} variables blocked by the scenario",
                scenario.blocked.len()
            ));
        }
        if let Some(next) = scenario.next {
            let missing: Vec<String> = scenario.missing_for_next.iter().map(ToString::to_string).collect();
            lines.push(format!("  to reach {next}: {}", missing.join(", ")));
        }
        lines.push(String::new());

        lines.push(format!(
            "{}  {} {:>5} {:>5} {:>5}  {:>7}  confidence",
            self.color("Criteria", "bold"),
            pad("", 30),
            "G1",
            "G2",
            "G3",
            "weight"
        ));
        for criterion in &report.criteria {
            let confidence = if criterion.critical_gap {
                self.color("critical gap", "red")
            } else {
                criterion.confidence.label().to_string()
            };
            lines.push(format!(
                "  {} {}  {}  {:>6.2}%  {}",
                criterion.criterion,
                pad(criterion.name, 34),
                triple(&criterion.scores),
                report.weights.values.get(criterion.criterion) * 100.0,
                confidence
            ));
        }
        lines.push(format!(
            "  weights from {}",
            self.color(report.weights.source.label(), "dim")
        ));
        lines.push(String::new());

        lines.push(self.color("Global suitability", "bold"));
        for (rank, group) in report.global.ranking.iter().enumerate() {
            let score = format!("{:.3}", report.global.suitability.get(*group));
            let score = if rank == 0 {
                self.color(&score, "green")
            } else {
                score
            };
            lines.push(format!(
                "  {}. {} {}  {}",
                rank + 1,
                group,
                pad(group.name(), 22),
                score
            ));
        }
        lines.push(format!("  ranking  {}", report.global.ranking_label));
        let leader = report.leader();
        let shares: Vec<String> = report
            .global
            .contributions
            .iter()
            .map(|(criterion, scores)| format!("{criterion} {:.3}", scores.get(leader)))
            .collect();
        lines.push(format!("  {} contributions: {}", leader, shares.join(", ")));
        lines.push(String::new());

        let completeness = &report.completeness;
        lines.push(format!(
            "{} {:.1}% ({})",
            self.color("Completeness:", "cyan"),
            completeness.index,
            self.color(completeness.band.label(), Self::band_color(completeness.band))
        ));
        lines.push(format!("  {}", completeness.interpretation));

        if let Some(outcome) = &report.sensitivity {
            lines.push(String::new());
            self.sensitivity_lines(&mut lines, outcome, false);
        }

        if !report.recommendations.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Recommendations", "bold"));
            for rec in &report.recommendations {
                lines.push(format!(
                    "  [P{}] {} {}",
                    rec.priority,
                    self.color(rec.category.name(), "dim"),
                    rec.message
                ));
            }
        }

        if !report.warnings.is_empty() {
            lines.push(String::new());
            for warning in &report.warnings {
                lines.push(format!("{} {warning}", self.color("warning:", "yellow")));
            }
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn generate_ahp_report(
        &self,
        solution: &AhpSolution,
        inverted: Option<&AhpSolution>,
        warnings: &[String],
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, "AHP Weights");
        self.ahp_lines(&mut lines, "Direct:", solution);
        if let Some(inverted) = inverted {
            lines.push(String::new());
            self.ahp_lines(&mut lines, "Inverted:", inverted);
        }
        for warning in warnings {
            lines.push(format!("{} {warning}", self.color("warning:", "yellow")));
        }
        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn generate_sensitivity_report(&self, outcome: &SensitivityOutcome) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, "Weight Sensitivity");
        self.sensitivity_lines(&mut lines, outcome, true);
        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn generate_batch_report(&self, reports: &[(String, EvaluationReport)]) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, "MAR Suitability Batch");
        let width = reports
            .iter()
            .map(|(case, _)| UnicodeWidthStr::width(case.as_str()))
            .max()
            .unwrap_or(0)
            .max(4);
        lines.push(format!(
            "{}  {:>5} {:>5} {:>5}  {:>6}  ranking",
            pad("case", width),
            TechGroup::G1,
            TechGroup::G2,
            TechGroup::G3,
            "IC"
        ));
        for (case, report) in reports {
            lines.push(format!(
                "{}  {}  {:>5.1}%  {}",
                pad(case, width),
                triple(&report.global.suitability),
                report.completeness.index,
                report.global.ranking_label
            ));
        }
        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn generate_catalog_report(&self) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        self.header(&mut lines, "Variable Catalog");
        for criterion in CriterionId::ALL {
            lines.push(self.color(&format!("{criterion} {}", criterion.name()), "cyan"));
            for def in catalog::variables().iter().filter(|d| d.criterion == criterion) {
                let marker = if def.overridable { "" } else { " (fixed)" };
                lines.push(format!(
                    "  {:<4} {}  {}{}",
                    def.id.to_string(),
                    pad(def.name, 44),
                    def.rule.kind(),
                    marker
                ));
            }
        }
        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
