//! **Site-suitability scoring and decision robustness for Managed Aquifer Recharge.**
//!
//! `mar-suitability` turns an incomplete, heterogeneous evidence snapshot about
//! a candidate recharge site into a defensible ranking of three technology
//! families: surface infiltration (G1), well-based recharge (G2) and channel
//! intervention (G3). Every number it produces can be traced back to the
//! evidence, the scoring rule and the weights that produced it.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the input document ([`CaseInput`]), identifiers and score
//!   triples.
//! - **[`catalog`]**: the 35 technical variables, their scoring rules and the
//!   scenario tiers that gate them.
//! - **[`scoring`]**: evidence resolution, the data-maturity scenario, variable
//!   scoring and per-criterion aggregation.
//! - **[`ahp`]**: pairwise-comparison weights with Saaty consistency checking.
//! - **[`suitability`]**: global weighted linear combination, the completeness
//!   index, one-at-a-time weight sensitivity and recommendations.
//! - **[`pipeline`]**: [`SuitabilityEngine`], which runs every stage for one
//!   case (or many in parallel).
//! - **[`reports`]**: JSON and terminal summary renderers.
//!
//! ## Getting Started
//!
//! ```
//! use mar_suitability::model::{CaseInput, EvidenceSnapshot};
//! use mar_suitability::SuitabilityEngine;
//!
//! let case = CaseInput::new(
//!     EvidenceSnapshot::new()
//!         .with_field("objetivo", "uso_final", "Riego")
//!         .with_field("hidrogeologia", "tipo_acuifero", "Libre"),
//! );
//! let report = SuitabilityEngine::default().evaluate(&case);
//!
//! assert_eq!(report.global.ranking.len(), 3);
//! println!("{} (IC {:.1}%)", report.global.ranking_label, report.completeness.index);
//! ```
//!
//! Cases are usually read from JSON:
//!
//! ```no_run
//! use std::path::Path;
//! use mar_suitability::{CaseInput, SuitabilityEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let case = CaseInput::from_path(Path::new("site.json"))?;
//!     let report = SuitabilityEngine::default().evaluate(&case);
//!     println!("{}", report.to_json()?);
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Counts and indices are converted to f64 for ratios; all values are small
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::unused_self,
    // g1/g2/g3 and c1..c5 are clear in context
    clippy::similar_names
)]

pub mod ahp;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod scoring;
pub mod suitability;
pub mod utils;

// Re-export main types for convenience
pub use ahp::{AhpEngine, AhpSolution, PairwiseMatrix};
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, EngineConfig, OutputConfig, SensitivityConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, MarError, Result};
pub use model::{
    CaseInput, CriterionId, EvidenceSnapshot, GroupScores, ScenarioLevel, TechGroup, VariableId,
};
pub use pipeline::{EvaluationReport, SuitabilityEngine};
pub use reports::{ReportFormat, ReportGenerator};
pub use suitability::{
    CompletenessIndex, GlobalSuitability, SensitivityAnalyzer, SensitivityOutcome, WeightVector,
};
