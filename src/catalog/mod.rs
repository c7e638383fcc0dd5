//! Static variable catalog: evidence requirements and scoring rules.
//!
//! Every technical variable is described once, declaratively, as a
//! [`VariableDef`]. The variable scorer is a single interpreter over these
//! definitions; nothing in the catalog changes at runtime.
//!
//! # Example
//!
//! ```ignore
//! use mar_suitability::catalog;
//! use mar_suitability::model::{CriterionId, VariableId};
//!
//! let v8 = catalog::variable(VariableId::new(8)).expect("V8 is cataloged");
//! assert_eq!(v8.criterion, CriterionId::C2);
//! assert_eq!(catalog::criterion_members(CriterionId::C1), vec![VariableId::new(1)]);
//! ```

mod scenarios;
pub mod tables;
mod variables;

pub use scenarios::{
    extended_set, minimum_set, required_set, scenario_overrides, OverrideFacet, ScenarioOverrideDef,
};

use serde::Serialize;

use crate::model::{CriterionId, TechGroup, VariableId};

// ============================================================================
// Rule building blocks
// ============================================================================

/// A raw input addressed by module and field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldRef {
    pub module: &'static str,
    pub field: &'static str,
}

impl FieldRef {
    #[must_use]
    pub const fn new(module: &'static str, field: &'static str) -> Self {
        Self { module, field }
    }
}

impl std::fmt::Display for FieldRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.module, self.field)
    }
}

/// One row of a categorical table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Canonical normalized token
    pub token: &'static str,
    /// Accepted variants, also normalized
    pub aliases: &'static [&'static str],
    /// Scores for G1, G2, G3
    pub scores: [u8; 3],
}

/// Shorthand for table literals.
pub(crate) const fn cat(token: &'static str, aliases: &'static [&'static str], scores: [u8; 3]) -> Category {
    Category {
        token,
        aliases,
        scores,
    }
}

/// Bare yes/no answers; these only ever match a whole input.
const BARE_ANSWERS: &[&str] = &["yes", "none", "not"];

/// Whether a token or alias may match as a phrase inside a longer input.
///
/// "No evaluado" or "no se sabe" must not read as a plain "no".
fn matches_as_phrase(candidate: &str) -> bool {
    candidate.len() >= 3 && !BARE_ANSWERS.contains(&candidate)
}

/// Find the table row for a normalized token.
///
/// An exact token or alias match wins; otherwise the longest token or alias
/// that appears as a whole-word phrase inside the input is used, so that
/// "acuifero libre" resolves to "libre" and "no cumple" beats "cumple".
/// Bare answers such as "no" or "si" are exact-only.
#[must_use]
pub fn lookup(table: &'static [Category], token: &str) -> Option<&'static Category> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let exact = table
        .iter()
        .find(|c| c.token == token || c.aliases.contains(&token));
    if exact.is_some() {
        return exact;
    }

    let padded = format!(" {token} ");
    let mut best: Option<(&'static Category, usize)> = None;
    for category in table {
        for candidate in std::iter::once(&category.token)
            .chain(category.aliases.iter())
            .filter(|candidate| matches_as_phrase(candidate))
        {
            if padded.contains(&format!(" {candidate} ")) {
                let len = candidate.len();
                if best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((category, len));
                }
            }
        }
    }
    best.map(|(category, _)| category)
}

/// Every token and alias in a table, for "did you mean" hints.
#[must_use]
pub fn known_tokens(table: &'static [Category]) -> Vec<&'static str> {
    table
        .iter()
        .flat_map(|c| std::iter::once(c.token).chain(c.aliases.iter().copied()))
        .collect()
}

/// Comparison used by a numeric band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cmp {
    Lt,
    Le,
    Ge,
    Gt,
}

/// `value <cmp> limit => score`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub cmp: Cmp,
    pub limit: f64,
    pub score: u8,
}

impl Band {
    #[must_use]
    pub fn matches(&self, value: f64) -> bool {
        match self.cmp {
            Cmp::Lt => value < self.limit,
            Cmp::Le => value <= self.limit,
            Cmp::Ge => value >= self.limit,
            Cmp::Gt => value > self.limit,
        }
    }
}

pub(crate) const fn lt(limit: f64, score: u8) -> Band {
    Band { cmp: Cmp::Lt, limit, score }
}

pub(crate) const fn le(limit: f64, score: u8) -> Band {
    Band { cmp: Cmp::Le, limit, score }
}

pub(crate) const fn ge(limit: f64, score: u8) -> Band {
    Band { cmp: Cmp::Ge, limit, score }
}

pub(crate) const fn gt(limit: f64, score: u8) -> Band {
    Band { cmp: Cmp::Gt, limit, score }
}

/// Ordered bands; the first match wins, `otherwise` applies when none match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub bands: &'static [Band],
    pub otherwise: u8,
}

impl Thresholds {
    #[must_use]
    pub const fn new(bands: &'static [Band], otherwise: u8) -> Self {
        Self { bands, otherwise }
    }

    /// Same score for every reading.
    #[must_use]
    pub const fn constant(score: u8) -> Self {
        Self::new(&[], score)
    }

    #[must_use]
    pub fn score(&self, value: f64) -> u8 {
        self.bands
            .iter()
            .find(|band| band.matches(value))
            .map_or(self.otherwise, |band| band.score)
    }
}

/// How a raw number is read before thresholds apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericScale {
    Raw,
    /// Values at or below 1 are fractions and are scaled to percent
    PercentFromFraction,
}

impl NumericScale {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Raw => value,
            Self::PercentFromFraction if value <= 1.0 => value * 100.0,
            Self::PercentFromFraction => value,
        }
    }
}

/// Group-specific numeric scoring functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupFunctions {
    pub scale: NumericScale,
    #[serde(rename = "G1")]
    pub g1: Thresholds,
    #[serde(rename = "G2")]
    pub g2: Thresholds,
    #[serde(rename = "G3")]
    pub g3: Thresholds,
}

impl GroupFunctions {
    /// One function for every group.
    #[must_use]
    pub const fn uniform(scale: NumericScale, thresholds: Thresholds) -> Self {
        Self {
            scale,
            g1: thresholds,
            g2: thresholds,
            g3: thresholds,
        }
    }

    #[must_use]
    pub const fn for_group(&self, group: TechGroup) -> &Thresholds {
        match group {
            TechGroup::G1 => &self.g1,
            TechGroup::G2 => &self.g2,
            TechGroup::G3 => &self.g3,
        }
    }
}

/// Ratio-rule bands: 1.0 → 4, ≥0.75 → 3, ≥0.5 → 2, >0 → 1, else 0.
pub const RATIO_BANDS: Thresholds = Thresholds::new(RATIO_BAND_LIST, 0);

const RATIO_BAND_LIST: &[Band] = &[ge(1.0, 4), ge(0.75, 3), ge(0.5, 2), gt(0.0, 1)];

/// Declarative scoring rule of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringRule {
    /// Token lookup in a `(G1, G2, G3)` table
    Categorical { table: &'static [Category] },
    /// Present/required evidence ratio mapped through [`RATIO_BANDS`]
    Ratio,
    /// Numeric reading scored by a function per group
    GroupFunction { functions: GroupFunctions },
}

impl ScoringRule {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Categorical { .. } => "categorical",
            Self::Ratio => "ratio",
            Self::GroupFunction { .. } => "group-function",
        }
    }
}

// ============================================================================
// Variable definitions
// ============================================================================

/// Static definition of one technical variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VariableDef {
    pub id: VariableId,
    pub name: &'static str,
    pub criterion: CriterionId,
    /// Named sub-inputs; the first one feeds categorical and numeric rules
    pub fields: &'static [FieldRef],
    pub min_fields: usize,
    /// Fixed artifact layer ids checked for presence
    pub artifacts: &'static [&'static str],
    pub min_artifacts: usize,
    pub rule: ScoringRule,
    /// Whether an operator may replace the score manually
    pub overridable: bool,
}

impl VariableDef {
    /// Input that categorical and numeric rules read.
    #[must_use]
    pub fn primary_field(&self) -> Option<&'static FieldRef> {
        self.fields.first()
    }
}

/// All cataloged variables, in id order.
#[must_use]
pub fn variables() -> &'static [VariableDef] {
    &variables::VARIABLES
}

/// Definition for a variable id, if cataloged.
#[must_use]
pub fn variable(id: VariableId) -> Option<&'static VariableDef> {
    variables::VARIABLES.iter().find(|v| v.id == id)
}

/// Member variable ids of a criterion, in id order.
#[must_use]
pub fn criterion_members(criterion: CriterionId) -> Vec<VariableId> {
    variables::VARIABLES
        .iter()
        .filter(|v| v.criterion == criterion)
        .map(|v| v.id)
        .collect()
}

/// All cataloged variable ids, in id order.
#[must_use]
pub fn all_ids() -> Vec<VariableId> {
    variables::VARIABLES.iter().map(|v| v.id).collect()
}
