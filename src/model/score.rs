//! Per-group score triples and their provenance.

use serde::{Deserialize, Serialize};

use super::ids::TechGroup;

/// Lowest score on the suitability scale.
pub const MIN_SCORE: f64 = 0.0;
/// Highest score on the suitability scale.
pub const MAX_SCORE: f64 = 4.0;

/// One value per technology group.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupScores {
    #[serde(rename = "G1")]
    pub g1: f64,
    #[serde(rename = "G2")]
    pub g2: f64,
    #[serde(rename = "G3")]
    pub g3: f64,
}

impl GroupScores {
    #[must_use]
    pub const fn new(g1: f64, g2: f64, g3: f64) -> Self {
        Self { g1, g2, g3 }
    }

    /// Same value for every group.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value)
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// Build from an integer table triple `(G1, G2, G3)`.
    #[must_use]
    pub fn from_triple(triple: [u8; 3]) -> Self {
        Self::new(
            f64::from(triple[0]),
            f64::from(triple[1]),
            f64::from(triple[2]),
        )
    }

    #[must_use]
    pub const fn get(&self, group: TechGroup) -> f64 {
        match group {
            TechGroup::G1 => self.g1,
            TechGroup::G2 => self.g2,
            TechGroup::G3 => self.g3,
        }
    }

    pub fn set(&mut self, group: TechGroup, value: f64) {
        match group {
            TechGroup::G1 => self.g1 = value,
            TechGroup::G2 => self.g2 = value,
            TechGroup::G3 => self.g3 = value,
        }
    }

    /// Apply `f` to every group value.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.g1), f(self.g2), f(self.g3))
    }

    #[must_use]
    pub const fn as_array(&self) -> [f64; 3] {
        [self.g1, self.g2, self.g3]
    }

    /// Clamp every value to the 0-4 scale; non-finite values become 0.
    #[must_use]
    pub fn clamped(self) -> Self {
        self.map(clamp_score)
    }
}

/// Clamp a score to `[0, 4]`, mapping NaN/infinite input to 0.
#[must_use]
pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(MIN_SCORE, MAX_SCORE)
    } else {
        MIN_SCORE
    }
}

/// Where a variable score came from, in increasing precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Derived from evidence by the variable's rule
    Automatic,
    /// Synthetic score supplied by the scenario resolver
    ScenarioOverride,
    /// Operator-entered score for the whole variable
    ManualOverride,
    /// Operator pin for a single (variable, group) contribution, aggregation only
    CustomInfluence,
}

impl Provenance {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Automatic => "automatic",
            Self::ScenarioOverride => "scenario override",
            Self::ManualOverride => "manual override",
            Self::CustomInfluence => "custom influence",
        }
    }

    /// True for any score not derived purely from evidence.
    #[must_use]
    pub const fn is_override(self) -> bool {
        !matches!(self, Self::Automatic)
    }
}
