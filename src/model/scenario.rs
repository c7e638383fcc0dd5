//! Information-maturity tiers and how a case selects one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MarError;

/// Scenario tier, from no usable evidence to full evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ScenarioLevel {
    Insufficient,
    Minimum,
    Partial,
    Full,
}

impl ScenarioLevel {
    pub const ALL: [Self; 4] = [Self::Insufficient, Self::Minimum, Self::Partial, Self::Full];

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Insufficient => 0,
            Self::Minimum => 1,
            Self::Partial => 2,
            Self::Full => 3,
        }
    }

    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            0 => Some(Self::Insufficient),
            1 => Some(Self::Minimum),
            2 => Some(Self::Partial),
            3 => Some(Self::Full),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Insufficient => "Insufficient",
            Self::Minimum => "Minimum",
            Self::Partial => "Partial",
            Self::Full => "Full",
        }
    }

    /// Tiers 1 and 2 restrict scoring to their required set and enable
    /// scenario overrides.
    #[must_use]
    pub const fn is_gated(self) -> bool {
        matches!(self, Self::Minimum | Self::Partial)
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }
}

impl fmt::Display for ScenarioLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}

impl From<ScenarioLevel> for u8 {
    fn from(level: ScenarioLevel) -> Self {
        level.number()
    }
}

impl TryFrom<u8> for ScenarioLevel {
    type Error = MarError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n)
            .ok_or_else(|| MarError::invalid_value("scenario", format!("{n} is not a tier (0-3)")))
    }
}

/// Whether the detected tier is applied or an operator fixes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "SelectionRepr", into = "SelectionRepr")]
pub enum ScenarioSelection {
    #[default]
    Auto,
    Fixed(ScenarioLevel),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SelectionRepr {
    Number(u8),
    Text(String),
}

impl From<ScenarioSelection> for SelectionRepr {
    fn from(selection: ScenarioSelection) -> Self {
        match selection {
            ScenarioSelection::Auto => Self::Text("auto".to_string()),
            ScenarioSelection::Fixed(level) => Self::Number(level.number()),
        }
    }
}

impl TryFrom<SelectionRepr> for ScenarioSelection {
    type Error = MarError;

    fn try_from(repr: SelectionRepr) -> Result<Self, Self::Error> {
        match repr {
            SelectionRepr::Number(n) => ScenarioLevel::try_from(n).map(Self::Fixed),
            SelectionRepr::Text(s) => s.parse(),
        }
    }
}

impl FromStr for ScenarioSelection {
    type Err = MarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        trimmed
            .parse::<u8>()
            .map_err(|_| MarError::invalid_value("scenario", format!("expected auto or 0-3, got '{s}'")))
            .and_then(ScenarioLevel::try_from)
            .map(Self::Fixed)
    }
}

impl fmt::Display for ScenarioSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(level) => write!(f, "{}", level.number()),
        }
    }
}
