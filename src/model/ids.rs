//! Identifiers for technology groups, criteria and variables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{InputErrorKind, MarError};

/// Candidate MAR technology family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TechGroup {
    /// Surface infiltration (basins, ponds, soil-aquifer treatment)
    G1,
    /// Well-based recharge (injection / ASR wells, dry wells)
    G2,
    /// Channel intervention (check dams, riverbed scarification)
    G3,
}

impl TechGroup {
    /// All groups in their stable ranking tie-break order.
    pub const ALL: [Self; 3] = [Self::G1, Self::G2, Self::G3];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::G1 => 0,
            Self::G2 => 1,
            Self::G3 => 2,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::G1 => "G1",
            Self::G2 => "G2",
            Self::G3 => "G3",
        }
    }

    /// Human-readable technology family name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::G1 => "Surface infiltration",
            Self::G2 => "Well-based recharge",
            Self::G3 => "Channel intervention",
        }
    }
}

impl fmt::Display for TechGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for TechGroup {
    type Err = MarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "G1" => Ok(Self::G1),
            "G2" => Ok(Self::G2),
            "G3" => Ok(Self::G3),
            _ => Err(MarError::invalid_value(
                "group",
                format!("unknown technology group '{s}' (expected G1, G2 or G3)"),
            )),
        }
    }
}

/// Thematic criterion grouping a fixed set of variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CriterionId {
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl CriterionId {
    /// All criteria in catalog order.
    pub const ALL: [Self; 5] = [Self::C1, Self::C2, Self::C3, Self::C4, Self::C5];

    /// Number of criteria.
    pub const COUNT: usize = 5;

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::C1 => 0,
            Self::C2 => 1,
            Self::C3 => 2,
            Self::C4 => 3,
            Self::C5 => 4,
        }
    }

    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::C1),
            1 => Some(Self::C2),
            2 => Some(Self::C3),
            3 => Some(Self::C4),
            4 => Some(Self::C5),
            _ => None,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::C1 => "C1",
            Self::C2 => "C2",
            Self::C3 => "C3",
            Self::C4 => "C4",
            Self::C5 => "C5",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::C1 => "Objective",
            Self::C2 => "Hydrogeology",
            Self::C3 => "Water source & quality",
            Self::C4 => "Technical feasibility",
            Self::C5 => "Socio-environmental",
        }
    }
}

impl fmt::Display for CriterionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for CriterionId {
    type Err = MarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "C1" => Ok(Self::C1),
            "C2" => Ok(Self::C2),
            "C3" => Ok(Self::C3),
            "C4" => Ok(Self::C4),
            "C5" => Ok(Self::C5),
            _ => Err(MarError::input(
                "parsing criterion id",
                InputErrorKind::UnknownCriterion(s.to_string()),
            )),
        }
    }
}

/// Technical variable id (`V1`..`V37`, gaps allowed).
///
/// Parsing only checks the `V<n>` shape; membership in the catalog is
/// checked by the lookups that use the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VariableId(u8);

impl VariableId {
    #[must_use]
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V{}", self.0)
    }
}

impl FromStr for VariableId {
    type Err = MarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('V')
            .or_else(|| trimmed.strip_prefix('v'))
            .unwrap_or(trimmed);
        digits.parse::<u8>().map(Self).map_err(|_| {
            MarError::input(
                "parsing variable id",
                InputErrorKind::UnknownVariable(s.to_string()),
            )
        })
    }
}

impl TryFrom<String> for VariableId {
    type Error = MarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VariableId> for String {
    fn from(value: VariableId) -> Self {
        value.to_string()
    }
}
