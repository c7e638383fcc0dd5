//! Interpreter for the declarative scoring rules.

use std::fmt;

use crate::catalog::{self, ScoringRule, VariableDef, RATIO_BANDS};
use crate::model::{EvidenceRecord, GroupScores, TechGroup};
use crate::utils::closest_token;

/// Why a variable has no automatic score.
#[derive(Debug, Clone, PartialEq)]
pub enum Unscored {
    /// Nothing present for the variable
    NoEvidence,
    /// Token not found in the categorical table
    UnrecognizedToken {
        token: String,
        suggestion: Option<&'static str>,
    },
    /// Numeric rule but no number could be read
    NotNumeric { token: String },
}

impl fmt::Display for Unscored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEvidence => f.write_str("no evidence"),
            Self::UnrecognizedToken {
                token,
                suggestion: Some(hint),
            } => write!(f, "unrecognized value '{token}' (did you mean '{hint}'?)"),
            Self::UnrecognizedToken { token, .. } => write!(f, "unrecognized value '{token}'"),
            Self::NotNumeric { token } => write!(f, "no numeric value in '{token}'"),
        }
    }
}

/// Minimum Jaro-Winkler similarity for a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Score a variable from its evidence alone.
pub fn automatic_score(def: &VariableDef, record: &EvidenceRecord) -> Result<GroupScores, Unscored> {
    if record.present_inputs == 0 && record.artifacts_present == 0 {
        return Err(Unscored::NoEvidence);
    }

    match def.rule {
        ScoringRule::Ratio => {
            let band = RATIO_BANDS.score(record.ratio());
            Ok(GroupScores::from_triple([band; 3]))
        }
        ScoringRule::Categorical { table } => {
            let token = record.categorical_token.as_deref().ok_or(Unscored::NoEvidence)?;
            catalog::lookup(table, token)
                .map(|category| GroupScores::from_triple(category.scores))
                .ok_or_else(|| Unscored::UnrecognizedToken {
                    token: token.to_string(),
                    suggestion: closest_token(token, &catalog::known_tokens(table))
                        .filter(|(_, similarity)| *similarity >= SUGGESTION_THRESHOLD)
                        .map(|(hint, _)| hint),
                })
        }
        ScoringRule::GroupFunction { functions } => {
            let value = record.numeric_value.ok_or_else(|| Unscored::NotNumeric {
                token: record.categorical_token.clone().unwrap_or_default(),
            })?;
            let value = functions.scale.apply(value);
            let mut scores = GroupScores::zero();
            for group in TechGroup::ALL {
                scores.set(group, f64::from(functions.for_group(group).score(value)));
            }
            Ok(scores)
        }
    }
}
