//! Evidence snapshot and per-variable evidence records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::ids::VariableId;
use crate::utils::{is_not_reported, normalize_token};

/// Raw case data: `module -> field -> value` plus artifact flags by layer id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceSnapshot {
    pub fields: BTreeMap<String, BTreeMap<String, Value>>,
    pub artifacts: BTreeMap<String, Value>,
}

impl EvidenceSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion, mostly for tests and fixtures.
    #[must_use]
    pub fn with_field(mut self, module: &str, field: &str, value: impl Into<Value>) -> Self {
        self.fields
            .entry(module.to_string())
            .or_default()
            .insert(field.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn with_artifact(mut self, layer: &str, present: bool) -> Self {
        self.artifacts.insert(layer.to_string(), Value::Bool(present));
        self
    }

    /// Raw value lookup; unresolvable paths are `None`.
    #[must_use]
    pub fn field(&self, module: &str, field: &str) -> Option<&Value> {
        self.fields.get(module).and_then(|m| m.get(field))
    }

    /// Whether a field carries a usable value.
    #[must_use]
    pub fn is_present(&self, module: &str, field: &str) -> bool {
        self.field(module, field).is_some_and(value_is_present)
    }

    /// Normalized token for a present field.
    #[must_use]
    pub fn token(&self, module: &str, field: &str) -> Option<String> {
        self.field(module, field)
            .filter(|v| value_is_present(v))
            .and_then(value_token)
    }

    /// Numeric reading of a present field. JSON numbers are taken as-is.
    #[must_use]
    pub fn number(&self, module: &str, field: &str) -> Option<f64> {
        match self.field(module, field)? {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            other if value_is_present(other) => {
                value_token(other).and_then(|t| crate::utils::parse_leading_number(&t))
            }
            _ => None,
        }
    }

    /// Whether an uploaded artifact layer is flagged as available.
    #[must_use]
    pub fn artifact_present(&self, layer: &str) -> bool {
        match self.artifacts.get(layer) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            _ => false,
        }
    }
}

/// Presence rule for a single raw value.
#[must_use]
pub fn value_is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => {
            let normalized = normalize_token(s);
            !normalized.is_empty() && !is_not_reported(&normalized)
        }
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn value_token(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(normalize_token(s)),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("si".to_string()),
        Value::Bool(false) => Some("no".to_string()),
        // A multi-select answer is scored on its first entry.
        Value::Array(items) => items.iter().find(|v| value_is_present(v)).and_then(value_token),
        Value::Null | Value::Object(_) => None,
    }
}

/// Evidence status of a variable.
///
/// `Blocked` is never produced by the evidence resolver; the scenario
/// resolver assigns it to variables outside the applied scenario's set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceStatus {
    Complete,
    Partial,
    Missing,
    NotApplicable,
    Blocked,
}

impl EvidenceStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
            Self::Missing => "missing",
            Self::NotApplicable => "n/a",
            Self::Blocked => "blocked",
        }
    }

    /// Complete or Partial.
    #[must_use]
    pub const fn has_evidence(self) -> bool {
        matches!(self, Self::Complete | Self::Partial)
    }
}

/// Canonical evidence for one variable, rebuilt from the snapshot on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub variable: VariableId,
    pub present_inputs: usize,
    pub required_inputs: usize,
    pub categorical_token: Option<String>,
    /// Numeric reading of the primary input, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
    pub artifacts_present: usize,
    pub artifacts_required: usize,
}

impl EvidenceRecord {
    #[must_use]
    pub fn status(&self) -> EvidenceStatus {
        if self.required_inputs == 0 && self.artifacts_required == 0 {
            EvidenceStatus::NotApplicable
        } else if self.present_inputs >= self.required_inputs
            && self.artifacts_present >= self.artifacts_required
        {
            EvidenceStatus::Complete
        } else if self.present_inputs == 0 && self.artifacts_present == 0 {
            EvidenceStatus::Missing
        } else {
            EvidenceStatus::Partial
        }
    }

    /// Capped share of required evidence that is present, in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let required = self.required_inputs + self.artifacts_required;
        if required == 0 {
            return 0.0;
        }
        let present = self.present_inputs.min(self.required_inputs)
            + self.artifacts_present.min(self.artifacts_required);
        present as f64 / required as f64
    }
}
