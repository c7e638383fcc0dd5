//! Criterion weight vectors.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use crate::model::CriterionId;

/// Which input produced the authoritative weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightSource {
    /// Operator percentages, normalized
    User,
    /// AHP priority vector
    Ahp,
    /// AHP priority vector after mirror-rank inversion
    AhpInverted,
}

impl WeightSource {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "user weights",
            Self::Ahp => "AHP",
            Self::AhpInverted => "AHP (inverted hierarchy)",
        }
    }
}

/// Five non-negative criterion weights summing to 1 (or all 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightVector([f64; CriterionId::COUNT]);

impl Default for WeightVector {
    fn default() -> Self {
        Self::uniform()
    }
}

impl WeightVector {
    /// Equal weight for every criterion.
    #[must_use]
    pub fn uniform() -> Self {
        Self([1.0 / CriterionId::COUNT as f64; CriterionId::COUNT])
    }

    /// Normalize raw weights to sum 1.
    ///
    /// Negative and non-finite entries count as 0. Returns `None` when nothing
    /// positive is left.
    #[must_use]
    pub fn from_array(raw: [f64; CriterionId::COUNT]) -> Option<Self> {
        let cleaned = raw.map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 });
        let sum: f64 = cleaned.iter().sum();
        if sum <= 0.0 || !sum.is_finite() {
            return None;
        }
        Some(Self(cleaned.map(|w| w / sum)))
    }

    /// Normalize a slice indexed by criterion; missing tail entries count as 0.
    #[must_use]
    pub fn from_slice(raw: &[f64]) -> Option<Self> {
        let mut values = [0.0; CriterionId::COUNT];
        for (slot, value) in values.iter_mut().zip(raw) {
            *slot = *value;
        }
        Self::from_array(values)
    }

    /// Operator percentages per criterion; unlisted criteria weigh 0.
    #[must_use]
    pub fn from_user_percentages(percentages: &BTreeMap<CriterionId, f64>) -> Option<Self> {
        let mut values = [0.0; CriterionId::COUNT];
        for (criterion, percent) in percentages {
            values[criterion.index()] = *percent;
        }
        Self::from_array(values)
    }

    #[must_use]
    pub const fn get(&self, criterion: CriterionId) -> f64 {
        self.0[criterion.index()]
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f64; CriterionId::COUNT] {
        &self.0
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Renormalize weights, excluding criteria marked as N/A.
    ///
    /// The weight of an unavailable criterion is proportionally redistributed
    /// over the available ones. Nothing available yields all zeros.
    #[must_use]
    pub fn renormalize(&self, available: &[bool; CriterionId::COUNT]) -> Self {
        let total_available: f64 = self
            .0
            .iter()
            .zip(available)
            .filter(|&(_, a)| *a)
            .map(|(w, _)| w)
            .sum();

        if total_available <= 0.0 {
            return Self([0.0; CriterionId::COUNT]);
        }

        let scale = 1.0 / total_available;
        let mut result = [0.0; CriterionId::COUNT];
        for (i, (&w, &avail)) in self.0.iter().zip(available).enumerate() {
            result[i] = if avail { w * scale } else { 0.0 };
        }
        Self(result)
    }

    /// Set one criterion to `tested` and rescale the rest proportionally so the
    /// vector still sums to 1.
    ///
    /// `tested` is clamped to [0, 1]. When the base weight is already 1 the
    /// other weights have nothing to scale from and stay 0.
    #[must_use]
    pub fn with_adjusted(&self, criterion: CriterionId, tested: f64) -> Self {
        let tested = tested.clamp(0.0, 1.0);
        let base = self.get(criterion);
        let scale = if base >= 1.0 {
            0.0
        } else {
            (1.0 - tested) / (1.0 - base)
        };

        let mut result = self.0.map(|w| w * scale);
        result[criterion.index()] = tested;
        Self(result)
    }
}

impl Serialize for WeightVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CriterionId::COUNT))?;
        for criterion in CriterionId::ALL {
            map.serialize_entry(criterion.id(), &self.get(criterion))?;
        }
        map.end()
    }
}
