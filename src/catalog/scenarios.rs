//! Scenario required sets and the fallback override mapping.

use serde::Serialize;

use super::tables;
use super::{Category, FieldRef};
use crate::model::{ScenarioLevel, VariableId};

const MINIMUM: [u8; 6] = [1, 2, 6, 8, 15, 17];

const EXTENDED: [u8; 16] = [3, 4, 5, 7, 9, 10, 18, 19, 20, 21, 22, 23, 25, 30, 32, 33];

/// Scenario 1 required set.
#[must_use]
pub fn minimum_set() -> Vec<VariableId> {
    MINIMUM.iter().copied().map(VariableId::new).collect()
}

/// Variables Scenario 2 adds on top of the minimum set.
#[must_use]
pub fn extended_set() -> Vec<VariableId> {
    EXTENDED.iter().copied().map(VariableId::new).collect()
}

/// Variables that must be Complete for a tier, sorted by id.
///
/// Tier 0 requires nothing; tier 3 requires every cataloged variable.
#[must_use]
pub fn required_set(level: ScenarioLevel) -> Vec<VariableId> {
    let mut set = match level {
        ScenarioLevel::Insufficient => Vec::new(),
        ScenarioLevel::Minimum => minimum_set(),
        ScenarioLevel::Partial => {
            let mut set = minimum_set();
            set.extend(extended_set());
            set
        }
        ScenarioLevel::Full => super::all_ids(),
    };
    set.sort_unstable();
    set
}

/// One raw field consulted by a scenario override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverrideFacet {
    pub label: &'static str,
    pub field: FieldRef,
    pub table: &'static [Category],
}

/// Synthetic score source for a variable with no other basis at low maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioOverrideDef {
    pub target: VariableId,
    pub facets: &'static [OverrideFacet],
}

const AQUIFER_TYPE: FieldRef = FieldRef::new("hidrogeologia", "tipo_acuifero");
const SOURCE_TYPE: FieldRef = FieldRef::new("fuente", "tipo_fuente");
const SOURCE_QUALITY: FieldRef = FieldRef::new("calidad", "calidad_fuente");
const COMPLIANCE: FieldRef = FieldRef::new("calidad", "cumplimiento_normativo");
const CONNECTIVITY: FieldRef = FieldRef::new("fuente", "conectividad");
const FINAL_USE: FieldRef = FieldRef::new("objetivo", "uso_final");

const fn facet(label: &'static str, field: FieldRef, table: &'static [Category]) -> OverrideFacet {
    OverrideFacet { label, field, table }
}

const V8_FACETS: &[OverrideFacet] = &[
    facet("confinement", AQUIFER_TYPE, tables::TIPO_ACUIFERO),
    facet("storage", AQUIFER_TYPE, tables::ALMACENAMIENTO_POR_TIPO),
    facet("connectivity", CONNECTIVITY, tables::CONECTIVIDAD_HIDRAULICA),
];

const V10_FACETS: &[OverrideFacet] = &[facet(
    "aquifer type",
    AQUIFER_TYPE,
    tables::TRANSMISIVIDAD_POR_TIPO,
)];

const V20_FACETS: &[OverrideFacet] = &[
    facet("source quality", SOURCE_QUALITY, tables::CALIDAD_FUENTE),
    facet("regulatory compliance", COMPLIANCE, tables::CUMPLIMIENTO),
    facet("source type", SOURCE_TYPE, tables::COMPATIBILIDAD_POR_FUENTE),
];

const V22_FACETS: &[OverrideFacet] = &[
    facet("source quality", SOURCE_QUALITY, tables::PRETRATAMIENTO_POR_CALIDAD),
    facet("final use", FINAL_USE, tables::PRETRATAMIENTO_POR_USO),
    facet("regulatory compliance", COMPLIANCE, tables::PRETRATAMIENTO_POR_NORMATIVA),
];

const V25_FACETS: &[OverrideFacet] = &[
    facet("aquifer type", AQUIFER_TYPE, tables::INFILTRACION_POR_TIPO),
    facet("connectivity", CONNECTIVITY, tables::INFILTRACION_POR_CONECTIVIDAD),
];

static OVERRIDES: [ScenarioOverrideDef; 5] = [
    ScenarioOverrideDef {
        target: VariableId::new(8),
        facets: V8_FACETS,
    },
    ScenarioOverrideDef {
        target: VariableId::new(10),
        facets: V10_FACETS,
    },
    ScenarioOverrideDef {
        target: VariableId::new(20),
        facets: V20_FACETS,
    },
    ScenarioOverrideDef {
        target: VariableId::new(22),
        facets: V22_FACETS,
    },
    ScenarioOverrideDef {
        target: VariableId::new(25),
        facets: V25_FACETS,
    },
];

/// All scenario override definitions, by target id.
#[must_use]
pub fn scenario_overrides() -> &'static [ScenarioOverrideDef] {
    &OVERRIDES
}
