//! The 35 technical variables (V14 and V29 are retired ids).

use super::tables;
use super::{
    ge, gt, le, lt, Band, FieldRef, GroupFunctions, NumericScale, ScoringRule, Thresholds,
    VariableDef,
};
use crate::model::{CriterionId, VariableId};

const fn f(module: &'static str, field: &'static str) -> FieldRef {
    FieldRef::new(module, field)
}

const fn categorical(table: &'static [super::Category]) -> ScoringRule {
    ScoringRule::Categorical { table }
}

const fn split(g1: Thresholds, g2: Thresholds, g3: Thresholds) -> ScoringRule {
    ScoringRule::GroupFunction {
        functions: GroupFunctions {
            scale: NumericScale::Raw,
            g1,
            g2,
            g3,
        },
    }
}

const fn shared(scale: NumericScale, thresholds: Thresholds) -> ScoringRule {
    ScoringRule::GroupFunction {
        functions: GroupFunctions::uniform(scale, thresholds),
    }
}

/// Variable with field inputs only.
const fn fields(
    id: u8,
    name: &'static str,
    criterion: CriterionId,
    inputs: &'static [FieldRef],
    rule: ScoringRule,
) -> VariableDef {
    VariableDef {
        id: VariableId::new(id),
        name,
        criterion,
        fields: inputs,
        min_fields: inputs.len(),
        artifacts: &[],
        min_artifacts: 0,
        rule,
        overridable: true,
    }
}

/// Ratio variable over uploaded artifact layers.
const fn artifacts(
    id: u8,
    name: &'static str,
    criterion: CriterionId,
    layers: &'static [&'static str],
    min: usize,
) -> VariableDef {
    VariableDef {
        id: VariableId::new(id),
        name,
        criterion,
        fields: &[],
        min_fields: 0,
        artifacts: layers,
        min_artifacts: min,
        rule: ScoringRule::Ratio,
        overridable: true,
    }
}

const fn evidence_only(mut def: VariableDef) -> VariableDef {
    def.overridable = false;
    def
}

// ============================================================================
// Artifact key lists
// ============================================================================

const GEOLOGICAL_MODEL: &[&str] = &[
    "geo_mapa_geologico",
    "geo_cortes_geologicos",
    "geo_columnas_estratigraficas",
    "geo_sondeos",
];

const HYDROGEOLOGICAL_MODEL: &[&str] = &[
    "hid_mapa_piezometrico",
    "hid_balance_hidrico",
    "hid_limites_acuifero",
    "hid_direccion_flujo",
    "hid_zonas_recarga",
];

const NUMERICAL_MODEL: &[&str] = &["num_malla", "num_calibracion", "num_escenarios_recarga"];

// ============================================================================
// Numeric bands
// ============================================================================

const THICKNESS_SURFACE: &[Band] = &[ge(30.0, 4), ge(15.0, 3), ge(5.0, 2), gt(0.0, 1)];
const THICKNESS_WELLS: &[Band] = &[ge(50.0, 4), ge(25.0, 3), ge(10.0, 2), gt(0.0, 1)];

const DEPTH_SURFACE: &[Band] = &[
    lt(1.5, 0),
    lt(3.0, 2),
    lt(5.0, 3),
    le(30.0, 4),
    le(50.0, 3),
    le(80.0, 2),
];
const DEPTH_WELLS: &[Band] = &[lt(1.5, 1), le(10.0, 2), le(80.0, 4), le(150.0, 3)];
const DEPTH_CHANNEL: &[Band] = &[
    lt(1.5, 0),
    lt(3.0, 3),
    le(20.0, 4),
    le(40.0, 3),
    le(60.0, 2),
];

const CONDUCTIVITY_SURFACE: &[Band] = &[ge(10.0, 4), ge(1.0, 3), ge(0.1, 2), ge(0.01, 1)];
const CONDUCTIVITY_WELLS: &[Band] = &[ge(5.0, 4), ge(0.5, 3), ge(0.05, 2), ge(0.005, 1)];

const POROSITY_PERCENT: &[Band] = &[ge(20.0, 4), ge(10.0, 3), ge(5.0, 2), gt(0.0, 1)];

const TRANSMISSIVITY_SURFACE: &[Band] = &[ge(500.0, 4), ge(100.0, 3), ge(10.0, 2), gt(0.0, 1)];
const TRANSMISSIVITY_WELLS: &[Band] = &[ge(1000.0, 4), ge(250.0, 3), ge(50.0, 2), gt(0.0, 1)];

const AREA_BASINS: &[Band] = &[ge(5.0, 4), ge(1.0, 3), ge(0.25, 2), gt(0.0, 1)];
const AREA_WELLS: &[Band] = &[ge(0.5, 4), ge(0.1, 3), ge(0.01, 2), gt(0.0, 1)];
const AREA_CHANNEL: &[Band] = &[ge(2.0, 4), ge(0.5, 3), ge(0.1, 2), gt(0.0, 1)];

const SLOPE_BASINS: &[Band] = &[le(2.0, 4), le(5.0, 3), le(10.0, 2), le(20.0, 1)];
const SLOPE_WELLS: &[Band] = &[le(10.0, 4), le(20.0, 3), le(35.0, 2)];
const SLOPE_CHANNEL: &[Band] = &[lt(0.5, 2), le(3.0, 4), le(8.0, 3), le(15.0, 2)];

const INFILTRATION_SURFACE: &[Band] = &[ge(1.0, 4), ge(0.5, 3), ge(0.1, 2), gt(0.0, 1)];

const DISTANCE_KM: &[Band] = &[le(1.0, 4), le(5.0, 3), le(15.0, 2), le(30.0, 1)];

// ============================================================================
// Catalog
// ============================================================================

use CriterionId::{C1, C2, C3, C4, C5};

pub(super) static VARIABLES: [VariableDef; 35] = [
    // C1 Objective
    fields(
        1,
        "Recharge objective / final use",
        C1,
        &[f("objetivo", "uso_final")],
        categorical(tables::USO_FINAL),
    ),
    // C2 Hydrogeology
    fields(
        2,
        "Aquifer lithology",
        C2,
        &[f("hidrogeologia", "litologia")],
        categorical(tables::LITOLOGIA),
    ),
    artifacts(3, "Geological model", C2, GEOLOGICAL_MODEL, 3),
    artifacts(4, "Hydrogeological conceptual model", C2, HYDROGEOLOGICAL_MODEL, 4),
    fields(
        5,
        "Saturated thickness (m)",
        C2,
        &[f("hidrogeologia", "espesor_saturado")],
        split(
            Thresholds::new(THICKNESS_SURFACE, 0),
            Thresholds::new(THICKNESS_WELLS, 0),
            Thresholds::new(THICKNESS_SURFACE, 0),
        ),
    ),
    fields(
        6,
        "Depth to water table (m)",
        C2,
        &[f("hidrogeologia", "profundidad_nivel")],
        split(
            Thresholds::new(DEPTH_SURFACE, 1),
            Thresholds::new(DEPTH_WELLS, 2),
            Thresholds::new(DEPTH_CHANNEL, 1),
        ),
    ),
    evidence_only(fields(
        7,
        "Hydraulic conductivity (m/d)",
        C2,
        &[f("hidrogeologia", "permeabilidad")],
        split(
            Thresholds::new(CONDUCTIVITY_SURFACE, 0),
            Thresholds::new(CONDUCTIVITY_WELLS, 0),
            Thresholds::new(CONDUCTIVITY_SURFACE, 0),
        ),
    )),
    fields(
        8,
        "Hydraulic behaviour (confinement)",
        C2,
        &[f("hidrogeologia", "tipo_acuifero")],
        categorical(tables::TIPO_ACUIFERO),
    ),
    evidence_only(fields(
        9,
        "Effective porosity (%)",
        C2,
        &[f("hidrogeologia", "porosidad")],
        shared(
            NumericScale::PercentFromFraction,
            Thresholds::new(POROSITY_PERCENT, 0),
        ),
    )),
    fields(
        10,
        "Transmissivity (m2/d)",
        C2,
        &[f("hidrogeologia", "transmisividad")],
        split(
            Thresholds::new(TRANSMISSIVITY_SURFACE, 0),
            Thresholds::new(TRANSMISSIVITY_WELLS, 0),
            Thresholds::new(TRANSMISSIVITY_SURFACE, 0),
        ),
    ),
    fields(
        11,
        "Piezometric monitoring",
        C2,
        &[
            f("hidrogeologia", "piezometria"),
            f("hidrogeologia", "serie_niveles"),
            f("hidrogeologia", "red_monitoreo"),
        ],
        ScoringRule::Ratio,
    ),
    artifacts(12, "Numerical flow model", C2, NUMERICAL_MODEL, 3),
    fields(
        13,
        "Available storage capacity",
        C2,
        &[f("hidrogeologia", "capacidad_almacenamiento")],
        categorical(tables::CAPACIDAD_ALMACENAMIENTO),
    ),
    // C3 Water source & quality
    fields(
        15,
        "Source type",
        C3,
        &[f("fuente", "tipo_fuente")],
        categorical(tables::TIPO_FUENTE),
    ),
    fields(
        16,
        "Source availability",
        C3,
        &[f("fuente", "volumen_disponible"), f("fuente", "regularidad")],
        ScoringRule::Ratio,
    ),
    fields(
        17,
        "Source water quality",
        C3,
        &[f("calidad", "calidad_fuente")],
        categorical(tables::CALIDAD_FUENTE),
    ),
    fields(
        18,
        "Regulatory compliance",
        C3,
        &[f("calidad", "cumplimiento_normativo")],
        categorical(tables::CUMPLIMIENTO),
    ),
    fields(
        19,
        "Native groundwater quality",
        C3,
        &[f("calidad", "calidad_nativa"), f("calidad", "analisis_nativos")],
        ScoringRule::Ratio,
    ),
    fields(
        20,
        "Hydrogeochemical compatibility",
        C3,
        &[f("calidad", "compatibilidad_hidroquimica")],
        categorical(tables::COMPATIBILIDAD),
    ),
    fields(
        21,
        "Source-aquifer connectivity",
        C3,
        &[f("fuente", "conectividad")],
        categorical(tables::CONECTIVIDAD),
    ),
    fields(
        22,
        "Pretreatment requirements",
        C3,
        &[
            f("calidad", "pretratamiento"),
            f("calidad", "tecnologia_pretratamiento"),
        ],
        ScoringRule::Ratio,
    ),
    // C4 Technical feasibility
    fields(
        23,
        "Land availability (ha)",
        C4,
        &[f("sitio", "superficie_disponible")],
        split(
            Thresholds::new(AREA_BASINS, 0),
            Thresholds::new(AREA_WELLS, 0),
            Thresholds::new(AREA_CHANNEL, 0),
        ),
    ),
    fields(
        24,
        "Terrain slope (%)",
        C4,
        &[f("sitio", "pendiente")],
        split(
            Thresholds::new(SLOPE_BASINS, 0),
            Thresholds::new(SLOPE_WELLS, 1),
            Thresholds::new(SLOPE_CHANNEL, 1),
        ),
    ),
    fields(
        25,
        "Infiltration capacity (m/d)",
        C4,
        &[f("sitio", "tasa_infiltracion")],
        split(
            Thresholds::new(INFILTRATION_SURFACE, 0),
            Thresholds::constant(3),
            Thresholds::new(INFILTRATION_SURFACE, 0),
        ),
    ),
    fields(
        26,
        "Vadose-zone lithology",
        C4,
        &[f("sitio", "litologia_no_saturada")],
        categorical(tables::LITOLOGIA_NO_SATURADA),
    ),
    fields(
        27,
        "Existing infrastructure",
        C4,
        &[
            f("sitio", "pozos_existentes"),
            f("sitio", "canales_existentes"),
            f("sitio", "balsas_existentes"),
        ],
        ScoringRule::Ratio,
    ),
    fields(
        28,
        "Access and energy",
        C4,
        &[f("sitio", "acceso"), f("sitio", "suministro_electrico")],
        ScoringRule::Ratio,
    ),
    fields(
        30,
        "Distance source-site (km)",
        C4,
        &[f("sitio", "distancia_fuente")],
        shared(NumericScale::Raw, Thresholds::new(DISTANCE_KM, 0)),
    ),
    fields(
        31,
        "Drainage network",
        C4,
        &[f("sitio", "red_drenaje")],
        categorical(tables::RED_DRENAJE),
    ),
    // C5 Socio-environmental
    fields(
        32,
        "Land use",
        C5,
        &[f("socioambiental", "uso_suelo")],
        categorical(tables::USO_SUELO),
    ),
    fields(
        33,
        "Protected areas",
        C5,
        &[f("socioambiental", "areas_protegidas")],
        categorical(tables::AREAS_PROTEGIDAS),
    ),
    fields(
        34,
        "Contamination sources inventory",
        C5,
        &[
            f("socioambiental", "fuentes_contaminacion"),
            f("socioambiental", "inventario_contaminantes"),
        ],
        ScoringRule::Ratio,
    ),
    fields(
        35,
        "Social acceptance",
        C5,
        &[f("socioambiental", "aceptacion_social")],
        categorical(tables::ACEPTACION_SOCIAL),
    ),
    fields(
        36,
        "Permitting framework",
        C5,
        &[f("socioambiental", "permisos"), f("socioambiental", "derechos_agua")],
        ScoringRule::Ratio,
    ),
    fields(
        37,
        "Groundwater-dependent ecosystems",
        C5,
        &[f("socioambiental", "ecosistemas_dependientes")],
        categorical(tables::ECOSISTEMAS),
    ),
];
