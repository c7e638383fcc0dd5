//! Categorical score tables, keyed by normalized token.
//!
//! Triples are `(G1, G2, G3)`. Aliases cover spelling variants and English
//! equivalents of each canonical token.

use super::{cat, Category};

// ============================================================================
// Shared aliases
// ============================================================================

const LIBRE: &[&str] = &["free", "unconfined", "freatico", "phreatic", "no confinado"];
const CONFINADO: &[&str] = &["confined", "cautivo"];
const SEMICONFINADO: &[&str] = &["semi confinado", "semiconfined", "semi confined", "leaky"];
const MULTICAPA: &[&str] = &["multilayer", "multi layer", "multicapas"];

const DIRECTA: &[&str] = &["direct", "directo", "conectado", "hydraulic connection"];
const INDIRECTA: &[&str] = &["indirect", "indirecto"];
const SIN_CONEXION: &[&str] = &["no connection", "not connected", "desconectado", "none", "no"];

const BUENA: &[&str] = &["good", "bueno", "excelente", "excellent"];
const ACEPTABLE: &[&str] = &["acceptable", "regular", "fair", "moderada"];
const DEFICIENTE: &[&str] = &["poor", "deficient"];
const MALA: &[&str] = &["bad", "malo", "muy mala", "very poor"];

const CUMPLE: &[&str] = &["si", "yes", "compliant", "complies", "conforme"];
const CUMPLE_PARCIAL: &[&str] = &["parcial", "parcialmente", "partial", "partially compliant"];
const NO_CUMPLE: &[&str] = &["no", "incumple", "non compliant", "noncompliant"];

const ABASTECIMIENTO: &[&str] = &[
    "abastecimiento",
    "consumo humano",
    "agua potable",
    "potable",
    "drinking water",
    "human supply",
];
const RIEGO: &[&str] = &["agricultura", "irrigation", "agricultural"];
const AMBIENTAL: &[&str] = &["caudal ecologico", "ecologico", "environmental", "ecosystem"];
const INTRUSION: &[&str] = &[
    "barrera hidraulica",
    "seawater intrusion",
    "saline intrusion",
    "saltwater intrusion",
];
const ALMACENAMIENTO: &[&str] = &[
    "almacenamiento",
    "reserva estrategica",
    "strategic storage",
    "water banking",
    "banking",
];
const INDUSTRIAL: &[&str] = &["industria", "industry"];

const ESCORRENTIA: &[&str] = &[
    "escorrentia superficial",
    "runoff",
    "stormwater",
    "pluvial",
    "aguas lluvia",
];
const RIO: &[&str] = &["river", "stream", "rio permanente", "cauce"];
const RESIDUAL: &[&str] = &[
    "treated wastewater",
    "reclaimed water",
    "efluente tratado",
    "agua regenerada",
    "edar",
];
const DESALADA: &[&str] = &["desalinated", "desalinated water", "desalacion"];
const EXCEDENTES: &[&str] = &["excedentes", "network surplus", "potable surplus", "red de abastecimiento"];
const MANANTIAL: &[&str] = &["spring", "fuente natural"];

const GRAVA: &[&str] = &["gravel", "gravas"];
const ARENA: &[&str] = &["sand", "arenas"];
const LIMO: &[&str] = &["silt", "limos"];
const ARCILLA: &[&str] = &["clay", "arcillas"];
const FRACTURADA: &[&str] = &["fractured rock", "fracturada"];

// ============================================================================
// Variable tables
// ============================================================================

/// V1 recharge objective / final use.
pub const USO_FINAL: &[Category] = &[
    cat("abastecimiento humano", ABASTECIMIENTO, [3, 4, 2]),
    cat("riego", RIEGO, [4, 3, 4]),
    cat("ambiental", AMBIENTAL, [4, 2, 4]),
    cat("intrusion salina", INTRUSION, [2, 4, 1]),
    cat("almacenamiento estrategico", ALMACENAMIENTO, [3, 4, 2]),
    cat("industrial", INDUSTRIAL, [3, 3, 2]),
];

/// V2 aquifer lithology.
pub const LITOLOGIA: &[Category] = &[
    cat("grava", GRAVA, [4, 4, 4]),
    cat(
        "arena y grava",
        &["sand and gravel", "arenas y gravas", "aluvial", "alluvium"],
        [4, 4, 4],
    ),
    cat("arena", ARENA, [4, 3, 4]),
    cat("limo", LIMO, [2, 2, 2]),
    cat("arcilla", ARCILLA, [0, 1, 0]),
    cat("roca fracturada", FRACTURADA, [1, 3, 1]),
    cat("karst", &["karstico", "karstic", "karstificada", "caliza karstica"], [2, 4, 2]),
    cat(
        "roca consolidada",
        &["consolidated rock", "roca masiva", "bedrock"],
        [0, 1, 0],
    ),
];

/// V8 hydraulic behaviour; also the confinement facet of the V8 override.
pub const TIPO_ACUIFERO: &[Category] = &[
    cat("libre", LIBRE, [4, 1, 4]),
    cat("confinado", CONFINADO, [1, 4, 1]),
    cat("semiconfinado", SEMICONFINADO, [2, 3, 2]),
    cat("multicapa", MULTICAPA, [2, 3, 1]),
];

/// V13 available storage capacity.
pub const CAPACIDAD_ALMACENAMIENTO: &[Category] = &[
    cat("alta", &["high", "alto"], [4, 4, 4]),
    cat("media", &["medium", "medio", "moderada", "moderate"], [3, 3, 3]),
    cat("baja", &["low", "bajo"], [1, 1, 1]),
    cat("nula", &["none", "nulo", "ninguna"], [0, 0, 0]),
];

/// V15 source type.
pub const TIPO_FUENTE: &[Category] = &[
    cat("escorrentia", ESCORRENTIA, [4, 2, 4]),
    cat("rio", RIO, [4, 3, 3]),
    cat("agua residual tratada", RESIDUAL, [3, 2, 1]),
    cat("agua desalada", DESALADA, [2, 4, 1]),
    cat("excedentes de red", EXCEDENTES, [2, 4, 1]),
    cat("manantial", MANANTIAL, [3, 3, 3]),
];

/// V17 source water quality; also a facet of the V20 override.
pub const CALIDAD_FUENTE: &[Category] = &[
    cat("buena", BUENA, [4, 4, 4]),
    cat("aceptable", ACEPTABLE, [3, 2, 3]),
    cat("deficiente", DEFICIENTE, [1, 0, 1]),
    cat("mala", MALA, [0, 0, 0]),
];

/// V18 regulatory compliance; also a facet of the V20 override.
pub const CUMPLIMIENTO: &[Category] = &[
    cat("cumple", CUMPLE, [4, 4, 4]),
    cat("cumple parcialmente", CUMPLE_PARCIAL, [2, 1, 2]),
    cat("no cumple", NO_CUMPLE, [0, 0, 0]),
];

/// V20 hydrogeochemical compatibility.
pub const COMPATIBILIDAD: &[Category] = &[
    cat("compatible", &["compatibles"], [4, 4, 4]),
    cat("riesgo bajo", &["low risk", "bajo"], [3, 3, 3]),
    cat("riesgo moderado", &["moderate risk", "moderado", "medio"], [2, 1, 2]),
    cat("riesgo alto", &["high risk", "alto"], [0, 0, 0]),
    cat(
        "incompatible",
        &["incompatibles", "no compatible", "not compatible"],
        [0, 0, 0],
    ),
];

/// V21 source-aquifer connectivity.
pub const CONECTIVIDAD: &[Category] = &[
    cat("directa", DIRECTA, [4, 2, 4]),
    cat("indirecta", INDIRECTA, [2, 4, 2]),
    cat("sin conexion", SIN_CONEXION, [1, 4, 0]),
];

/// V26 vadose-zone lithology.
pub const LITOLOGIA_NO_SATURADA: &[Category] = &[
    cat("grava", GRAVA, [4, 3, 4]),
    cat("arena", ARENA, [4, 3, 4]),
    cat("limo", LIMO, [2, 3, 2]),
    cat("arcilla", ARCILLA, [0, 3, 0]),
    cat("roca fracturada", FRACTURADA, [1, 3, 1]),
];

/// V31 drainage network.
pub const RED_DRENAJE: &[Category] = &[
    cat(
        "cauce permanente",
        &["permanent stream", "perennial", "perenne", "rio permanente"],
        [2, 1, 4],
    ),
    cat(
        "cauce efimero",
        &[
            "ephemeral",
            "ephemeral stream",
            "efimero",
            "intermitente",
            "intermittent",
            "rambla",
            "wadi",
        ],
        [3, 1, 4],
    ),
    cat("sin cauce", &["no stream", "ninguno", "none", "no"], [3, 3, 0]),
];

/// V32 land use.
pub const USO_SUELO: &[Category] = &[
    cat("agricola", &["agricultural", "agriculture", "cultivo"], [4, 3, 4]),
    cat("forestal", &["forest", "bosque"], [3, 3, 3]),
    cat("urbano", &["urban"], [1, 4, 1]),
    cat("industrial", INDUSTRIAL, [0, 2, 0]),
    cat("improductivo", &["baldio", "eriazo", "barren", "unused"], [4, 4, 3]),
    cat("protegido", &["protected"], [0, 1, 0]),
];

/// V33 protected areas.
pub const AREAS_PROTEGIDAS: &[Category] = &[
    cat("ninguna", &["ninguno", "none", "no", "fuera", "outside"], [4, 4, 4]),
    cat(
        "zona de amortiguamiento",
        &["amortiguamiento", "buffer", "buffer zone", "colindante", "adjacent"],
        [2, 3, 2],
    ),
    cat(
        "dentro",
        &["dentro de area protegida", "inside", "within", "si", "yes"],
        [0, 1, 0],
    ),
];

/// V35 social acceptance.
pub const ACEPTACION_SOCIAL: &[Category] = &[
    cat("alta", &["high", "alto"], [4, 4, 4]),
    cat("media", &["medium", "medio", "moderada", "moderate"], [3, 3, 3]),
    cat("baja", &["low", "bajo"], [1, 1, 1]),
    cat("conflicto", &["conflict", "rechazo", "opposition"], [0, 0, 0]),
];

/// V37 groundwater-dependent ecosystems.
pub const ECOSISTEMAS: &[Category] = &[
    cat("presentes", &["presente", "present", "si", "yes"], [4, 3, 4]),
    cat("ausentes", &["ausente", "absent", "none", "no"], [3, 3, 3]),
    cat("afectados", &["afectado", "affected", "degradados", "degraded"], [1, 1, 1]),
];

// ============================================================================
// Scenario override facet tables
// ============================================================================

/// Storage behaviour implied by the aquifer type (V8 override).
pub const ALMACENAMIENTO_POR_TIPO: &[Category] = &[
    cat("libre", LIBRE, [4, 4, 4]),
    cat("confinado", CONFINADO, [1, 3, 1]),
    cat("semiconfinado", SEMICONFINADO, [3, 3, 3]),
    cat("multicapa", MULTICAPA, [3, 3, 2]),
];

/// Connectivity as evidence of hydraulic behaviour (V8 override).
pub const CONECTIVIDAD_HIDRAULICA: &[Category] = &[
    cat("directa", DIRECTA, [4, 2, 4]),
    cat("indirecta", INDIRECTA, [2, 4, 2]),
    cat("sin conexion", SIN_CONEXION, [1, 3, 1]),
];

/// Transmissivity proxy from aquifer type (V10 override).
pub const TRANSMISIVIDAD_POR_TIPO: &[Category] = &[
    cat("libre", LIBRE, [3, 3, 3]),
    cat("confinado", CONFINADO, [2, 4, 2]),
    cat("semiconfinado", SEMICONFINADO, [3, 3, 3]),
    cat("multicapa", MULTICAPA, [2, 3, 2]),
];

/// Hydrogeochemical proxy from source type (V20 override).
pub const COMPATIBILIDAD_POR_FUENTE: &[Category] = &[
    cat("escorrentia", ESCORRENTIA, [3, 2, 3]),
    cat("rio", RIO, [3, 3, 3]),
    cat("agua residual tratada", RESIDUAL, [2, 1, 1]),
    cat("agua desalada", DESALADA, [3, 4, 2]),
    cat("excedentes de red", EXCEDENTES, [4, 4, 3]),
    cat("manantial", MANANTIAL, [3, 3, 3]),
];

/// Pretreatment proxy from source quality (V22 override).
pub const PRETRATAMIENTO_POR_CALIDAD: &[Category] = &[
    cat("buena", BUENA, [4, 4, 4]),
    cat("aceptable", ACEPTABLE, [3, 2, 3]),
    cat("deficiente", DEFICIENTE, [1, 1, 1]),
    cat("mala", MALA, [0, 0, 0]),
];

/// Pretreatment proxy from final use (V22 override).
pub const PRETRATAMIENTO_POR_USO: &[Category] = &[
    cat("riego", RIEGO, [4, 4, 4]),
    cat("ambiental", AMBIENTAL, [3, 3, 3]),
    cat("abastecimiento humano", ABASTECIMIENTO, [2, 1, 2]),
    cat("intrusion salina", INTRUSION, [3, 2, 3]),
    cat("almacenamiento estrategico", ALMACENAMIENTO, [3, 2, 3]),
    cat("industrial", INDUSTRIAL, [3, 3, 3]),
];

/// Pretreatment proxy from regulatory compliance (V22 override).
pub const PRETRATAMIENTO_POR_NORMATIVA: &[Category] = &[
    cat("cumple", CUMPLE, [4, 4, 4]),
    cat("cumple parcialmente", CUMPLE_PARCIAL, [2, 2, 2]),
    cat("no cumple", NO_CUMPLE, [1, 0, 1]),
];

/// Infiltration proxy from aquifer type (V25 override).
pub const INFILTRACION_POR_TIPO: &[Category] = &[
    cat("libre", LIBRE, [4, 3, 4]),
    cat("confinado", CONFINADO, [1, 3, 1]),
    cat("semiconfinado", SEMICONFINADO, [2, 3, 2]),
    cat("multicapa", MULTICAPA, [2, 3, 2]),
];

/// Infiltration proxy from connectivity (V25 override).
pub const INFILTRACION_POR_CONECTIVIDAD: &[Category] = &[
    cat("directa", DIRECTA, [4, 3, 4]),
    cat("indirecta", INDIRECTA, [2, 3, 2]),
    cat("sin conexion", SIN_CONEXION, [1, 3, 1]),
];
