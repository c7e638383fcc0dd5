//! Scenario resolution and operator override tests.

use mar_suitability::model::{
    CaseInput, CriterionId, EvidenceStatus, GroupScores, Provenance, ScenarioLevel,
    ScenarioSelection, TechGroup, VariableId,
};
use mar_suitability::pipeline::SuitabilityEngine;
use mar_suitability::suitability::RecommendationCategory;

fn case(json: &str) -> CaseInput {
    CaseInput::from_json(json).expect("case should parse")
}

/// Scenario 1 and Scenario 2 variables all present.
const PARTIAL_SITE: &str = r#"{
    "evidence": {
        "fields": {
            "objetivo": { "uso_final": "Riego" },
            "hidrogeologia": {
                "litologia": "Arena",
                "profundidad_nivel": 12,
                "tipo_acuifero": "Libre",
                "espesor_saturado": 40,
                "permeabilidad": 2.5,
                "porosidad": 0.18,
                "transmisividad": 600
            },
            "fuente": { "tipo_fuente": "Rio", "conectividad": "Directa" },
            "calidad": {
                "calidad_fuente": "Buena",
                "cumplimiento_normativo": "Cumple",
                "calidad_nativa": "Buena",
                "analisis_nativos": true,
                "compatibilidad_hidroquimica": "Compatible",
                "pretratamiento": "Filtración",
                "tecnologia_pretratamiento": "Decantación"
            },
            "sitio": {
                "superficie_disponible": 3,
                "tasa_infiltracion": 0.8,
                "distancia_fuente": 2
            },
            "socioambiental": { "uso_suelo": "Agricola", "areas_protegidas": "Ninguna" }
        },
        "artifacts": {
            "geo_mapa_geologico": true,
            "geo_cortes_geologicos": true,
            "geo_sondeos": true,
            "hid_mapa_piezometrico": true,
            "hid_balance_hidrico": true,
            "hid_limites_acuifero": true,
            "hid_direccion_flujo": true
        }
    }
}"#;

mod detection {
    use super::*;

    #[test]
    fn test_partial_site_detects_scenario_two() {
        let report = SuitabilityEngine::default().evaluate(&case(PARTIAL_SITE));
        assert_eq!(report.scenario.detected, ScenarioLevel::Partial);
        assert_eq!(report.scenario.required.len(), 22);
        assert_eq!(report.scenario.blocked.len(), 13);
        assert_eq!(report.scenario.next, Some(ScenarioLevel::Full));
    }

    #[test]
    fn test_partial_site_overrides_replace_automatic_scores() {
        let report = SuitabilityEngine::default().evaluate(&case(PARTIAL_SITE));

        for id in [8, 10, 20, 22, 25] {
            assert!(
                report.scenario.overrides.contains_key(&VariableId::new(id)),
                "missing override for V{id}"
            );
        }

        let transmissivity = report.variable(VariableId::new(10)).expect("V10");
        assert_eq!(transmissivity.provenance, Some(Provenance::ScenarioOverride));
        assert_eq!(transmissivity.scores, Some(GroupScores::uniform(3.0)));
        // the rule still ran and is kept for display
        assert!(transmissivity.automatic.is_some());
    }

    #[test]
    fn test_fixed_full_scenario_disables_gating() {
        let input = case(PARTIAL_SITE).with_scenario(ScenarioSelection::Fixed(ScenarioLevel::Full));
        let report = SuitabilityEngine::default().evaluate(&input);

        assert_eq!(report.scenario.detected, ScenarioLevel::Partial);
        assert_eq!(report.scenario.applied, ScenarioLevel::Full);
        assert!(report.scenario.blocked.is_empty());
        assert!(report.scenario.overrides.is_empty());
        let transmissivity = report.variable(VariableId::new(10)).expect("V10");
        assert_eq!(transmissivity.provenance, Some(Provenance::Automatic));
    }

    #[test]
    fn test_fixed_scenario_from_document() {
        let report = SuitabilityEngine::default().evaluate(&case(r#"{ "scenario": 1 }"#));
        assert_eq!(report.scenario.detected, ScenarioLevel::Insufficient);
        assert_eq!(report.scenario.applied, ScenarioLevel::Minimum);
        assert_eq!(report.scenario.blocked.len(), 29);
        assert!(report.scenario.overrides.is_empty());
        let c4 = &report.criteria[CriterionId::C4.index()];
        assert!(c4.blocked);
    }
}

mod operator_overrides {
    use super::*;

    #[test]
    fn test_manual_override_accepted_and_refused() {
        let input = case(
            r#"{
                "manual_overrides": {
                    "V5": { "enabled": true, "score": 3 },
                    "V7": { "enabled": true, "score": 4 },
                    "V23": { "enabled": false, "score": 4 }
                }
            }"#,
        );
        let report = SuitabilityEngine::default().evaluate(&input);

        let thickness = report.variable(VariableId::new(5)).expect("V5");
        assert_eq!(thickness.provenance, Some(Provenance::ManualOverride));
        assert_eq!(thickness.scores, Some(GroupScores::uniform(3.0)));

        let conductivity = report.variable(VariableId::new(7)).expect("V7");
        assert_eq!(conductivity.provenance, None);
        assert_eq!(conductivity.status, EvidenceStatus::Missing);

        let land = report.variable(VariableId::new(23)).expect("V23");
        assert_eq!(land.provenance, None);

        assert_eq!(report.warnings.len(), 1);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.category == RecommendationCategory::Override
                && r.variables == vec![VariableId::new(7)]));
    }

    #[test]
    fn test_manual_override_is_clamped() {
        let input = case(r#"{ "manual_overrides": { "V5": { "enabled": true, "score": 7 } } }"#);
        let report = SuitabilityEngine::default().evaluate(&input);
        let thickness = report.variable(VariableId::new(5)).expect("V5");
        assert_eq!(thickness.scores, Some(GroupScores::uniform(4.0)));
    }

    #[test]
    fn test_custom_influence_counts_without_evidence() {
        let input = case(r#"{ "custom_influence": { "V21": { "G2": 4 } } }"#);
        let report = SuitabilityEngine::default().evaluate(&input);

        let c3 = &report.criteria[CriterionId::C3.index()];
        assert_eq!(c3.scores.get(TechGroup::G2), 4.0);
        assert_eq!(c3.scores.get(TechGroup::G1), 0.0);
        assert_eq!(c3.pinned, vec![VariableId::new(21)]);
        assert!(!c3.critical_gap);
        assert_eq!(c3.breakdown.len(), 1);
        assert_eq!(c3.breakdown[0].provenance, Provenance::CustomInfluence);
        assert_eq!(c3.breakdown[0].variable, VariableId::new(21));
    }

    #[test]
    fn test_custom_influence_never_unblocks() {
        let input = case(r#"{ "scenario": 1, "custom_influence": { "V21": { "G2": 4 } } }"#);
        let report = SuitabilityEngine::default().evaluate(&input);
        let c3 = &report.criteria[CriterionId::C3.index()];
        assert!(c3.pinned.is_empty());
        assert_eq!(c3.scores.get(TechGroup::G2), 0.0);
    }

    #[test]
    fn test_unknown_custom_influence_warns() {
        let input = case(r#"{ "custom_influence": { "V14": { "G1": 2 } } }"#);
        let report = SuitabilityEngine::default().evaluate(&input);
        assert_eq!(report.warnings.len(), 1);
    }
}
