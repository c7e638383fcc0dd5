//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → evaluate → report pipeline and the
//! CLI command handlers with real fixture files.

use mar_suitability::cli::{
    gate_exit_code, run_ahp, run_batch, run_catalog, run_evaluate, EvaluateOptions,
};
use mar_suitability::config::{AppConfig, BehaviorConfig};
use mar_suitability::model::{
    CaseInput, CriterionId, EvidenceStatus, GroupScores, Provenance, ScenarioLevel, TechGroup,
    VariableId,
};
use mar_suitability::pipeline::{exit_codes, SuitabilityEngine};
use mar_suitability::reports::{create_reporter, ReportFormat};
use mar_suitability::suitability::{CompletenessBand, WeightSource};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn load(name: &str) -> CaseInput {
    CaseInput::from_path(&fixture_path(name)).expect("fixture should parse")
}

/// JSON output to a temp file so nothing depends on the terminal.
fn json_config(dir: &TempDir, file: &str) -> (AppConfig, PathBuf) {
    let path = dir.path().join(file);
    let config = AppConfig::builder()
        .output_format(ReportFormat::Json)
        .output_file(Some(path.clone()))
        .quiet(true)
        .build();
    (config, path)
}

// ============================================================================
// Evaluation
// ============================================================================

mod evaluation {
    use super::*;

    #[test]
    fn test_minimum_site_detects_scenario_one() {
        let report = SuitabilityEngine::default().evaluate(&load("cases/minimum_site.json"));

        assert_eq!(report.scenario.detected, ScenarioLevel::Minimum);
        assert_eq!(report.scenario.applied, ScenarioLevel::Minimum);
        assert_eq!(report.scenario.blocked.len(), 29);
        assert_eq!(report.scenario.next, Some(ScenarioLevel::Partial));
        assert_eq!(report.scenario.missing_for_next.len(), 16);
    }

    #[test]
    fn test_minimum_site_variable_scores() {
        let report = SuitabilityEngine::default().evaluate(&load("cases/minimum_site.json"));

        let depth = report.variable(VariableId::new(6)).expect("V6");
        assert_eq!(depth.scores, Some(GroupScores::new(4.0, 2.0, 4.0)));
        assert_eq!(depth.provenance, Some(Provenance::Automatic));

        let confinement = report.variable(VariableId::new(8)).expect("V8");
        assert_eq!(confinement.provenance, Some(Provenance::ScenarioOverride));

        let slope = report.variable(VariableId::new(24)).expect("V24");
        assert_eq!(slope.status, EvidenceStatus::Blocked);
        assert_eq!(slope.provenance, None);
    }

    #[test]
    fn test_minimum_site_ranking_and_completeness() {
        let report = SuitabilityEngine::default().evaluate(&load("cases/minimum_site.json"));

        assert_eq!(report.weights.source, WeightSource::Ahp);
        assert_eq!(report.global.ranking_label, "G1 > G3 > G2");
        assert_eq!(report.leader(), TechGroup::G1);
        assert!((report.best_suitability() - 2.4).abs() < 1e-9);

        // C4 and C5 are fully blocked and drop out of the index
        assert!(report.completeness.index > 99.999);
        assert_eq!(report.completeness.band, CompletenessBand::VeryHigh);
        let c4 = &report.completeness.breakdown[&CriterionId::C4];
        assert_eq!(c4.ratio, None);
    }

    #[test]
    fn test_sparse_site_uses_user_weights() {
        let report = SuitabilityEngine::default().evaluate(&load("cases/sparse_site.json"));

        assert_eq!(report.scenario.detected, ScenarioLevel::Insufficient);
        assert!(report.scenario.blocked.is_empty());
        assert_eq!(report.weights.source, WeightSource::User);
        assert!((report.weights.values.get(CriterionId::C2) - 0.4).abs() < 1e-12);

        let lithology = report.variable(VariableId::new(2)).expect("V2");
        assert_eq!(lithology.status, EvidenceStatus::Missing);
        assert_eq!(report.global.ranking_label, "G2 > G1 > G3");
    }

    #[test]
    fn test_sparse_site_sensitivity_rows() {
        let report = SuitabilityEngine::default().evaluate(&load("cases/sparse_site.json"));
        let sweep = report
            .sensitivity
            .as_ref()
            .and_then(|outcome| outcome.report())
            .expect("sweep should run");

        assert_eq!(sweep.rows.len(), 9);
        for row in &sweep.rows {
            assert!((row.weights.sum() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_reports_are_deterministic() {
        let case = load("cases/sparse_site.json");
        let engine = SuitabilityEngine::default();
        let first = serde_json::to_string(&engine.evaluate(&case)).expect("serialize");
        let second = serde_json::to_string(&engine.evaluate(&case)).expect("serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn test_batch_matches_single_evaluation() {
        let cases = vec![load("cases/minimum_site.json"), load("cases/sparse_site.json")];
        let engine = SuitabilityEngine::default();
        let batch = engine.evaluate_batch(&cases);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], engine.evaluate(&cases[0]));
        assert_eq!(batch[1], engine.evaluate(&cases[1]));
    }

    #[test]
    fn test_answers_starting_with_no_stay_unscored() {
        let input = CaseInput::from_json(
            r#"{
                "evidence": { "fields": {
                    "calidad": { "cumplimiento_normativo": "No evaluado" },
                    "fuente": { "conectividad": "no determinada" },
                    "socioambiental": { "areas_protegidas": "No se sabe" }
                } }
            }"#,
        )
        .expect("valid case");
        let report = SuitabilityEngine::default().evaluate(&input);

        for id in [18, 21, 33] {
            let variable = report.variable(VariableId::new(id)).expect("cataloged");
            assert_eq!(variable.scores, None, "V{id} should be unscored");
            assert_eq!(variable.provenance, None);
            assert!(variable
                .unscored_reason
                .as_deref()
                .is_some_and(|reason| reason.starts_with("unrecognized value")));
        }
        assert_eq!(
            report
                .warnings
                .iter()
                .filter(|w| w.contains("left unscored"))
                .count(),
            3
        );
    }
}

// ============================================================================
// Reports
// ============================================================================

mod reports {
    use super::*;

    #[test]
    fn test_json_report_parses_back() {
        let report = SuitabilityEngine::default().evaluate(&load("cases/minimum_site.json"));
        let json = create_reporter(ReportFormat::Json)
            .generate_evaluation_report(&report)
            .expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["scenario"]["detected"], 1);
        let c1 = value["weights"]["values"]["C1"].as_f64().expect("C1 weight");
        assert!((c1 - 0.2).abs() < 1e-12);
        assert_eq!(value["criteria"].as_array().map(Vec::len), Some(5));
        assert_eq!(value["variables"].as_array().map(Vec::len), Some(35));
    }

    #[test]
    fn test_summary_report_mentions_ranking() {
        let report = SuitabilityEngine::default().evaluate(&load("cases/minimum_site.json"));
        let text = create_reporter(ReportFormat::Summary)
            .generate_evaluation_report(&report)
            .expect("render");
        assert!(text.contains("G1 > G3 > G2"));
    }
}

// ============================================================================
// CLI Handlers
// ============================================================================

mod cli_handlers {
    use super::*;

    #[test]
    fn test_run_evaluate_writes_json() {
        let dir = TempDir::new().expect("tempdir");
        let (config, out) = json_config(&dir, "report.json");
        let options = EvaluateOptions {
            case_path: fixture_path("cases/minimum_site.json"),
            criterion: Some(CriterionId::C1),
            ..EvaluateOptions::default()
        };

        let code = run_evaluate(options, &config).expect("evaluate");
        assert_eq!(code, exit_codes::SUCCESS);

        let written = std::fs::read_to_string(&out).expect("report written");
        let value: serde_json::Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(value["sensitivity"]["status"], "ready");
    }

    #[test]
    fn test_run_evaluate_min_suitability_gate() {
        let dir = TempDir::new().expect("tempdir");
        let (mut config, _) = json_config(&dir, "report.json");
        config.behavior.min_suitability = Some(3.5);
        let options = EvaluateOptions {
            case_path: fixture_path("cases/minimum_site.json"),
            ..EvaluateOptions::default()
        };

        let code = run_evaluate(options, &config).expect("evaluate");
        assert_eq!(code, exit_codes::THRESHOLD_NOT_MET);
    }

    #[test]
    fn test_run_evaluate_missing_file_is_error() {
        let dir = TempDir::new().expect("tempdir");
        let (config, _) = json_config(&dir, "report.json");
        let options = EvaluateOptions {
            case_path: fixture_path("cases/does_not_exist.json"),
            ..EvaluateOptions::default()
        };
        assert!(run_evaluate(options, &config).is_err());
    }

    #[test]
    fn test_run_ahp_require_consistent() {
        let dir = TempDir::new().expect("tempdir");
        let (mut config, out) = json_config(&dir, "ahp.json");
        config.behavior.require_consistent = true;

        let code = run_ahp(&fixture_path("judgments/consistent.json"), false, &config).expect("ahp");
        assert_eq!(code, exit_codes::SUCCESS);

        let code = run_ahp(&fixture_path("judgments/cyclic.json"), true, &config).expect("ahp");
        assert_eq!(code, exit_codes::THRESHOLD_NOT_MET);

        let written = std::fs::read_to_string(&out).expect("report written");
        let value: serde_json::Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(value["consistent"], false);
        assert!(value["inverted"].is_object());
        // the C9 entry and the inconsistency both warn
        assert_eq!(value["warnings"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_run_batch_and_catalog() {
        let dir = TempDir::new().expect("tempdir");
        let (config, out) = json_config(&dir, "batch.json");
        let paths = vec![
            fixture_path("cases/minimum_site.json"),
            fixture_path("cases/sparse_site.json"),
        ];
        assert_eq!(run_batch(&paths, &config).expect("batch"), exit_codes::SUCCESS);
        let written = std::fs::read_to_string(&out).expect("report written");
        let value: serde_json::Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(value.as_array().map(Vec::len), Some(2));

        assert_eq!(run_catalog(&config).expect("catalog"), exit_codes::SUCCESS);
    }

    #[test]
    fn test_gate_uses_behavior_config() {
        let report = SuitabilityEngine::default().evaluate(&load("cases/minimum_site.json"));
        assert_eq!(gate_exit_code(&report, &BehaviorConfig::default()), exit_codes::SUCCESS);
    }
}
