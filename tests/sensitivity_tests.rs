//! Weight sensitivity sweep tests.

use mar_suitability::config::AppConfig;
use mar_suitability::model::{CriterionId, GroupScores, SensitivityRequest};
use mar_suitability::suitability::{SensitivityAnalyzer, SensitivityOutcome, WeightVector};

/// G1 and G3 tie on every criterion; G2 only leads on C2.
fn matrix() -> [GroupScores; 5] {
    [
        GroupScores::new(4.0, 3.0, 4.0),
        GroupScores::new(1.0, 4.0, 1.0),
        GroupScores::new(3.0, 2.0, 3.0),
        GroupScores::new(3.2, 3.0, 3.2),
        GroupScores::new(3.0, 2.0, 3.0),
    ]
}

fn sweep(request: &SensitivityRequest) -> SensitivityOutcome {
    let (outcome, _) =
        SensitivityAnalyzer::default().analyze(request, &WeightVector::uniform(), &matrix());
    outcome
}

#[test]
fn test_first_change_at_plus_ten_percent() {
    let outcome = sweep(&SensitivityRequest::new(CriterionId::C2).with_range(20.0, 5.0));
    let report = outcome.report().expect("sweep should run");

    assert_eq!(report.baseline_ranking, "G1 > G3 > G2");
    assert_eq!(report.rows.len(), 9);
    assert!(!report.fully_robust);

    let change = report.first_change.as_ref().expect("ranking should change");
    assert!((change.delta_percent - 10.0).abs() < 1e-9);
    assert!((change.tested_weight - 0.22).abs() < 1e-12);
    assert_eq!(change.ranking, "G2 > G1 > G3");
}

#[test]
fn test_rows_are_ascending_and_normalized() {
    let outcome = sweep(&SensitivityRequest::new(CriterionId::C2).with_range(20.0, 5.0));
    let report = outcome.report().expect("sweep should run");

    let deltas: Vec<f64> = report.rows.iter().map(|r| r.delta_percent).collect();
    assert_eq!(deltas, vec![-20.0, -15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0, 20.0]);
    for row in &report.rows {
        assert!((row.weights.sum() - 1.0).abs() < 1e-9);
        // untested criteria keep equal shares of the remainder
        let other = row.weights.get(CriterionId::C1);
        assert!((row.weights.get(CriterionId::C5) - other).abs() < 1e-12);
    }
    // reducing C2 never lets G2 overtake
    for row in report.rows.iter().filter(|r| r.delta_percent <= 5.0) {
        assert_eq!(row.ranking, report.baseline_ranking);
    }
}

#[test]
fn test_robust_criterion() {
    let outcome = sweep(&SensitivityRequest::new(CriterionId::C1).with_range(10.0, 5.0));
    let report = outcome.report().expect("sweep should run");
    assert!(report.fully_robust);
    assert!(report.first_change.is_none());
}

#[test]
fn test_zero_weight_is_not_ready() {
    let weights = WeightVector::from_array([0.5, 0.0, 0.2, 0.2, 0.1]).expect("valid weights");
    let (outcome, warnings) = SensitivityAnalyzer::default().analyze(
        &SensitivityRequest::new(CriterionId::C2),
        &weights,
        &matrix(),
    );
    assert!(!outcome.is_ready());
    assert!(warnings.is_empty());
}

#[test]
fn test_defaults_come_from_config() {
    let config = AppConfig::builder().sensitivity(10.0, 2.5).build();
    let analyzer = SensitivityAnalyzer::from_config(&config.sensitivity);
    let (outcome, _) = analyzer.analyze(
        &SensitivityRequest::new(CriterionId::C4),
        &WeightVector::uniform(),
        &matrix(),
    );
    let report = outcome.report().expect("sweep should run");
    assert_eq!(report.range_percent, 10.0);
    assert_eq!(report.step_percent, 2.5);
    assert_eq!(report.rows.len(), 9);
}

#[test]
fn test_outcome_json_is_tagged() {
    let outcome = sweep(&SensitivityRequest {
        criterion: "C8".to_string(),
        range_percent: None,
        step_percent: None,
    });
    let value = serde_json::to_value(&outcome).expect("serialize");
    assert_eq!(value["status"], "not_ready");
    assert_eq!(value["criterion"], "C8");
}

#[test]
fn test_tiny_step_through_engine_is_bounded() {
    use mar_suitability::model::{CaseInput, EvidenceSnapshot};
    use mar_suitability::suitability::MAX_STEPS_PER_SIDE;
    use mar_suitability::SuitabilityEngine;

    let input = CaseInput::new(
        EvidenceSnapshot::new().with_field("hidrogeologia", "tipo_acuifero", "Libre"),
    )
    .with_sensitivity(SensitivityRequest::new(CriterionId::C1).with_range(50.0, 1e-9));
    let report = SuitabilityEngine::default().evaluate(&input);

    let sweep = report
        .sensitivity
        .as_ref()
        .and_then(SensitivityOutcome::report)
        .expect("sweep should run");
    assert!(sweep.rows.len() <= 2 * MAX_STEPS_PER_SIDE + 3);
    assert!(report.warnings.iter().any(|w| w.contains("raised")));
}
