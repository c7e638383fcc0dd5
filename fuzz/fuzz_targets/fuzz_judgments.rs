#![no_main]
use libfuzzer_sys::fuzz_target;
use mar_suitability::model::PairwiseJudgment;

/// Fuzz the AHP solver with arbitrary judgment lists.
fuzz_target!(|data: &[u8]| {
    if let Ok(judgments) = serde_json::from_slice::<Vec<PairwiseJudgment>>(data) {
        let engine = mar_suitability::AhpEngine::default();
        let (solution, _) = engine.solve_judgments(&judgments);
        let _ = engine.invert_hierarchy(&solution);
    }
});
