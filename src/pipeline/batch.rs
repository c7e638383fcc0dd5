//! Parallel evaluation of independent cases.

use rayon::prelude::*;
use std::collections::BTreeMap;

use super::{EvaluationReport, SuitabilityEngine};
use crate::model::CaseInput;

impl SuitabilityEngine {
    /// Evaluate cases in parallel, preserving input order.
    pub fn evaluate_batch(&self, cases: &[CaseInput]) -> Vec<EvaluationReport> {
        tracing::debug!("evaluating {} cases in parallel", cases.len());
        cases.par_iter().map(|case| self.evaluate(case)).collect()
    }

    /// Evaluate keyed cases in parallel; keys are kept.
    pub fn evaluate_cases(&self, cases: &BTreeMap<String, CaseInput>) -> BTreeMap<String, EvaluationReport> {
        cases
            .par_iter()
            .map(|(key, case)| (key.clone(), self.evaluate(case)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EvidenceSnapshot;

    fn cases() -> Vec<CaseInput> {
        ["Libre", "Confinado", "Semiconfinado", "no reportado"]
            .iter()
            .map(|aquifer| {
                CaseInput::new(
                    EvidenceSnapshot::new()
                        .with_field("hidrogeologia", "tipo_acuifero", *aquifer)
                        .with_field("objetivo", "uso_final", "Riego"),
                )
            })
            .collect()
    }

    #[test]
    fn test_batch_matches_sequential() {
        let engine = SuitabilityEngine::default();
        let cases = cases();
        let parallel = engine.evaluate_batch(&cases);
        let sequential: Vec<_> = cases.iter().map(|c| engine.evaluate(c)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_keyed_cases_keep_keys() {
        let engine = SuitabilityEngine::default();
        let keyed: BTreeMap<String, CaseInput> = cases()
            .into_iter()
            .enumerate()
            .map(|(i, case)| (format!("site-{i}"), case))
            .collect();
        let reports = engine.evaluate_cases(&keyed);
        assert_eq!(reports.len(), 4);
        assert_eq!(reports["site-2"], engine.evaluate(&keyed["site-2"]));
    }
}
