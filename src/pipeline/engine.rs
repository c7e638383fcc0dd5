//! End-to-end evaluation of one case.

use super::result::{EvaluationReport, ScenarioReport, WeightsReport, ENGINE_VERSION};
use crate::ahp::{AhpEngine, AhpSolution};
use crate::catalog;
use crate::config::{AppConfig, EngineConfig};
use crate::model::{CaseInput, Weighting};
use crate::scoring::{
    aggregate_criteria, resolve_evidence, resolve_scenario, score_matrix, score_variables,
};
use crate::suitability::{
    generate_recommendations, missing_for_next, CompletenessIndex, GlobalSuitability,
    RecommendationContext, SensitivityAnalyzer, WeightSource, WeightVector,
};

/// Suitability engine: evidence → scores → criteria → weights → ranking.
///
/// Holds only configuration; [`SuitabilityEngine::evaluate`] is a pure
/// function of its input, so one engine can serve many threads.
#[derive(Debug, Clone)]
pub struct SuitabilityEngine {
    config: EngineConfig,
    ahp: AhpEngine,
    sensitivity: SensitivityAnalyzer,
}

impl Default for SuitabilityEngine {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl SuitabilityEngine {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.engine.clone(),
            ahp: AhpEngine::from_config(&config.engine),
            sensitivity: SensitivityAnalyzer::from_config(&config.sensitivity),
        }
    }

    #[must_use]
    pub const fn ahp_engine(&self) -> &AhpEngine {
        &self.ahp
    }

    /// Evaluate one case. Data problems degrade to warnings, never errors.
    pub fn evaluate(&self, input: &CaseInput) -> EvaluationReport {
        let mut warnings = Vec::new();

        let records = resolve_evidence(&input.evidence);
        let scenario = resolve_scenario(input.scenario, &records, &input.evidence);
        let scoring = score_variables(&records, &scenario, &input.manual_overrides);
        warnings.extend(scoring.warnings.iter().cloned());

        for id in input.custom_influence.keys() {
            if catalog::variable(*id).is_none() {
                tracing::warn!("Ignoring custom influence for unknown variable {id}");
                warnings.push(format!("custom influence for unknown variable {id} ignored"));
            }
        }

        let criteria = aggregate_criteria(&scoring.variables, &input.custom_influence);
        let matrix = score_matrix(&criteria);

        let (ahp, ahp_warnings) = self.ahp.solve_judgments(&input.weighting.judgments);
        warnings.extend(ahp_warnings);
        let ahp_inverted = input
            .weighting
            .invert_hierarchy
            .then(|| self.ahp.invert_hierarchy(&ahp));

        let weights = select_weights(&input.weighting, &ahp, ahp_inverted.as_ref(), &mut warnings);
        tracing::debug!(
            "weights from {}: {:?}",
            weights.source.label(),
            weights.values.as_array()
        );

        let global = GlobalSuitability::compute(&weights.values, &matrix);
        let completeness =
            CompletenessIndex::compute(&weights.values, &scoring.variables, self.config.partial_credit);

        let sensitivity = input.sensitivity.as_ref().map(|request| {
            let (outcome, sweep_warnings) = self.sensitivity.analyze(request, &weights.values, &matrix);
            warnings.extend(sweep_warnings);
            outcome
        });

        let recommendations = generate_recommendations(&RecommendationContext {
            scenario: &scenario,
            records: &records,
            variables: &scoring.variables,
            criteria: &criteria,
            completeness: &completeness,
            ahp: (!input.weighting.judgments.is_empty()).then_some(&ahp),
            refused_overrides: &scoring.refused_overrides,
            partial_credit: self.config.partial_credit,
        });

        let (next, missing) = missing_for_next(&scenario, &records)
            .map_or((None, Vec::new()), |(level, ids)| (Some(level), ids));
        let scenario_report = ScenarioReport {
            detected: scenario.detected,
            applied: scenario.applied,
            blocked: scenario.blocked(),
            required: scenario.required.clone(),
            overrides: scenario.overrides.clone(),
            next,
            missing_for_next: missing,
        };

        EvaluationReport {
            engine_version: ENGINE_VERSION,
            fingerprint: format!("{:016x}", input.fingerprint()),
            scenario: scenario_report,
            variables: scoring.variables,
            criteria,
            weights,
            ahp,
            ahp_inverted,
            global,
            completeness,
            sensitivity,
            recommendations,
            warnings,
        }
    }
}

/// User percentages win when they sum above 0; otherwise the AHP vector,
/// inverted when requested.
fn select_weights(
    weighting: &Weighting,
    ahp: &AhpSolution,
    inverted: Option<&AhpSolution>,
    warnings: &mut Vec<String>,
) -> WeightsReport {
    if let Some(values) = WeightVector::from_user_percentages(&weighting.user_weights) {
        return WeightsReport {
            source: WeightSource::User,
            values,
        };
    }
    if !weighting.user_weights.is_empty() {
        tracing::warn!("User weights sum to 0; falling back to AHP weights");
        warnings.push("user weights sum to 0; AHP weights used instead".to_string());
    }

    let (source, solution) = match inverted {
        Some(inverted) => (WeightSource::AhpInverted, inverted),
        None => (WeightSource::Ahp, ahp),
    };
    WeightsReport {
        source,
        values: WeightVector::from_slice(&solution.weights).unwrap_or_default(),
    }
}
