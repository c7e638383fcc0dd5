//! Evidence resolution: raw snapshot to one record per variable.

use crate::catalog::{self, VariableDef};
use crate::model::{EvidenceRecord, EvidenceSnapshot};

/// Build the evidence record of every cataloged variable, in catalog order.
#[must_use]
pub fn resolve_evidence(snapshot: &EvidenceSnapshot) -> Vec<EvidenceRecord> {
    catalog::variables()
        .iter()
        .map(|def| resolve_variable(def, snapshot))
        .collect()
}

/// Build one variable's record. Unresolvable lookups count as absent.
#[must_use]
pub fn resolve_variable(def: &VariableDef, snapshot: &EvidenceSnapshot) -> EvidenceRecord {
    let present_inputs = def
        .fields
        .iter()
        .filter(|f| snapshot.is_present(f.module, f.field))
        .count();
    let artifacts_present = def
        .artifacts
        .iter()
        .filter(|layer| snapshot.artifact_present(layer))
        .count();

    let (categorical_token, numeric_value) = def.primary_field().map_or((None, None), |f| {
        (
            snapshot.token(f.module, f.field),
            snapshot.number(f.module, f.field),
        )
    });

    EvidenceRecord {
        variable: def.id,
        present_inputs,
        required_inputs: def.min_fields,
        categorical_token,
        numeric_value,
        artifacts_present,
        artifacts_required: def.min_artifacts,
    }
}
