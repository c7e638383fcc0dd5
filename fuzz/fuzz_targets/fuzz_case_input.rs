#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz case loading and the full evaluation.
///
/// Any document that deserializes must evaluate without panicking, whatever
/// its evidence values, overrides or sensitivity parameters.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(input) = mar_suitability::CaseInput::from_json(s) {
            let _ = mar_suitability::SuitabilityEngine::default().evaluate(&input);
        }
    }
});
