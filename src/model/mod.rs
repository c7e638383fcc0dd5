//! Core data model for suitability evaluation.
//!
//! The engine consumes a [`CaseInput`] (an [`EvidenceSnapshot`] plus weighting
//! and operator overrides) and derives one [`EvidenceRecord`] per catalog
//! variable. Scores are carried as [`GroupScores`] tagged with a
//! [`Provenance`].
//!
//! ```ignore
//! let case = CaseInput::new(
//!     EvidenceSnapshot::new().with_field("hidrogeologia", "tipo_acuifero", "Libre"),
//! )
//! .with_scenario(ScenarioSelection::Fixed(ScenarioLevel::Minimum));
//! ```

mod evidence;
mod ids;
mod input;
mod scenario;
mod score;

pub use evidence::*;
pub use ids::*;
pub use input::*;
pub use scenario::*;
pub use score::*;
