//! Record types for the two sides of the marketplace.
//!
//! Both records are flat and write-once: a draft collects raw form answers,
//! the validation gate accepts or rejects the draft as a whole, and the
//! constructor turns an accepted draft into an immutable record with a
//! fresh identifier and timestamp. No update operation exists anywhere —
//! a partially-filled record can never be observed.

pub mod enums;
mod problem;
mod profile;

pub use enums::{
    join_labels, CompanyStage, Domain, ImpactArea, ProblemType, Remedy, RootCause, StartupStage,
};
pub use problem::{FounderProblem, FounderProblemDraft};
pub use profile::{split_tags, SeniorProfile, SeniorProfileDraft};

/// Rejection from the validation gate.
///
/// Deliberately a single catch-all message that does not identify the
/// failing field — the intake form re-presents every answer for
/// correction instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill all required fields marked with *.")]
    MissingRequired,
}

/// Non-empty after trimming — the gate's test for scalar text fields.
pub(crate) fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}
