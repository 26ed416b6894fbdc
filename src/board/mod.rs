//! The Virtual Senior Advisory Board — rule-based responder.
//!
//! Entirely deterministic: a fixed table of trigger → message rules for
//! the diagnosis and a fixed three-entry advisor catalog for the matches.
//! No model, no search, no external call. In production this layer is the
//! seam where a generative reasoning service would plug in.

mod advisors;
mod diagnosis;

pub use advisors::{match_advisors, AdvisorMatch, CATALOG, MAX_MATCHES};
pub use diagnosis::{diagnose, FALLBACK_SUMMARY};
