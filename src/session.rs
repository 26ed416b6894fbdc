//! Per-session ephemeral state.
//!
//! Holds at most one record (and its cached payload text) per flow for the
//! lifetime of one interactive run. No global singleton — the page handler
//! owns this and passes it explicitly. Everything here is forgotten when
//! the process exits or the user asks to start over.

use crate::model::{FounderProblem, SeniorProfile};

#[derive(Debug, Default)]
pub struct SessionState {
    pub profile: Option<SeniorProfile>,
    /// Payload text derived from `profile` at submission time.
    pub profile_prompt: Option<String>,
    pub problem: Option<FounderProblem>,
    /// Payload text derived from `problem` at submission time.
    pub problem_prompt: Option<String>,
}

impl SessionState {
    /// "Create another profile" — drop the senior record and its cache.
    pub fn reset_profile(&mut self) {
        self.profile = None;
        self.profile_prompt = None;
    }

    /// "Describe another problem" — drop the founder record and its cache.
    pub fn reset_problem(&mut self) {
        self.problem = None;
        self.problem_prompt = None;
    }
}
