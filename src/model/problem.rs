//! Founder-problem record: draft, validation gate, and constructor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{CompanyStage, ImpactArea, Remedy, RootCause};
use super::{filled, ValidationError};

/// Raw form answers for the founder flow.
#[derive(Debug, Clone, PartialEq)]
pub struct FounderProblemDraft {
    pub founder_name: String,
    pub founder_email: String,
    /// Optional — the only non-required text field on the form.
    pub company_name: String,
    pub company_one_liner: String,
    pub main_problem_one_line: String,
    pub impact_areas: Vec<ImpactArea>,
    pub why_exists: Vec<RootCause>,
    pub what_tried: Vec<Remedy>,
    /// 1 = low, 10 = critical.
    pub urgency: u8,
    pub company_stage: CompanyStage,
    pub detailed_description: String,
}

impl Default for FounderProblemDraft {
    fn default() -> Self {
        Self {
            founder_name: String::new(),
            founder_email: String::new(),
            company_name: String::new(),
            company_one_liner: String::new(),
            main_problem_one_line: String::new(),
            impact_areas: Vec::new(),
            why_exists: Vec::new(),
            what_tried: Vec::new(),
            urgency: 7,
            company_stage: CompanyStage::Idea,
            detailed_description: String::new(),
        }
    }
}

impl FounderProblemDraft {
    /// The validation gate. Company name is optional; urgency and stage
    /// always hold a value, so neither is checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ok = filled(&self.founder_name)
            && filled(&self.founder_email)
            && filled(&self.company_one_liner)
            && filled(&self.main_problem_one_line)
            && !self.impact_areas.is_empty()
            && !self.why_exists.is_empty()
            && !self.what_tried.is_empty()
            && filled(&self.detailed_description);
        if ok {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired)
        }
    }
}

/// An immutable founder problem. Exists only for the current session and
/// is never linked to any senior profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FounderProblem {
    /// Unique identifier, assigned at construction, never reassigned.
    pub id: String,
    pub founder_name: String,
    pub founder_email: String,
    /// May be empty — the form marks it optional.
    pub company_name: String,
    pub company_one_liner: String,
    pub main_problem_one_line: String,
    pub impact_areas: Vec<ImpactArea>,
    pub why_exists: Vec<RootCause>,
    pub what_tried: Vec<Remedy>,
    pub urgency: u8,
    pub company_stage: CompanyStage,
    pub detailed_description: String,
    pub created_at: DateTime<Utc>,
}

impl FounderProblem {
    /// Validate `draft` and construct the record. Total once the gate
    /// accepts; every field is copied verbatim.
    pub fn new(draft: &FounderProblemDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            founder_name: draft.founder_name.clone(),
            founder_email: draft.founder_email.clone(),
            company_name: draft.company_name.clone(),
            company_one_liner: draft.company_one_liner.clone(),
            main_problem_one_line: draft.main_problem_one_line.clone(),
            impact_areas: draft.impact_areas.clone(),
            why_exists: draft.why_exists.clone(),
            what_tried: draft.what_tried.clone(),
            urgency: draft.urgency,
            company_stage: draft.company_stage,
            detailed_description: draft.detailed_description.clone(),
            created_at: Utc::now(),
        })
    }
}
