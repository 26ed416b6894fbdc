//! Senior-profile record: draft, validation gate, and constructor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Domain, ProblemType, StartupStage};
use super::{filled, ValidationError};

/// Raw form answers for the senior-profile flow.
///
/// Skills arrive as one comma-separated text area; the split happens at
/// construction, never in the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct SeniorProfileDraft {
    pub name: String,
    pub email: String,
    pub linkedin_url: String,
    pub headline: String,
    pub skills_text: String,
    pub intro: String,
    pub preferred_domains: Vec<Domain>,
    pub preferred_startup_stage: StartupStage,
    pub preferred_problem_types: Vec<ProblemType>,
    /// Days per week the senior will contribute (1–7).
    pub availability_days_per_week: u8,
    /// Hours per day on working days (1–8).
    pub availability_hours_per_day: u8,
}

impl Default for SeniorProfileDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            linkedin_url: String::new(),
            headline: String::new(),
            skills_text: String::new(),
            intro: String::new(),
            preferred_domains: Vec::new(),
            preferred_startup_stage: StartupStage::IdeaStage,
            preferred_problem_types: Vec::new(),
            availability_days_per_week: 2,
            availability_hours_per_day: 3,
        }
    }
}

impl SeniorProfileDraft {
    /// The validation gate.
    ///
    /// Required: name, email, LinkedIn URL, skills text, intro, preferred
    /// domains, preferred problem types. The headline is labelled required
    /// in the form copy but is not part of the gate, and the stage and
    /// availability answers always hold a value — both quirks preserved
    /// from the shipped form.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let ok = filled(&self.name)
            && filled(&self.email)
            && filled(&self.linkedin_url)
            && filled(&self.skills_text)
            && filled(&self.intro)
            && !self.preferred_domains.is_empty()
            && !self.preferred_problem_types.is_empty();
        if ok {
            Ok(())
        } else {
            Err(ValidationError::MissingRequired)
        }
    }
}

/// An immutable senior profile. Exists only for the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeniorProfile {
    /// Unique identifier, assigned at construction, never reassigned.
    pub id: String,
    pub name: String,
    pub email: String,
    pub linkedin_url: String,
    pub headline: String,
    /// Derived from the draft's comma-separated skills text.
    pub skills: Vec<String>,
    pub intro: String,
    pub preferred_domains: Vec<Domain>,
    pub preferred_startup_stage: StartupStage,
    pub preferred_problem_types: Vec<ProblemType>,
    pub availability_days_per_week: u8,
    pub availability_hours_per_day: u8,
    pub created_at: DateTime<Utc>,
}

impl SeniorProfile {
    /// Validate `draft` and construct the record.
    ///
    /// Construction itself never fails: once the gate accepts, every step
    /// is total. List fields are comma-split, trimmed, and stripped of
    /// empty entries; everything else is copied verbatim.
    pub fn new(draft: &SeniorProfileDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            linkedin_url: draft.linkedin_url.clone(),
            headline: draft.headline.clone(),
            skills: split_tags(&draft.skills_text),
            intro: draft.intro.clone(),
            preferred_domains: draft.preferred_domains.clone(),
            preferred_startup_stage: draft.preferred_startup_stage,
            preferred_problem_types: draft.preferred_problem_types.clone(),
            availability_days_per_week: draft.availability_days_per_week,
            availability_hours_per_day: draft.availability_hours_per_day,
            created_at: Utc::now(),
        })
    }
}

/// Split a comma-delimited free-text field into trimmed, non-empty tags.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> SeniorProfileDraft {
        SeniorProfileDraft {
            name: "Anita Rao".into(),
            email: "anita@example.com".into(),
            linkedin_url: "https://linkedin.com/in/anita-rao".into(),
            headline: "Ex-COO, 25+ yrs in Retail & Operations".into(),
            skills_text: "Strategy, Operations, Go-To-Market".into(),
            intro: "I help founders turn chaos into process.".into(),
            preferred_domains: vec![Domain::Retail, Domain::Ecommerce],
            preferred_startup_stage: StartupStage::EarlyRevenue,
            preferred_problem_types: vec![ProblemType::OperationsExecution],
            availability_days_per_week: 2,
            availability_hours_per_day: 3,
        }
    }

    #[test]
    fn test_split_tags() {
        assert_eq!(
            split_tags("Strategy, Operations ,  Product,, "),
            vec!["Strategy", "Operations", "Product"]
        );
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ,").is_empty());
    }

    #[test]
    fn test_gate_accepts_valid_draft() {
        assert!(valid_draft().validate().is_ok());
    }

    #[test]
    fn test_gate_rejects_whitespace_only_text() {
        let mut draft = valid_draft();
        draft.intro = "   ".into();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn test_gate_rejects_empty_multiselect() {
        let mut draft = valid_draft();
        draft.preferred_domains.clear();
        assert_eq!(draft.validate(), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn test_gate_ignores_missing_headline() {
        // The shipped form never checked the headline — preserved.
        let mut draft = valid_draft();
        draft.headline.clear();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut draft = valid_draft();
        draft.email.clear();
        let first = draft.validate();
        for _ in 0..10 {
            assert_eq!(draft.validate(), first);
        }
        assert!(SeniorProfile::new(&draft).is_err());
    }

    #[test]
    fn test_construction_splits_skills() {
        let profile = SeniorProfile::new(&valid_draft()).unwrap();
        assert_eq!(profile.skills, vec!["Strategy", "Operations", "Go-To-Market"]);
    }

    #[test]
    fn test_identifiers_are_unique() {
        let draft = valid_draft();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let profile = SeniorProfile::new(&draft).unwrap();
            assert!(seen.insert(profile.id.clone()), "duplicate id {}", profile.id);
        }
    }

    #[test]
    fn test_debug_view_round_trip() {
        let profile = SeniorProfile::new(&valid_draft()).unwrap();
        let json = serde_json::to_string_pretty(&profile).unwrap();
        let back: SeniorProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
