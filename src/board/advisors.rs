//! Candidate advisor shortlist.
//!
//! The catalog is a fixed mock database of three seniors. Matching is a
//! pass over the catalog that appends bonus rationale sentences keyed off
//! the founder's impact areas — to every entry uniformly, regardless of
//! the entry's own strength tags. That uniformity mirrors the shipped
//! behavior exactly; a per-tag matching step was probably intended and is
//! flagged in DESIGN.md rather than invented here.

use crate::model::{FounderProblem, ImpactArea};

/// A catalog entry: one senior the board can recommend.
#[derive(Debug, Clone, Copy)]
pub struct Advisor {
    pub name: &'static str,
    pub headline: &'static str,
    pub strengths: &'static [&'static str],
    pub fit_reason: &'static str,
}

/// The mock senior database, in presentation order.
pub const CATALOG: &[Advisor] = &[
    Advisor {
        name: "Anita Rao",
        headline: "Ex-COO, 25+ yrs in Retail & Operations",
        strengths: &["Operations & Execution", "Turnaround / Crisis", "People & Culture"],
        fit_reason: "She has led multiple retail turnarounds where repeat customers and store-level execution were the main issues.",
    },
    Advisor {
        name: "Vikram Mehta",
        headline: "Ex-CPO, B2B SaaS & Product Strategy",
        strengths: &["Product & UX", "Strategy & Direction", "Growth / New customers"],
        fit_reason: "He's scaled SaaS products from MVP to thousands of paying customers and knows how to fix retention and positioning problems.",
    },
    Advisor {
        name: "Sara Al Mansoori",
        headline: "Ex-CFO, 20+ yrs in Finance & Unit Economics",
        strengths: &["Finance & Unit Economics", "Cashflow / Runway"],
        fit_reason: "She is ideal when pricing, margins, or runway are the hidden reason behind a growth or retention issue.",
    },
];

/// Never return more than this many matches, whatever the catalog grows to.
pub const MAX_MATCHES: usize = 3;

const REVENUE_NOTE: &str = " Given that revenue and GTM are central for you, their experience will shortcut a lot of trial-and-error.";
const SATISFACTION_NOTE: &str = " They have seen similar churn or satisfaction issues and know how to improve experience step by step.";

/// A catalog entry annotated for one specific founder problem.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorMatch {
    pub name: String,
    pub headline: String,
    pub strengths: Vec<String>,
    pub fit_reason: String,
}

/// Shortlist advisors for `problem` from the standard catalog.
pub fn match_advisors(problem: &FounderProblem) -> Vec<AdvisorMatch> {
    shortlist(CATALOG, problem)
}

/// Catalog-parameterised matching; the cap applies after annotation.
fn shortlist(catalog: &[Advisor], problem: &FounderProblem) -> Vec<AdvisorMatch> {
    catalog
        .iter()
        .take(MAX_MATCHES)
        .map(|advisor| {
            let mut fit_reason = advisor.fit_reason.to_string();
            // Additive, not mutually exclusive, and always in this order.
            if problem.impact_areas.contains(&ImpactArea::RevenueSales) {
                fit_reason.push_str(REVENUE_NOTE);
            }
            if problem.impact_areas.contains(&ImpactArea::CustomerSatisfaction) {
                fit_reason.push_str(SATISFACTION_NOTE);
            }
            AdvisorMatch {
                name: advisor.name.to_string(),
                headline: advisor.headline.to_string(),
                strengths: advisor.strengths.iter().map(|s| s.to_string()).collect(),
                fit_reason,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompanyStage, FounderProblemDraft, Remedy, RootCause};

    fn problem_with_impacts(impacts: Vec<ImpactArea>) -> FounderProblem {
        let draft = FounderProblemDraft {
            founder_name: "Priya Shah".into(),
            founder_email: "priya@example.com".into(),
            company_name: String::new(),
            company_one_liner: "Inventory SaaS for small retailers.".into(),
            main_problem_one_line: "We don't have repeat customers.".into(),
            impact_areas: impacts,
            why_exists: vec![RootCause::NotSure],
            what_tried: vec![Remedy::TalkingToCustomers],
            urgency: 6,
            company_stage: CompanyStage::EarlyRevenue,
            detailed_description: "Churn after the first month is above 80%.".into(),
        };
        FounderProblem::new(&draft).unwrap()
    }

    #[test]
    fn test_no_bonus_sentences_without_triggering_impacts() {
        let matches = match_advisors(&problem_with_impacts(vec![ImpactArea::Other]));
        assert_eq!(matches.len(), 3);
        for (m, advisor) in matches.iter().zip(CATALOG) {
            assert_eq!(m.fit_reason, advisor.fit_reason);
        }
    }

    #[test]
    fn test_both_bonus_sentences_extend_every_entry_in_order() {
        let matches = match_advisors(&problem_with_impacts(vec![
            ImpactArea::CustomerSatisfaction,
            ImpactArea::RevenueSales,
        ]));
        assert_eq!(matches.len(), 3);
        for m in &matches {
            // Revenue sentence always precedes the satisfaction sentence,
            // whatever order the founder selected.
            let expected = format!("{}{}", REVENUE_NOTE, SATISFACTION_NOTE);
            assert!(m.fit_reason.ends_with(&expected), "bad tail: {}", m.fit_reason);
        }
    }

    #[test]
    fn test_bonus_applies_uniformly_regardless_of_strengths() {
        // Sara's tags say finance, not sales — she still gets the revenue
        // sentence. Preserved quirk.
        let matches = match_advisors(&problem_with_impacts(vec![ImpactArea::RevenueSales]));
        assert!(matches[2].fit_reason.ends_with(REVENUE_NOTE));
    }

    #[test]
    fn test_cap_preserves_first_three_catalog_entries() {
        let extended: Vec<Advisor> = CATALOG
            .iter()
            .chain(CATALOG.iter())
            .copied()
            .collect();
        let matches = shortlist(&extended, &problem_with_impacts(vec![ImpactArea::Other]));
        assert_eq!(matches.len(), MAX_MATCHES);
        for (m, advisor) in matches.iter().zip(CATALOG) {
            assert_eq!(m.name, advisor.name);
        }
    }
}
