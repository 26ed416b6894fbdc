//! Plain-text payload templates for future generative-AI delegation.
//!
//! Neither payload is ever sent anywhere in this prototype — they appear
//! in the developer view only. The field labels, field order, and the
//! `", "` list delimiter are contractual: a future integration must be
//! able to reconstruct these strings byte-for-byte.

use crate::model::{join_labels, FounderProblem, SeniorProfile};

/// Render the text a production build would send about a senior profile.
pub fn profile_prompt(profile: &SeniorProfile) -> String {
    format!(
        "Senior profile:\n\
         Name: {name}\n\
         Headline: {headline}\n\
         \n\
         Skills: {skills}\n\
         Preferred domains: {domains}\n\
         Preferred startup stage: {stage}\n\
         Enjoys solving: {problem_types}\n\
         \n\
         Availability: {days} days/week,\n\
         {hours} hours/day.\n\
         \n\
         Intro:\n\
         {intro}\n\
         \n\
         LinkedIn: {linkedin}",
        name = profile.name,
        headline = profile.headline,
        skills = profile.skills.join(", "),
        domains = join_labels(&profile.preferred_domains),
        stage = profile.preferred_startup_stage,
        problem_types = join_labels(&profile.preferred_problem_types),
        days = profile.availability_days_per_week,
        hours = profile.availability_hours_per_day,
        intro = profile.intro,
        linkedin = profile.linkedin_url,
    )
}

/// Render the text a production build would send about a founder problem.
pub fn problem_prompt(problem: &FounderProblem) -> String {
    format!(
        "Startup problem:\n\
         \n\
         Founder: {name} ({email})\n\
         Company: {company}\n\
         One-liner: {one_liner}\n\
         \n\
         Main problem (one line):\n\
         {main_problem}\n\
         \n\
         Impact areas: {impacts}\n\
         \n\
         Why the founder thinks this problem exists:\n\
         {causes}\n\
         \n\
         What they have tried so far:\n\
         {remedies}\n\
         \n\
         Urgency (1-10): {urgency}\n\
         Company stage: {stage}\n\
         \n\
         Detailed description:\n\
         {description}",
        name = problem.founder_name,
        email = problem.founder_email,
        company = problem.company_name,
        one_liner = problem.company_one_liner,
        main_problem = problem.main_problem_one_line,
        impacts = join_labels(&problem.impact_areas),
        causes = join_labels(&problem.why_exists),
        remedies = join_labels(&problem.what_tried),
        urgency = problem.urgency,
        stage = problem.company_stage,
        description = problem.detailed_description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        CompanyStage, Domain, FounderProblemDraft, ImpactArea, ProblemType, Remedy, RootCause,
        SeniorProfileDraft, StartupStage,
    };

    #[test]
    fn test_profile_prompt_field_order_and_delimiters() {
        let draft = SeniorProfileDraft {
            name: "Anita Rao".into(),
            email: "anita@example.com".into(),
            linkedin_url: "https://linkedin.com/in/anita-rao".into(),
            headline: "Ex-COO".into(),
            skills_text: "Strategy, Operations".into(),
            intro: "Hands-on operator.".into(),
            preferred_domains: vec![Domain::Retail, Domain::Telecom],
            preferred_startup_stage: StartupStage::Any,
            preferred_problem_types: vec![ProblemType::OperationsExecution],
            availability_days_per_week: 2,
            availability_hours_per_day: 3,
        };
        let profile = SeniorProfile::new(&draft).unwrap();
        let text = profile_prompt(&profile);

        assert!(text.starts_with("Senior profile:\nName: Anita Rao\n"));
        assert!(text.contains("Skills: Strategy, Operations\n"));
        assert!(text.contains("Preferred domains: Retail, Telecom\n"));
        assert!(text.contains("Preferred startup stage: Any\n"));
        assert!(text.contains("Availability: 2 days/week,\n3 hours/day.\n"));
        assert!(text.ends_with("LinkedIn: https://linkedin.com/in/anita-rao"));
        // Labels appear in the contractual order.
        let positions: Vec<usize> = ["Name:", "Headline:", "Skills:", "Preferred domains:",
            "Preferred startup stage:", "Enjoys solving:", "Availability:", "Intro:", "LinkedIn:"]
            .iter()
            .map(|label| text.find(label).unwrap_or_else(|| panic!("missing {label}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_problem_prompt_field_order_and_delimiters() {
        let draft = FounderProblemDraft {
            founder_name: "Priya Shah".into(),
            founder_email: "priya@example.com".into(),
            company_name: "Shelfwise".into(),
            company_one_liner: "Inventory SaaS.".into(),
            main_problem_one_line: "No repeat customers.".into(),
            impact_areas: vec![ImpactArea::RevenueSales, ImpactArea::CashflowRunway],
            why_exists: vec![RootCause::WeakStrategy],
            what_tried: vec![Remedy::PaidAds, Remedy::Discounts],
            urgency: 8,
            company_stage: CompanyStage::EarlyRevenue,
            detailed_description: "Churn dominates growth.".into(),
        };
        let problem = FounderProblem::new(&draft).unwrap();
        let text = problem_prompt(&problem);

        assert!(text.starts_with("Startup problem:\n\nFounder: Priya Shah (priya@example.com)\n"));
        assert!(text.contains("Impact areas: Revenue / Sales, Cashflow / Runway\n"));
        assert!(text.contains("What they have tried so far:\nPaid ads / performance marketing, Discounts / offers\n"));
        assert!(text.contains("Urgency (1-10): 8\n"));
        assert!(text.contains("Company stage: Early revenue\n"));
        assert!(text.ends_with("Detailed description:\nChurn dominates growth."));
    }
}
