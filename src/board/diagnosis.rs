//! Diagnostic text assembly.
//!
//! An ordered table of (trigger, message) rules is evaluated against the
//! founder's answers. Matches are emitted in table order — the table is
//! the priority list, input order never matters. A sparse result (fewer
//! than two specific lines) gets one generic board summary appended so
//! the output never looks empty.

use crate::model::{FounderProblem, ImpactArea, RootCause};

/// Membership test driving one rule.
#[derive(Debug, Clone, Copy)]
enum Trigger {
    Cause(RootCause),
    Impact(ImpactArea),
}

struct Rule {
    trigger: Trigger,
    message: &'static str,
}

impl Rule {
    fn matches(&self, problem: &FounderProblem) -> bool {
        match self.trigger {
            Trigger::Cause(cause) => problem.why_exists.contains(&cause),
            Trigger::Impact(area) => problem.impact_areas.contains(&area),
        }
    }
}

/// Priority-ordered rule table. Order here is the emit order.
const RULES: &[Rule] = &[
    Rule {
        trigger: Trigger::Cause(RootCause::WeakStrategy),
        message: "🧭 Strategy Agent: The root cause seems to be an unclear strategy. You may not have a sharp definition of who you serve, with what offer, and why you are different.",
    },
    Rule {
        trigger: Trigger::Cause(RootCause::PoorExecution),
        message: "⚙️ Execution Agent: You've already tried some actions, but follow-through and consistency look weak. The problem may not be the idea, but how rigorously it's being executed.",
    },
    Rule {
        trigger: Trigger::Cause(RootCause::NotTalkingToCustomers),
        message: "🗣️ Customer Agent: You are likely missing deep, structured conversations with customers. Without this, it's hard to know whether the problem is pricing, product, or positioning.",
    },
    Rule {
        trigger: Trigger::Cause(RootCause::LowSalesExperience),
        message: "💼 Sales Agent: Sales capability appears to be a gap. You may need senior guidance on building a repeatable sales motion instead of one-off efforts.",
    },
    Rule {
        trigger: Trigger::Impact(ImpactArea::CashflowRunway),
        message: "📊 Finance Agent: Cashflow is under pressure. Any solution must protect runway while you run experiments on product or marketing.",
    },
];

/// Appended when fewer than [`FALLBACK_THRESHOLD`] specific rules fired.
pub const FALLBACK_SUMMARY: &str = "🤝 Board Summary: Based on your inputs, you're facing a mix of strategy, execution, and learning issues. A senior with hands-on experience in your stage and domain can help you avoid expensive mistakes and focus on what truly moves the needle.";

const FALLBACK_THRESHOLD: usize = 2;

/// Produce the board's diagnostic lines for `problem`.
///
/// Returns every matched rule message in table order, then the generic
/// summary if fewer than two specific lines matched. Never empty.
pub fn diagnose(problem: &FounderProblem) -> Vec<String> {
    let mut lines: Vec<String> = RULES
        .iter()
        .filter(|rule| rule.matches(problem))
        .map(|rule| rule.message.to_string())
        .collect();

    if lines.len() < FALLBACK_THRESHOLD {
        lines.push(FALLBACK_SUMMARY.to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompanyStage, FounderProblemDraft, Remedy};

    fn problem_with(causes: Vec<RootCause>, impacts: Vec<ImpactArea>) -> FounderProblem {
        let draft = FounderProblemDraft {
            founder_name: "Priya Shah".into(),
            founder_email: "priya@example.com".into(),
            company_name: "Shelfwise".into(),
            company_one_liner: "Inventory SaaS for small retailers.".into(),
            main_problem_one_line: "We don't have repeat customers.".into(),
            impact_areas: if impacts.is_empty() {
                vec![ImpactArea::Other]
            } else {
                impacts
            },
            why_exists: if causes.is_empty() {
                vec![RootCause::NotSure]
            } else {
                causes
            },
            what_tried: vec![Remedy::NothingYet],
            urgency: 5,
            company_stage: CompanyStage::Mvp,
            detailed_description: "Users sign up and churn within a month.".into(),
        };
        FounderProblem::new(&draft).unwrap()
    }

    #[test]
    fn test_single_trigger_appends_fallback() {
        let problem = problem_with(vec![RootCause::WeakStrategy], vec![]);
        let lines = diagnose(&problem);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("🧭 Strategy Agent:"));
        assert_eq!(lines[1], FALLBACK_SUMMARY);
    }

    #[test]
    fn test_two_triggers_suppress_fallback() {
        // Input order reversed on purpose — emit order is the table's.
        let problem = problem_with(
            vec![RootCause::PoorExecution, RootCause::WeakStrategy],
            vec![],
        );
        let lines = diagnose(&problem);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("🧭 Strategy Agent:"));
        assert!(lines[1].starts_with("⚙️ Execution Agent:"));
    }

    #[test]
    fn test_no_triggers_yields_only_fallback() {
        let problem = problem_with(vec![RootCause::LimitedBudget], vec![ImpactArea::Other]);
        assert_eq!(diagnose(&problem), vec![FALLBACK_SUMMARY.to_string()]);
    }

    #[test]
    fn test_all_triggers_fire_in_table_order() {
        let problem = problem_with(
            vec![
                RootCause::LowSalesExperience,
                RootCause::NotTalkingToCustomers,
                RootCause::PoorExecution,
                RootCause::WeakStrategy,
            ],
            vec![ImpactArea::CashflowRunway],
        );
        let lines = diagnose(&problem);
        assert_eq!(lines.len(), 5);
        let prefixes = ["🧭", "⚙️", "🗣️", "💼", "📊"];
        for (line, prefix) in lines.iter().zip(prefixes) {
            assert!(line.starts_with(prefix), "{line} should start with {prefix}");
        }
    }

    #[test]
    fn test_impact_trigger_counts_toward_threshold() {
        let problem = problem_with(
            vec![RootCause::WeakStrategy],
            vec![ImpactArea::CashflowRunway],
        );
        let lines = diagnose(&problem);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("📊 Finance Agent:"));
    }
}
