// SPDX-License-Identifier: MIT
// `senior-intern founder` — describe a startup problem.
//
// Form → validation gate → record constructor → rule-based advisory board
// → rendered analysis with an optional developer view. The board pass is
// instant; the spinner is the magic-moment affordance, nothing more.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::board;
use crate::intake;
use crate::model::{
    CompanyStage, FounderProblem, FounderProblemDraft, ImpactArea, Remedy, RootCause,
};
use crate::prompt;
use crate::render;
use crate::AppContext;

pub fn run(ctx: &mut AppContext) -> Result<()> {
    loop {
        render::page_title("Describe Your Startup Problem");
        render::subtitle(
            "Answer a few questions so our Virtual Senior Advisory Board can analyse \
             your situation and match you with the right senior expert. Fields marked \
             with * are required.",
        );

        let problem = collect_problem()?;
        info!(id = %problem.id, urgency = problem.urgency, "founder problem created");

        let payload = prompt::problem_prompt(&problem);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Convening the Virtual Senior Advisory Board…");
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));

        let diagnosis = board::diagnose(&problem);
        let advisors = board::match_advisors(&problem);

        spinner.finish_and_clear();

        render::card(
            "Thank you for sharing your challenge. 🚀",
            &[
                "You've just done what most founders skip – clearly defining the real",
                "problem.",
                "",
                "Below is how our Virtual Senior Advisory Board would read your",
                "situation and which Senior Interns could be the best fit to help you.",
            ],
        );

        render::problem_analysis(&problem, &diagnosis, &advisors);

        ctx.state.problem = Some(problem);
        ctx.state.problem_prompt = Some(payload);

        if let (Some(problem), Some(payload)) = (&ctx.state.problem, &ctx.state.problem_prompt) {
            if intake::confirm("🔍 Open Developer View: Structured Problem (for judges)?")? {
                render::debug_panel(
                    "Structured Problem",
                    problem,
                    payload,
                    "For the hackathon demo, the analysis above is mock logic. In production, \
                     this will be replaced with Gemini + Qdrant powered reasoning and matching.",
                );
            }
        }

        if !intake::confirm("⬅️ Describe another problem?")? {
            return Ok(());
        }
        ctx.state.reset_problem();
    }
}

/// Run the form until the gate accepts, then construct the record.
fn collect_problem() -> Result<FounderProblem> {
    let mut draft = FounderProblemDraft::default();
    loop {
        fill_draft(&mut draft)?;
        match FounderProblem::new(&draft) {
            Ok(problem) => return Ok(problem),
            Err(e) => {
                render::error_line(&e.to_string());
                println!();
            }
        }
    }
}

fn fill_draft(draft: &mut FounderProblemDraft) -> Result<()> {
    draft.founder_name = intake::text("Your name *", &draft.founder_name)?;
    draft.founder_email = intake::text("Email *", &draft.founder_email)?;
    draft.company_name =
        intake::text("Startup / Company name (optional)", &draft.company_name)?;
    draft.company_one_liner = intake::text_area(
        "Describe your business in one line *",
        Some("Ex: We are a SaaS platform helping small retailers manage inventory."),
        &draft.company_one_liner,
    )?;
    draft.main_problem_one_line = intake::text_area(
        "In one sentence, what is the main problem you're facing? *",
        Some("Ex: We don't have repeat customers."),
        &draft.main_problem_one_line,
    )?;

    let picks = intake::multi_select(
        "Where is this problem hurting you the most? *",
        ImpactArea::ALL,
        &intake::indices_of(ImpactArea::ALL, &draft.impact_areas),
    )?;
    draft.impact_areas = intake::picked(ImpactArea::ALL, &picks);

    let picks = intake::multi_select(
        "Why do you think this problem exists? (be honest) *",
        RootCause::ALL,
        &intake::indices_of(RootCause::ALL, &draft.why_exists),
    )?;
    draft.why_exists = intake::picked(RootCause::ALL, &picks);

    let picks = intake::multi_select(
        "What have you already tried so far? *",
        Remedy::ALL,
        &intake::indices_of(Remedy::ALL, &draft.what_tried),
    )?;
    draft.what_tried = intake::picked(Remedy::ALL, &picks);

    draft.urgency = intake::scale(
        "How urgent is this problem? (1 = low, 10 = critical) *",
        1,
        10,
        draft.urgency,
    )?;

    let stage_idx = intake::select(
        "What stage is your startup at? *",
        CompanyStage::ALL,
        CompanyStage::ALL
            .iter()
            .position(|s| *s == draft.company_stage)
            .unwrap_or(0),
    )?;
    draft.company_stage = CompanyStage::ALL[stage_idx];

    draft.detailed_description = intake::text_area(
        "In 3–5 lines, describe the situation in more detail. *",
        Some(
            "Ex: We acquired 500 users in 6 months but very few come back. We aren't \
             sure if it's pricing, product, or positioning...",
        ),
        &draft.detailed_description,
    )?;

    Ok(())
}
