// SPDX-License-Identifier: MIT
// `senior-intern senior` — create a Senior Intern profile.
//
// Form → validation gate → record constructor → thank-you screen with an
// optional developer view. On rejection the form loops with every answer
// preserved as its prompt default.

use anyhow::Result;
use tracing::info;

use crate::intake;
use crate::model::{Domain, ProblemType, SeniorProfile, SeniorProfileDraft, StartupStage};
use crate::prompt;
use crate::render;
use crate::AppContext;

pub fn run(ctx: &mut AppContext) -> Result<()> {
    loop {
        render::page_title("Senior Intern – Create Your Senior Profile");
        render::subtitle(
            "Share a few details so founders and our AI can understand your experience \
             and match you with the right startup problems. Fields marked with * are required.",
        );

        let profile = collect_profile()?;
        info!(id = %profile.id, "senior profile created");

        let payload = prompt::profile_prompt(&profile);
        ctx.state.profile = Some(profile);
        ctx.state.profile_prompt = Some(payload);

        render::card(
            "Thank you for submitting your profile! 🌱",
            &[
                "You're now part of our Senior Intern community.",
                "Very soon, founders will be matched with your experience and judgment.",
                "",
                "In the next step of our build, this page will also let you explore",
                "startup problems that fit your interests.",
            ],
        );

        if let (Some(profile), Some(payload)) = (&ctx.state.profile, &ctx.state.profile_prompt) {
            render::profile_summary(profile);
            if intake::confirm("🔍 Open Developer View (for judges)?")? {
                render::debug_panel(
                    "Traceable Senior Profile",
                    profile,
                    payload,
                    "This internal view shows how the profile will be processed by Gemini \
                     and turned into an embedding for storage in Qdrant.",
                );
            }
        }

        if !intake::confirm("⬅️ Create another profile?")? {
            return Ok(());
        }
        ctx.state.reset_profile();
    }
}

/// Run the form until the gate accepts, then construct the record.
fn collect_profile() -> Result<SeniorProfile> {
    let mut draft = SeniorProfileDraft::default();
    loop {
        fill_draft(&mut draft)?;
        match SeniorProfile::new(&draft) {
            Ok(profile) => return Ok(profile),
            Err(e) => {
                // Single message by design; answers stay in the draft.
                render::error_line(&e.to_string());
                println!();
            }
        }
    }
}

fn fill_draft(draft: &mut SeniorProfileDraft) -> Result<()> {
    draft.name = intake::text("Full Name *", &draft.name)?;
    draft.email = intake::text("Email *", &draft.email)?;
    draft.linkedin_url = intake::text("LinkedIn Profile URL *", &draft.linkedin_url)?;
    draft.headline = intake::text_area(
        "One-line headline about you *",
        Some("Ex: Ex-COO, 25+ yrs in Telecom & Operations"),
        &draft.headline,
    )?;
    draft.skills_text = intake::text_area(
        "Key Skills (comma-separated) *",
        Some("Strategy, Operations, Product, Go-To-Market, Fundraising"),
        &draft.skills_text,
    )?;
    draft.intro = intake::text_area(
        "Short Introduction (2–4 lines) *",
        Some(
            "Share the kind of value you bring, your style of working, and what \
             excites you about working with startups.",
        ),
        &draft.intro,
    )?;

    let picks = intake::multi_select(
        "What kind of industries / domains do you want to work with? *",
        Domain::ALL,
        &intake::indices_of(Domain::ALL, &draft.preferred_domains),
    )?;
    draft.preferred_domains = intake::picked(Domain::ALL, &picks);

    let stage_idx = intake::select(
        "Preferred startup stage *",
        StartupStage::ALL,
        StartupStage::ALL
            .iter()
            .position(|s| *s == draft.preferred_startup_stage)
            .unwrap_or(0),
    )?;
    draft.preferred_startup_stage = StartupStage::ALL[stage_idx];

    let picks = intake::multi_select(
        "What kind of problems do you enjoy solving most? *",
        ProblemType::ALL,
        &intake::indices_of(ProblemType::ALL, &draft.preferred_problem_types),
    )?;
    draft.preferred_problem_types = intake::picked(ProblemType::ALL, &picks);

    draft.availability_days_per_week = intake::scale(
        "How many days per week are you willing to contribute? *",
        1,
        7,
        draft.availability_days_per_week,
    )?;
    draft.availability_hours_per_day = intake::scale(
        "How many hours per day (on the days you work)? *",
        1,
        8,
        draft.availability_hours_per_day,
    )?;

    Ok(())
}
