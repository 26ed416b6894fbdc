// SPDX-License-Identifier: MIT
// `senior-intern demo` — the earliest combined prototype, kept as-is.
//
// One in-memory router over four screens (home, senior, founder, match)
// with its own dummy senior list and a static diagnosis paragraph. It
// predates the dedicated flows and deliberately shares no code with
// them — no validation gate, no record construction, no rule table.

use anyhow::Result;

use crate::intake;
use crate::render::{card, page_title, rule, subtitle, BOLD, RESET};

/// Router state — the demo's whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Senior,
    Founder,
    Match,
}

struct DummySenior {
    name: &'static str,
    title: &'static str,
    experience: &'static str,
    skills: &'static str,
    match_reason: &'static str,
}

const SENIORS: &[DummySenior] = &[
    DummySenior {
        name: "Arjun Mehta",
        title: "Chief Technology Officer",
        experience: "20+ years",
        skills: "AI, Cloud, Distributed Systems",
        match_reason: "Your problem requires deep tech leadership to redesign your funnel and tech stack.",
    },
    DummySenior {
        name: "Sarah Ali",
        title: "Digital Marketing Lead",
        experience: "15+ years",
        skills: "SEO, Paid Ads, Funnel Optimization",
        match_reason: "You mentioned leads but low conversions—this is a classic funnel optimization issue.",
    },
    DummySenior {
        name: "James Thompson",
        title: "Sales Coach",
        experience: "18+ years",
        skills: "B2B Sales, Pitch Strategy, Conversion Psychology",
        match_reason: "When leads aren't converting, founders usually need stronger sales scripts and process.",
    },
];

const CLARIFY_OPTIONS: &[&str] = &[
    "Marketing funnel",
    "Sales conversion",
    "Product failure",
    "Team experience gap",
    "Strategy / Clarity",
];

pub fn run() -> Result<()> {
    let mut page = Page::Home;
    loop {
        page = match page {
            Page::Home => match home()? {
                Some(next) => next,
                None => return Ok(()),
            },
            Page::Senior => senior_profile()?,
            Page::Founder => founder_flow()?,
            Page::Match => match_screen()?,
        };
    }
}

/// Returns `None` when the user quits the demo.
fn home() -> Result<Option<Page>> {
    page_title("Senior Intern");
    subtitle(
        "The world's first platform connecting startups with part-time senior \
         professionals + an AI-powered Virtual Advisory Board.",
    );

    let choice = intake::select(
        "Where to?",
        &[
            "✨ I am a Senior Professional — create a profile",
            "🚀 I am a Startup Founder — submit a challenge",
            "Quit the demo",
        ],
        2,
    )?;
    Ok(match choice {
        0 => Some(Page::Senior),
        1 => Some(Page::Founder),
        _ => None,
    })
}

fn senior_profile() -> Result<Page> {
    page_title("Senior Profile");

    let _name = intake::text("Full Name", "")?;
    let _linkedin = intake::text("LinkedIn URL", "")?;
    let _skills = intake::text("Key Skills (comma separated)", "")?;
    let _intro = intake::text("Short Intro", "")?;
    let _availability = intake::select(
        "Availability per week",
        &["5 hours", "10 hours", "15 hours", "20+ hours"],
        0,
    )?;

    println!();
    crate::render::success("Your profile has been created and is now discoverable by startups. 🎈");
    println!();
    Ok(Page::Home)
}

fn founder_flow() -> Result<Page> {
    page_title("Startup Challenge");

    let _name = intake::text("Startup Name", "")?;
    let problem = intake::text("Describe your biggest current challenge", "")?;
    if !problem.is_empty() {
        let _clarify = intake::select("What does this relate to most?", CLARIFY_OPTIONS, 0)?;
    }

    Ok(Page::Match)
}

fn match_screen() -> Result<Page> {
    page_title("AI Advisory Board Recommendation");

    card(
        "Diagnosis",
        &[
            "Based on your inputs, your challenge seems related to conversion &",
            "experience gaps. Below are the best Senior Interns matched for you.",
        ],
    );

    println!();
    println!("{BOLD}Top Matches{RESET}");
    rule();
    for s in SENIORS {
        println!();
        println!("  {BOLD}{} — {}{RESET}", s.name, s.title);
        println!("  Experience: {}", s.experience);
        println!("  Skills: {}", s.skills);
        println!("  Why matched: {}", s.match_reason);
    }
    println!();
    let _ = intake::confirm("⬅️ Back to Home?")?;
    Ok(Page::Home)
}
