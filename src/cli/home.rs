// SPDX-License-Identifier: MIT
// `senior-intern home` — the landing page.
//
// Pure copy: hero card, audience question carousels, and CTA cards that
// point at the real subcommands. No state, no input.

use crate::render::{card, page_title, rule, subtitle, BOLD, DIM, GOLD, RESET};

const SENIOR_LINES: &[&str] = &[
    "Your career may have retired. Has your talent?",
    "What if your 30 years of judgment could shape a startup in 30 minutes?",
    "Looking for purpose, some income, and to feel truly needed again?",
];

const FOUNDER_LINES: &[&str] = &[
    "What if your toughest challenge was read like a board-meeting agenda?",
    "Why spend 3 months hiring when you can borrow judgment in 3 seconds?",
    "Are you moving fast – or fast in the wrong direction?",
];

pub fn run() {
    page_title("Senior Intern — Where Experience Meets Speed.");
    subtitle(
        "Life expectancy is rising, but careers still end too early. Senior Intern \
         connects experienced professionals who still want to contribute with founders \
         who can't afford full-time executives – through an AI-powered Virtual Senior \
         Advisory Board.",
    );

    println!("  {BOLD}STARTUPS{RESET}  ──  {GOLD}AI-POWERED BRIDGE{RESET}  ──  {BOLD}SENIOR PROFESSIONALS{RESET}");
    println!();
    println!("  {DIM}• 150M+ people 55+ by 2030{RESET}");
    println!("  {DIM}• 40% of Japan's workforce already 55+{RESET}");
    println!("  {DIM}• A new category: Senior Interns{RESET}");
    println!();

    println!("{BOLD}💭 Brain-tickling questions{RESET}");
    rule();
    println!("{BOLD}For Senior Professionals{RESET}");
    for line in SENIOR_LINES {
        println!("  • {line}");
    }
    println!();
    println!("{BOLD}For Startup Founders{RESET}");
    for line in FOUNDER_LINES {
        println!("  • {line}");
    }

    card(
        "🧓 I am a Senior Professional",
        &[
            "Create your Senior Intern profile so our AI can understand your",
            "strengths, interests, and availability – and make you discoverable",
            "to the right startups.",
            "",
            "  senior-intern senior",
        ],
    );

    card(
        "🚀 I am a Startup Founder",
        &[
            "Describe your biggest challenge and see how our Virtual Senior",
            "Advisory Board would analyse it – and which Senior Interns might",
            "be your best partners.",
            "",
            "  senior-intern founder",
        ],
    );

    println!();
    println!(
        "{DIM}Prototype note: in the full product these CTAs route directly into the \
         Senior and Startup experiences. For the prototype, the flows run as separate \
         subcommands ('senior' and 'founder').{RESET}"
    );
    println!();
}
