//! Rendering layer — pure terminal presentation.
//!
//! Cards and section rules in place of the original page styling. Total
//! over valid input: every function here just formats and prints, no
//! error conditions exist.

use crate::board::AdvisorMatch;
use crate::model::{join_labels, FounderProblem, SeniorProfile};

pub const GOLD: &str = "\x1b[33m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const CYAN: &str = "\x1b[36m";
pub const DIM: &str = "\x1b[2m";
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

const RULE_WIDTH: usize = 62;

/// Horizontal section rule.
pub fn rule() {
    println!("{}", "─".repeat(RULE_WIDTH));
}

/// Bold page title with a rule underneath.
pub fn page_title(text: &str) {
    println!();
    println!("{BOLD}{GOLD}{text}{RESET}");
    rule();
}

/// Dimmed one-line subtitle under a page title.
pub fn subtitle(text: &str) {
    println!("{DIM}{text}{RESET}");
    println!();
}

/// A boxed card: bold title line, body lines, rules above and below.
pub fn card(title: &str, body: &[&str]) {
    println!();
    rule();
    println!("  {BOLD}{title}{RESET}");
    for line in body {
        println!("  {line}");
    }
    rule();
}

/// Aligned `key: value` detail line.
pub fn kv(key: &str, value: &str) {
    println!("  {BOLD}{key:<22}{RESET}{value}");
}

// ─── Record views ─────────────────────────────────────────────────────────────

/// Summary of a constructed senior profile.
pub fn profile_summary(profile: &SeniorProfile) {
    println!();
    println!("{BOLD}Your Senior Intern profile{RESET}");
    rule();
    kv("Name", &profile.name);
    kv("Headline", &profile.headline);
    kv("Skills", &profile.skills.join(", "));
    kv("Domains", &join_labels(&profile.preferred_domains));
    kv("Preferred stage", &profile.preferred_startup_stage.to_string());
    kv("Enjoys solving", &join_labels(&profile.preferred_problem_types));
    kv(
        "Availability",
        &format!(
            "{} days/week, {} hours/day",
            profile.availability_days_per_week, profile.availability_hours_per_day
        ),
    );
    rule();
}

/// The founder flow's analysis screen: diagnosis lines then the shortlist.
pub fn problem_analysis(
    problem: &FounderProblem,
    diagnosis: &[String],
    advisors: &[AdvisorMatch],
) {
    println!();
    println!("{BOLD}🧠 Virtual Senior Advisory Board – Mock Analysis{RESET}");
    rule();
    println!("Main problem identified: {}", problem.main_problem_one_line);
    println!();
    for line in diagnosis {
        println!("{line}");
        println!();
    }

    println!("{BOLD}👥 Suggested Senior Interns (Demo){RESET}");
    rule();
    for advisor in advisors {
        println!();
        println!("  {BOLD}{}{RESET} – {}", advisor.name, advisor.headline);
        println!("  {BOLD}Key strengths:{RESET} {}", advisor.strengths.join(", "));
        println!("  {BOLD}Why they're a fit for you:{RESET} {}", advisor.fit_reason);
    }
    println!();
    rule();
}

// ─── Developer view ───────────────────────────────────────────────────────────

/// Developer/debug panel: the record as a structured JSON document plus
/// the plain-text payload a production build would send onward.
///
/// Serialization of a record cannot fail (plain data, no maps with
/// non-string keys), so the JSON view falls back to an error note rather
/// than propagating.
pub fn debug_panel<T: serde::Serialize>(title: &str, record: &T, payload: &str, caption: &str) {
    println!();
    println!("{CYAN}{BOLD}🔍 Developer View: {title}{RESET}");
    rule();
    match serde_json::to_string_pretty(record) {
        Ok(json) => println!("{json}"),
        Err(e) => println!("{RED}could not serialize record: {e}{RESET}"),
    }
    println!();
    println!("{BOLD}Text we would send to Gemini{RESET}");
    rule();
    println!("{payload}");
    rule();
    println!("{DIM}{caption}{RESET}");
    println!();
}

/// Single-line success notice (green).
pub fn success(text: &str) {
    println!("{GREEN}{text}{RESET}");
}

/// Single-line validation/usage error (red), printed to stderr.
pub fn error_line(text: &str) {
    eprintln!("{RED}{text}{RESET}");
}
