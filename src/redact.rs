//! Secret redaction for printed output.
//!
//! The doctor subcommand authenticates with an API key carried in a URL
//! query parameter, so upstream error messages (which embed the full URL)
//! can leak it. Every error string destined for the terminal goes through
//! `redact_str` first.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled regular expressions for known secret formats.
static SECRET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Google AI Studio API keys
        Regex::new(r"AIza[0-9A-Za-z\-_]{35}").expect("regex: AIza key"),
        // key=… query parameters
        Regex::new(r"(?i)\bkey=[A-Za-z0-9\-_]{8,}").expect("regex: key param"),
        // Generic key=value pairs (e.g. `API_KEY: abc123`)
        Regex::new(r#"(?i)(password|secret|token|api_key|auth)\s*[:=]\s*["']?[A-Za-z0-9+/\-_]{8,}"#)
            .expect("regex: key=value"),
        // Bearer tokens in Authorization headers
        Regex::new(r"(?i)bearer\s+[A-Za-z0-9+/\-_=]{20,}").expect("regex: bearer token"),
    ]
});

/// Redact secrets from a string.
///
/// Returns `(redacted_string, was_redacted)`. If no secrets were found the
/// original string is returned unchanged.
pub fn redact_str(input: &str) -> (String, bool) {
    let mut result = input.to_string();
    let mut changed = false;

    for pat in SECRET_PATTERNS.iter() {
        if pat.is_match(&result) {
            result = pat.replace_all(&result, "[REDACTED]").to_string();
            changed = true;
        }
    }

    (result, changed)
}
