// SPDX-License-Identifier: MIT
// `senior-intern doctor` — Gemini connectivity smoke test.
//
// One-shot, non-interactive: read the credential, list models, run one
// generation, report. Exit 0 on success, 1 on a missing credential or an
// empty model list; any other fault is printed (redacted) and exits 1.
// No retries, no relationship to the intake flows.

use anyhow::Result;
use tracing::debug;

use crate::config::Config;
use crate::gemini::{GeminiClient, PROBE_PROMPT};
use crate::redact::redact_str;
use crate::render::{rule, BOLD, GREEN, RED, RESET};

/// Run the connectivity check. Returns the process exit code.
pub async fn run(config: &Config) -> Result<i32> {
    println!();
    println!("{BOLD}senior-intern doctor — Gemini connectivity check{RESET}");
    rule();

    let Some(api_key) = config.gemini_api_key.as_deref() else {
        println!("  {RED}✗{RESET}  GEMINI_API_KEY is not set (env var or config.toml)");
        return Ok(1);
    };
    println!("  {GREEN}✓{RESET}  Credential found");

    let client = GeminiClient::new(api_key, &config.api_base_url)?;

    let models = match client.list_generation_models().await {
        Ok(models) => models,
        Err(e) => {
            let (msg, _) = redact_str(&format!("{e:#}"));
            println!("  {RED}✗{RESET}  Could not list models: {msg}");
            return Ok(1);
        }
    };

    if models.is_empty() {
        println!("  {RED}✗{RESET}  No models with generateContent found for this key/project.");
        println!("      Check that you created the key in Google AI Studio (not Vertex AI).");
        return Ok(1);
    }

    println!("  {GREEN}✓{RESET}  Connected. Models that support generateContent:");
    for (i, model) in models.iter().enumerate() {
        println!("      {i}: {}", model.name);
    }

    // Pick the first available model for the generation probe.
    let model_name = &models[0].name;
    println!();
    println!("  ➡ Using model: {model_name}");
    debug!(model = %model_name, "running generation probe");

    match client.generate(model_name, PROBE_PROMPT).await {
        Ok(text) => {
            println!("  {GREEN}✓{RESET}  Gemini response:");
            println!();
            for line in text.lines() {
                println!("      {line}");
            }
            println!();
            rule();
            println!("{GREEN}All checks passed.{RESET}");
            Ok(0)
        }
        Err(e) => {
            let (msg, _) = redact_str(&format!("{e:#}"));
            println!("  {RED}✗{RESET}  Something went wrong when calling Gemini: {msg}");
            Ok(1)
        }
    }
}
