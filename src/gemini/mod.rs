//! Minimal Gemini REST client for the connectivity check.
//!
//! Two endpoints only: model listing and a single text generation. This
//! is the diagnostic surface — the intake flows never call it. Auth is
//! the AI Studio style `?key=` query parameter.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fixed probe prompt for the generation check.
pub const PROBE_PROMPT: &str = "Say: Gemini is working.";

// ─── API types ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    /// Fully-qualified model name, e.g. `models/gemini-2.0-flash`.
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

// ─── Client ───────────────────────────────────────────────────────────────────

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// List the models this key can call, filtered to those supporting
    /// `generateContent`.
    pub async fn list_generation_models(&self) -> Result<Vec<ModelInfo>> {
        let url = format!("{}/v1beta/models", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .context("model-listing request failed")?
            .error_for_status()
            .context("model-listing request rejected")?;

        let body: ListModelsResponse = resp
            .json()
            .await
            .context("model-listing response was not valid JSON")?;

        Ok(body
            .models
            .into_iter()
            .filter(ModelInfo::supports_generate_content)
            .collect())
    }

    /// Run one text generation against `model` (fully-qualified name) and
    /// return the first candidate's text.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/v1beta/{}:generateContent", self.base_url, model);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let resp = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .context("generation request failed")?
            .error_for_status()
            .context("generation request rejected")?;

        let body: GenerateResponse = resp
            .json()
            .await
            .context("generation response was not valid JSON")?;

        let text = body
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|t| !t.is_empty())
            .context("generation response contained no text candidates")?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_filter() {
        let body = r#"{
            "models": [
                {"name": "models/gemini-2.0-flash",
                 "supportedGenerationMethods": ["generateContent", "countTokens"]},
                {"name": "models/embedding-001",
                 "supportedGenerationMethods": ["embedContent"]},
                {"name": "models/aqa"}
            ]
        }"#;
        let parsed: ListModelsResponse = serde_json::from_str(body).unwrap();
        let usable: Vec<_> = parsed
            .models
            .into_iter()
            .filter(ModelInfo::supports_generate_content)
            .collect();
        assert_eq!(usable.len(), 1);
        assert_eq!(usable[0].name, "models/gemini-2.0-flash");
    }

    #[test]
    fn test_generate_response_text_extraction() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Gemini is "}, {"text": "working."}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, "Gemini is working.");
    }
}
