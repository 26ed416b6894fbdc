use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

// ─── TOML config file ─────────────────────────────────────────────────────────

/// `{data_dir}/config.toml` — all fields are optional overrides.
/// Priority: CLI / env var  >  TOML  >  built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// Log level filter string, e.g. "debug", "info,senior_intern=trace" (default: "info").
    log: Option<String>,
    /// Log output format: "pretty" (default, human-readable) | "json" (structured).
    log_format: Option<String>,
    /// Override the Gemini API base URL (default: https://generativelanguage.googleapis.com).
    api_base_url: Option<String>,
    /// Gemini API key for the doctor connectivity check. Prefer the
    /// GEMINI_API_KEY environment variable over committing this to disk.
    gemini_api_key: Option<String>,
}

fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

// ─── Config ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log: String,
    /// "pretty" (default) | "json".
    pub log_format: String,
    /// Gemini API base URL (SENIOR_INTERN_API_URL env var).
    pub api_base_url: String,
    /// Credential for the doctor check (GEMINI_API_KEY env var).
    /// None means the check fails fast with guidance.
    pub gemini_api_key: Option<String>,
}

impl Config {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file at `{data_dir}/config.toml`
    ///   3. Built-in defaults
    pub fn new(data_dir: Option<PathBuf>, log: Option<String>) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);

        // Load TOML as the lowest-priority override layer
        let toml = load_toml(&data_dir).unwrap_or_default();

        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let log_format = std::env::var("SENIOR_INTERN_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let api_base_url = std::env::var("SENIOR_INTERN_API_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.gemini_api_key);

        Self {
            data_dir,
            log,
            log_format,
            api_base_url,
            gemini_api_key,
        }
    }
}

fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/senior-intern
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("senior-intern");
        }
    }
    #[cfg(target_os = "linux")]
    {
        // $XDG_DATA_HOME/senior-intern or ~/.local/share/senior-intern
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("senior-intern");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("senior-intern");
        }
    }
    #[cfg(target_os = "windows")]
    {
        // %APPDATA%\senior-intern
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("senior-intern");
        }
    }
    // Fallback
    PathBuf::from(".senior-intern")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_layer_feeds_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.toml"),
            "log = \"debug\"\napi_base_url = \"https://example.test\"\n",
        )
        .unwrap();

        let config = Config::new(Some(tmp.path().to_path_buf()), None);
        assert_eq!(config.log, "debug");
        assert_eq!(config.api_base_url, "https://example.test");
    }

    #[test]
    fn test_cli_beats_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "log = \"debug\"\n").unwrap();

        let config = Config::new(Some(tmp.path().to_path_buf()), Some("warn".into()));
        assert_eq!(config.log, "warn");
    }

    #[test]
    fn test_malformed_toml_falls_back_to_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("config.toml"), "log = [not toml").unwrap();

        let config = Config::new(Some(tmp.path().to_path_buf()), None);
        assert_eq!(config.log, "info");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
