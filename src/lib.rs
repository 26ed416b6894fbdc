pub mod board;
pub mod cli;
pub mod config;
pub mod gemini;
pub mod intake;
pub mod model;
pub mod prompt;
pub mod redact;
pub mod render;
pub mod session;

use config::Config;
use session::SessionState;

/// Application state passed to every page handler.
///
/// Holds the resolved configuration and the per-session records. Scoped
/// to one interactive run — nothing survives the process, by design.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub state: SessionState,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: SessionState::default(),
        }
    }
}
