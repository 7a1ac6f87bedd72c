use std::path::Path;

use anyhow::Result;
use gistline_debate::DebateConfig;
use gistline_summary::SummaryConfig;
use serde::Deserialize;

/// Everything the command line can be configured with.
///
/// ```toml
/// [summary]
/// brief_sentences = 3
///
/// [debate]
/// moderation_window = 20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub summary: SummaryConfig,
    pub debate: DebateConfig,
}

impl AppConfig {
    /// Load `path`, or the built-in defaults when no path was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = gistline::config::load_toml(path)?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
