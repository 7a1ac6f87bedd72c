//! Debate engine configuration.

use serde::{Deserialize, Serialize};

use crate::{ResponseTemplates, DEFAULT_KEY_TERMS};

/// Tunables for [`DebateResponder`](crate::DebateResponder) and
/// [`Moderator`](crate::Moderator).
///
/// Template pools can be replaced from TOML:
///
/// ```toml
/// moderation_window = 20
///
/// [templates]
/// factual = ["On \"{topic}\": {terms}."]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebateConfig {
    /// Key terms substituted into a reply.
    pub key_term_count: usize,
    /// Most recent participant messages considered by the moderator.
    pub moderation_window: usize,
    /// Themes reported per moderation summary.
    pub theme_count: usize,
    pub templates: ResponseTemplates,
}

impl Default for DebateConfig {
    fn default() -> Self {
        Self {
            key_term_count: DEFAULT_KEY_TERMS,
            moderation_window: 10,
            theme_count: 3,
            templates: ResponseTemplates::default(),
        }
    }
}

impl DebateConfig {
    pub fn with_key_term_count(mut self, key_term_count: usize) -> Self {
        self.key_term_count = key_term_count;
        self
    }

    pub fn with_moderation_window(mut self, moderation_window: usize) -> Self {
        self.moderation_window = moderation_window;
        self
    }

    pub fn with_theme_count(mut self, theme_count: usize) -> Self {
        self.theme_count = theme_count;
        self
    }

    pub fn with_templates(mut self, templates: ResponseTemplates) -> Self {
        self.templates = templates;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: DebateConfig = gistline::config::parse_toml(
            "moderation_window = 20\n\n[templates]\nfactual = [\"On {topic}: {terms}.\"]\n",
        )
        .unwrap();

        assert_eq!(config.moderation_window, 20);
        assert_eq!(config.theme_count, 3);
        assert_eq!(config.key_term_count, 3);
        assert_eq!(config.templates.factual, vec!["On {topic}: {terms}."]);
        assert_eq!(config.templates.opinion.len(), 3);
        assert_eq!(config.templates.analytical.len(), 4);
    }
}
