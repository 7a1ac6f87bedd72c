//! Summarizer configuration.

use serde::{Deserialize, Serialize};

use crate::Depth;

/// Tunables for [`Summarizer`](crate::Summarizer).
///
/// `Default` reproduces the built-in behavior; a TOML file only needs to name
/// the fields it changes:
///
/// ```toml
/// detailed_sentences = 8
/// words_per_minute = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Sentence budget for [`Depth::Brief`].
    pub brief_sentences: usize,
    /// Sentence budget for [`Depth::Medium`].
    pub medium_sentences: usize,
    /// Sentence budget for [`Depth::Detailed`].
    pub detailed_sentences: usize,
    /// Trimmed inputs shorter than this are rejected.
    pub min_text_chars: usize,
    /// Reading speed used for the reading-time estimate.
    pub words_per_minute: usize,
    /// Titles longer than this are cut and suffixed with `...`.
    pub title_max_chars: usize,
    /// Length of the raw-text prefix used when no summary could be built.
    pub fallback_summary_chars: usize,
    /// Number of top-ranked sentences considered for key points.
    pub key_point_limit: usize,
    /// Shortest key point kept (inclusive).
    pub key_point_min_chars: usize,
    /// Longest key point kept (exclusive).
    pub key_point_max_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            brief_sentences: 2,
            medium_sentences: 4,
            detailed_sentences: 6,
            min_text_chars: 10,
            words_per_minute: 200,
            title_max_chars: 50,
            fallback_summary_chars: 500,
            key_point_limit: 5,
            key_point_min_chars: 20,
            key_point_max_chars: 200,
        }
    }
}

impl SummaryConfig {
    /// Sentence budget for `depth`, capped by the sentences available.
    pub fn target_sentences(&self, depth: Depth, available: usize) -> usize {
        let wanted = match depth {
            Depth::Brief => self.brief_sentences,
            Depth::Medium => self.medium_sentences,
            Depth::Detailed => self.detailed_sentences,
        };
        wanted.min(available)
    }

    pub fn with_words_per_minute(mut self, words_per_minute: usize) -> Self {
        self.words_per_minute = words_per_minute;
        self
    }

    pub fn with_min_text_chars(mut self, min_text_chars: usize) -> Self {
        self.min_text_chars = min_text_chars;
        self
    }

    pub fn with_depth_sentences(mut self, brief: usize, medium: usize, detailed: usize) -> Self {
        self.brief_sentences = brief;
        self.medium_sentences = medium;
        self.detailed_sentences = detailed;
        self
    }
}
