//! Depth-controlled extractive summarizer.

use gistline::{
    word_count, GistError, GistResult, Ranking, SentenceScorer, SENTENCE_TERMINATORS,
    SUMMARY_MIN_WORD_LEN,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Depth, KeyPointExtractor, SummaryConfig};

/// Model identifier reported on every summary.
pub const MODEL_NAME: &str = "extractive-summarization-v1";

/// Provider reported on every summary.
pub const PROVIDER_NAME: &str = "Built-in Algorithm";

/// Title used when the first sentence is empty.
pub const FALLBACK_TITLE: &str = "Document Summary";

/// Output of [`Summarizer::summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub title: String,
    pub summary: String,
    /// At most five entries; the placeholder list when nothing qualified.
    pub key_points: Vec<String>,
    pub model: String,
    pub provider: String,
    pub word_count: usize,
    /// Minutes, rounded up.
    pub reading_time: usize,
    pub sentence_count: usize,
}

/// Stateless summarizer; holds only its configuration.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SummaryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Score and order the sentences of `text`.
    pub fn rank(&self, text: &str) -> Ranking {
        SentenceScorer::new(SUMMARY_MIN_WORD_LEN).rank(text.trim())
    }

    /// Summarize `text` at the requested depth.
    ///
    /// Fails with [`GistError::Validation`] when the trimmed text is shorter
    /// than [`SummaryConfig::min_text_chars`].
    pub fn summarize(&self, text: &str, depth: Depth) -> GistResult<SummaryResult> {
        let clean = text.trim();
        if clean.chars().count() < self.config.min_text_chars {
            return Err(GistError::validation("Text is too short to summarize"));
        }

        let words = word_count(clean);
        let ranking = self.rank(clean);
        let sentence_count = ranking.len();
        let target = self.config.target_sentences(depth, sentence_count);

        let summary = ranking
            .top_in_document_order(target)
            .iter()
            .map(|sentence| sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();

        let summary = if summary.is_empty() {
            warn!("no sentences selected, falling back to text prefix");
            let prefix: String = clean
                .chars()
                .take(self.config.fallback_summary_chars)
                .collect();
            format!("{}...", prefix)
        } else {
            summary
        };

        let key_points = KeyPointExtractor::from_config(&self.config).extract(&ranking);

        debug!(
            %depth,
            words,
            sentence_count,
            selected = target,
            key_points = key_points.len(),
            "summary generated"
        );

        Ok(SummaryResult {
            title: generate_title(clean, self.config.title_max_chars),
            summary,
            key_points,
            model: MODEL_NAME.to_string(),
            provider: PROVIDER_NAME.to_string(),
            word_count: words,
            reading_time: reading_time(words, self.config.words_per_minute),
            sentence_count,
        })
    }
}

/// Summarize with the default configuration.
pub fn summarize(text: &str, depth: Depth) -> GistResult<SummaryResult> {
    Summarizer::new().summarize(text, depth)
}

/// Title from the first sentence of `text`, cut to `max_chars` characters
/// plus `...`.
pub fn generate_title(text: &str, max_chars: usize) -> String {
    let first = text
        .trim()
        .split(SENTENCE_TERMINATORS)
        .next()
        .unwrap_or_default();

    if first.trim().is_empty() {
        return FALLBACK_TITLE.to_string();
    }

    if first.chars().count() > max_chars {
        let cut: String = first.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        first.to_string()
    }
}

/// Minutes needed to read `words` words, rounded up.
pub fn reading_time(words: usize, words_per_minute: usize) -> usize {
    words.div_ceil(words_per_minute.max(1))
}
