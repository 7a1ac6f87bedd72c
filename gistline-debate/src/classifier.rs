//! Message classification and key-term extraction.

use std::collections::HashSet;

use gistline::{informative_words, TermFrequencyTable, SUMMARY_MIN_WORD_LEN, THEME_MIN_WORD_LEN};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Substrings that mark a message as expressing an opinion.
pub const OPINION_CUES: &[&str] = &["think", "believe", "feel", "opinion", "view"];

/// Substrings that mark a message as asking for facts.
pub const FACTUAL_CUES: &[&str] = &["what", "how", "when", "where", "who", "why"];

/// Frequent filler words never reported as key terms.
static KEY_TERM_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "this", "that", "these", "those", "what", "which", "have", "been", "were", "their",
        "there", "would", "could", "should",
    ]
    .into_iter()
    .collect()
});

/// The kind of reply a message calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    Factual,
    Opinion,
    Analytical,
}

impl ResponseCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseCategory::Factual => "factual",
            ResponseCategory::Opinion => "opinion",
            ResponseCategory::Analytical => "analytical",
        }
    }
}

/// Everything the classifier learned about one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAnalysis {
    pub is_question: bool,
    pub is_opinion: bool,
    pub is_factual: bool,
    pub category: ResponseCategory,
    /// Most frequent terms, ties in order of appearance.
    pub key_terms: Vec<String>,
}

fn contains_any(haystack: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| haystack.contains(cue))
}

/// Key terms reported by [`analyze_message`].
pub const DEFAULT_KEY_TERMS: usize = 3;

/// Classify `message` and extract its top [`DEFAULT_KEY_TERMS`] key terms.
///
/// Cues are matched as case-insensitive substrings, so "review" counts as an
/// opinion cue and "show" as a factual one. A question with a factual cue is
/// factual even when it also carries an opinion cue.
pub fn analyze_message(message: &str) -> MessageAnalysis {
    analyze_message_with_limit(message, DEFAULT_KEY_TERMS)
}

/// Like [`analyze_message`], keeping up to `key_term_limit` key terms.
pub fn analyze_message_with_limit(message: &str, key_term_limit: usize) -> MessageAnalysis {
    let lower = message.to_lowercase();
    let is_question = message.contains('?');
    let is_opinion = contains_any(&lower, OPINION_CUES);
    let is_factual = contains_any(&lower, FACTUAL_CUES);

    let category = if is_question && is_factual {
        ResponseCategory::Factual
    } else if is_opinion {
        ResponseCategory::Opinion
    } else {
        ResponseCategory::Analytical
    };

    MessageAnalysis {
        is_question,
        is_opinion,
        is_factual,
        category,
        key_terms: extract_key_terms(message, key_term_limit),
    }
}

/// The `limit` most frequent non-filler terms of at least five characters.
pub fn extract_key_terms(message: &str, limit: usize) -> Vec<String> {
    let words = informative_words(message, SUMMARY_MIN_WORD_LEN)
        .into_iter()
        .filter(|word| !KEY_TERM_STOPWORDS.contains(word.as_str()))
        .filter(|word| word.chars().count() >= THEME_MIN_WORD_LEN);

    TermFrequencyTable::from_words(words)
        .top(limit)
        .into_iter()
        .map(str::to_string)
        .collect()
}
