//! Per-call word frequency table.

use std::collections::HashMap;

/// Occurrence counts of words across one input unit (a document, a single
/// message, or a window of messages).
///
/// The table remembers the order in which words were first seen so that
/// [`TermFrequencyTable::top`] can break count ties deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencyTable {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl TermFrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from already-filtered words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for word in words {
            table.record(word);
        }
        table
    }

    /// Count one more occurrence of `word`.
    pub fn record(&mut self, word: impl Into<String>) {
        let word = word.into();
        match self.counts.get_mut(&word) {
            Some(count) => *count += 1,
            None => {
                self.first_seen.push(word.clone());
                self.counts.insert(word, 1);
            }
        }
    }

    /// Occurrences of `word`, zero when unseen.
    pub fn frequency(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// Total number of recorded occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Distinct words in first-seen order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.first_seen.iter().map(String::as_str)
    }

    /// The `n` most frequent words, highest count first. Equal counts keep
    /// first-seen order.
    pub fn top(&self, n: usize) -> Vec<&str> {
        let mut ranked: Vec<(&str, usize)> = self
            .first_seen
            .iter()
            .map(|word| (word.as_str(), self.frequency(word)))
            .collect();
        // stable: ties stay in first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).map(|(word, _)| word).collect()
    }
}
