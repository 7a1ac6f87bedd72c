//! Frequency-weighted sentence scoring.

use serde::Serialize;
use tracing::debug;

use crate::term_index::TermFrequencyTable;
use crate::tokenize::{informative_words, split_sentences};

/// Sentences longer than this many characters (before trimming) earn a
/// one-point length bonus.
pub const LONG_SENTENCE_CHARS: usize = 20;

/// A sentence with its score for the current call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Trimmed sentence text, terminators included.
    pub text: String,
    /// Sum of document frequencies of its informative words, plus the
    /// length bonus.
    pub score: usize,
    /// 0-based index in document order.
    pub position: usize,
}

/// Scores sentences against a document-wide [`TermFrequencyTable`].
#[derive(Debug, Clone, Copy)]
pub struct SentenceScorer {
    min_word_len: usize,
}

impl SentenceScorer {
    /// Create a scorer that counts words of at least `min_word_len`
    /// characters.
    pub fn new(min_word_len: usize) -> Self {
        Self { min_word_len }
    }

    /// Build the frequency table for a whole document.
    pub fn index(&self, text: &str) -> TermFrequencyTable {
        TermFrequencyTable::from_words(informative_words(text, self.min_word_len))
    }

    /// Score one raw (untrimmed) sentence.
    pub fn score(&self, sentence: &str, table: &TermFrequencyTable) -> usize {
        let lexical: usize = informative_words(sentence, self.min_word_len)
            .iter()
            .map(|word| table.frequency(word))
            .sum();
        let bonus = usize::from(sentence.chars().count() > LONG_SENTENCE_CHARS);
        lexical + bonus
    }

    /// Split `text` into sentences, score each one, and order them by score.
    pub fn rank(&self, text: &str) -> Ranking {
        let table = self.index(text);
        let sentences: Vec<Sentence> = split_sentences(text)
            .into_iter()
            .enumerate()
            .map(|(position, raw)| Sentence {
                text: raw.trim().to_string(),
                score: self.score(raw, &table),
                position,
            })
            .collect();

        debug!(
            sentences = sentences.len(),
            distinct_terms = table.len(),
            "scored document"
        );

        Ranking::from_scored(sentences)
    }
}

/// Sentences of one document ordered by descending score.
///
/// Equal scores keep document order, so the ranking is fully deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ranking {
    ranked: Vec<Sentence>,
}

impl Ranking {
    /// Order already-scored sentences.
    pub fn from_scored(mut sentences: Vec<Sentence>) -> Self {
        sentences.sort_by(|a, b| b.score.cmp(&a.score).then(a.position.cmp(&b.position)));
        Self { ranked: sentences }
    }

    /// Number of sentences in the document.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Sentences in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.ranked.iter()
    }

    /// Highest scoring sentence.
    pub fn best(&self) -> Option<&Sentence> {
        self.ranked.first()
    }

    /// The `k` best sentences, re-sorted into document order.
    pub fn top_in_document_order(&self, k: usize) -> Vec<&Sentence> {
        let mut top: Vec<&Sentence> = self.ranked.iter().take(k).collect();
        top.sort_by_key(|sentence| sentence.position);
        top
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::SUMMARY_MIN_WORD_LEN;

    #[test]
    fn score_sums_document_frequencies() {
        let scorer = SentenceScorer::new(SUMMARY_MIN_WORD_LEN);
        let table = TermFrequencyTable::from_words(vec!["rust", "rust", "fast"]);

        // rust(2) + rust(2) + fast(1), 21 chars -> +1
        assert_eq!(scorer.score("Rust rust fast, yes!!", &table), 6);
        // short sentence, no bonus
        assert_eq!(scorer.score("Rust.", &table), 2);
        // unknown words score nothing
        assert_eq!(scorer.score("Nothing matches.", &table), 0);
    }

    #[test]
    fn length_bonus_counts_untrimmed_characters() {
        let scorer = SentenceScorer::new(SUMMARY_MIN_WORD_LEN);
        let table = TermFrequencyTable::new();

        // exactly 20 characters: no bonus
        assert_eq!(scorer.score("abcdefghij abcdefgh.", &table), 0);
        // the leading space makes it 21
        assert_eq!(scorer.score(" abcdefghij abcdefgh.", &table), 1);
    }

    #[test]
    fn rank_orders_by_score_then_position() {
        let scorer = SentenceScorer::new(SUMMARY_MIN_WORD_LEN);
        let ranking = scorer.rank("Cats nap. Dogs bark loudly at cats. Cats purr.");

        let positions: Vec<usize> = ranking.iter().map(|s| s.position).collect();
        // cats=3, dogs=1, bark=1, loudly=1, purr=1
        // #0: cats(3)=3; #1: dogs+bark+loudly+cats = 6 (+1 bonus) = 7; #2: cats+purr = 4
        assert_eq!(positions, vec![1, 2, 0]);
        assert_eq!(ranking.best().map(|s| s.score), Some(7));
    }

    #[test]
    fn ties_keep_document_order() {
        let scorer = SentenceScorer::new(SUMMARY_MIN_WORD_LEN);
        let ranking = scorer.rank("Alpha beta. Gamma delta. Alpha beta.");
        let positions: Vec<usize> = ranking.iter().map(|s| s.position).collect();
        // alpha=2, beta=2 -> #0 and #2 score 4, #1 scores 2
        assert_eq!(positions, vec![0, 2, 1]);
    }

    #[test]
    fn top_in_document_order_restores_reading_order() {
        let scorer = SentenceScorer::new(SUMMARY_MIN_WORD_LEN);
        let ranking = scorer.rank("Cats nap. Dogs bark loudly at cats. Cats purr.");
        let top: Vec<usize> = ranking
            .top_in_document_order(2)
            .iter()
            .map(|s| s.position)
            .collect();
        assert_eq!(top, vec![1, 2]);
    }

    #[test]
    fn sentence_text_is_trimmed() {
        let ranking = SentenceScorer::new(SUMMARY_MIN_WORD_LEN).rank("One here.   Two there.");
        let texts: Vec<&str> = ranking
            .top_in_document_order(2)
            .iter()
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(texts, vec!["One here.", "Two there."]);
    }
}
