//! Lexical core for gistline.
//!
//! This crate holds the pieces shared by the summarizer and the debate
//! moderator: a normalizing tokenizer, a per-call term frequency table, and
//! the frequency-weighted sentence scorer.
//!
//! ## Pipeline
//!
//! ```text
//! raw text ─▶ split_sentences ─┐
//!          └▶ informative_words ─▶ TermFrequencyTable ─▶ SentenceScorer ─▶ Ranking
//! ```
//!
//! Everything here is a pure function of its input. Nothing is cached between
//! calls, so a [`Ranking`] is only meaningful for the text it was built from.
//!
//! ## Usage
//!
//! ```
//! use gistline::{SentenceScorer, SUMMARY_MIN_WORD_LEN};
//!
//! let text = "Rust is fast. Rust is safe. Cats sleep.";
//! let ranking = SentenceScorer::new(SUMMARY_MIN_WORD_LEN).rank(text);
//!
//! assert_eq!(ranking.len(), 3);
//! assert_eq!(ranking.best().unwrap().position, 0);
//! ```

pub mod config;
mod display;
mod error;
mod scorer;
mod term_index;
mod tokenize;

pub use display::RankingDisplay;
pub use error::{ErrorKind, GistError, GistResult};
pub use scorer::{Ranking, Sentence, SentenceScorer, LONG_SENTENCE_CHARS};
pub use term_index::TermFrequencyTable;
pub use tokenize::{
    informative_words, normalize, split_sentences, word_count, SENTENCE_TERMINATORS,
    SUMMARY_MIN_WORD_LEN, THEME_MIN_WORD_LEN,
};
