//! Extractive summarization for gistline.
//!
//! Given a raw document, this crate picks the highest scoring sentences at a
//! requested [`Depth`], presents them in reading order, and derives a title,
//! reading time and a short list of key points from the same ranking.
//!
//! ## Usage
//!
//! ```
//! use gistline_summary::{summarize, Depth};
//!
//! let result = summarize(
//!     "Solar panels convert sunlight into electricity. Panels need sunlight. Clouds reduce output.",
//!     Depth::Brief,
//! )
//! .unwrap();
//!
//! assert_eq!(result.sentence_count, 3);
//! assert_eq!(result.title, "Solar panels convert sunlight into electricity");
//! ```
//!
//! Text whose trimmed length is under ten characters is rejected with a
//! validation error.

mod config;
mod depth;
mod key_points;
mod source;
mod summarizer;

pub use config::SummaryConfig;
pub use depth::Depth;
pub use key_points::{KeyPointExtractor, PLACEHOLDER_KEY_POINTS};
pub use source::{SourceDocument, SourceKind, MIN_FILE_CHARS};
pub use summarizer::{
    generate_title, reading_time, summarize, Summarizer, SummaryResult, FALLBACK_TITLE,
    MODEL_NAME, PROVIDER_NAME,
};
