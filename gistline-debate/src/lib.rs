//! Debate-room heuristics for gistline.
//!
//! This crate works on a read-only snapshot of a debate transcript:
//!
//! - [`analyze_message`] classifies a single message as factual, opinion or
//!   analytical and pulls out its most frequent terms.
//! - [`DebateResponder`] turns that analysis into a templated reply, picking
//!   among templates with a caller-supplied random generator.
//! - [`Moderator`] summarizes the recent window of human messages into a
//!   [`ModerationReport`].
//!
//! ## Usage
//!
//! ```
//! use gistline_debate::{moderate, ConversationMessage, ModerationOutcome};
//!
//! let history = vec![
//!     ConversationMessage::user("Ada", "Nuclear power offers reliable baseload energy."),
//!     ConversationMessage::user("Lin", "Nuclear waste storage remains unsolved."),
//! ];
//!
//! match moderate("Energy policy", &history) {
//!     ModerationOutcome::Report(report) => {
//!         assert_eq!(report.participants, vec!["Ada", "Lin"]);
//!         assert_eq!(report.themes[0], "nuclear");
//!     }
//!     ModerationOutcome::Welcome => unreachable!(),
//! }
//! ```

mod classifier;
mod composer;
mod config;
mod message;
mod moderation;
mod responder;

pub use classifier::{
    analyze_message, analyze_message_with_limit, extract_key_terms, MessageAnalysis,
    ResponseCategory, DEFAULT_KEY_TERMS, FACTUAL_CUES, OPINION_CUES,
};
pub use composer::{ResponseComposer, ResponseTemplates, MISSING_TERMS_PHRASE};
pub use config::DebateConfig;
pub use message::{ConversationMessage, Sender, DEFAULT_SENDER_NAME};
pub use moderation::{
    moderate, Contribution, Insight, ModerationOutcome, ModerationReport, Moderator,
    MOVING_FORWARD, WELCOME_MESSAGE,
};
pub use responder::{
    classify_and_respond, DebateResponder, APOLOGY_RESPONSE, EMPTY_MESSAGE_PROMPT,
};

#[cfg(test)]
mod tests;
