use rand::Rng;
use tracing::{debug, warn};

use crate::{analyze_message_with_limit, ConversationMessage, DebateConfig, ResponseComposer};

/// Reply to an empty or whitespace-only message.
pub const EMPTY_MESSAGE_PROMPT: &str =
    "Please share your thoughts so we can have a meaningful discussion.";

/// Reply used when no template could be filled.
pub const APOLOGY_RESPONSE: &str = "That's an interesting perspective. Let me provide some insights based on the available context.";

/// Produces templated replies to individual debate messages.
#[derive(Debug, Clone)]
pub struct DebateResponder {
    key_term_count: usize,
    composer: ResponseComposer,
}

impl DebateResponder {
    pub fn new(config: &DebateConfig) -> Self {
        Self {
            key_term_count: config.key_term_count,
            composer: ResponseComposer::new(config.templates.clone()),
        }
    }

    /// Reply to `message` in a debate on `topic`.
    ///
    /// Never fails: composition errors are logged and replaced by
    /// [`APOLOGY_RESPONSE`]. `history` is accepted for parity with the
    /// moderator but does not influence the reply.
    pub fn respond<R: Rng + ?Sized>(
        &self,
        topic: &str,
        message: &str,
        history: &[ConversationMessage],
        rng: &mut R,
    ) -> String {
        if message.trim().is_empty() {
            return EMPTY_MESSAGE_PROMPT.to_string();
        }

        let analysis = analyze_message_with_limit(message, self.key_term_count);
        debug!(
            category = analysis.category.as_str(),
            key_terms = analysis.key_terms.len(),
            history = history.len(),
            "classified message"
        );

        match self.composer.compose(analysis.category, topic, &analysis.key_terms, rng) {
            Ok(reply) => reply,
            Err(err) => {
                warn!(error = %err, "falling back to apology response");
                APOLOGY_RESPONSE.to_string()
            }
        }
    }
}

impl Default for DebateResponder {
    fn default() -> Self {
        Self::new(&DebateConfig::default())
    }
}

/// Reply to `message` with the default configuration.
pub fn classify_and_respond<R: Rng + ?Sized>(
    topic: &str,
    message: &str,
    history: &[ConversationMessage],
    rng: &mut R,
) -> String {
    DebateResponder::default().respond(topic, message, history, rng)
}
