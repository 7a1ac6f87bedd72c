//! Moderation summaries over the recent window of a debate.

use std::fmt;

use gistline::{informative_words, TermFrequencyTable, THEME_MIN_WORD_LEN};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::{ConversationMessage, DebateConfig};

/// Posted when no participant has spoken yet.
pub const WELCOME_MESSAGE: &str = "Welcome to this debate! I'll be moderating our discussion. Please share your perspectives, ask questions, and engage thoughtfully with different viewpoints. Let's have a productive conversation.";

/// Closing recommendation of every report.
pub const MOVING_FORWARD: &str = "Let's continue building on these ideas. Consider supporting your points with examples, addressing counterarguments, and asking clarifying questions to deepen our understanding.";

const NO_THEMES_PHRASE: &str = "the points raised so far";

/// Reports with fewer messages than this are "just beginning".
const BEGINNING_BELOW: usize = 5;
/// Reports with fewer messages than this are "developing".
const DEVELOPING_BELOW: usize = 15;

/// The observation a report makes about the state of the debate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insight {
    SingleParticipant,
    JustBeginning,
    Developing,
    Substantial,
}

impl Insight {
    /// Pick the observation for a window of `message_count` messages written
    /// by `participants` distinct people.
    pub fn assess(participants: usize, message_count: usize) -> Self {
        if participants == 1 {
            Insight::SingleParticipant
        } else if message_count < BEGINNING_BELOW {
            Insight::JustBeginning
        } else if message_count < DEVELOPING_BELOW {
            Insight::Developing
        } else {
            Insight::Substantial
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Insight::SingleParticipant => "We have one active participant so far. Others are welcome to join and share their perspectives to enrich this discussion.",
            Insight::JustBeginning => "The discussion is just beginning. This is a great time to introduce key arguments and establish different viewpoints.",
            Insight::Developing => "The conversation is developing nicely with multiple viewpoints emerging. This is an excellent opportunity to explore deeper implications and challenge assumptions.",
            Insight::Substantial => "We've had a substantial discussion! At this stage, it might be helpful to synthesize the main arguments, identify areas of agreement/disagreement, and explore potential resolutions.",
        }
    }
}

/// Messages sent by one participant within the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub name: String,
    pub message_count: usize,
}

/// Statistics and commentary over the moderation window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerationReport {
    pub topic: String,
    pub message_count: usize,
    /// Distinct sender names in order of first appearance.
    pub participants: Vec<String>,
    pub contributions: Vec<Contribution>,
    pub themes: Vec<String>,
    /// Serialized as the observation sentence.
    #[serde(serialize_with = "insight_text")]
    pub insight: Insight,
    pub recommendation: String,
}

fn insight_text<S: Serializer>(insight: &Insight, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(insight.text())
}

impl ModerationReport {
    /// The markdown summary posted into the debate room.
    pub fn render(&self) -> String {
        let themes = if self.themes.is_empty() {
            NO_THEMES_PHRASE.to_string()
        } else {
            self.themes.join(", ")
        };

        format!(
            "📊 **Moderation Summary**\n\n\
             Our debate on \"{}\" has generated {} messages from {}.\n\n\
             **Key Themes Emerging:** The discussion has particularly focused on {}, showing diverse perspectives.\n\n\
             **Observation:** {}\n\n\
             **Moving Forward:** {}",
            self.topic,
            self.message_count,
            self.participants.join(", "),
            themes,
            self.insight.text(),
            self.recommendation,
        )
    }
}

impl fmt::Display for ModerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// What the moderator posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModerationOutcome {
    /// Nobody has spoken yet.
    Welcome,
    Report(ModerationReport),
}

impl ModerationOutcome {
    pub fn render(&self) -> String {
        match self {
            ModerationOutcome::Welcome => WELCOME_MESSAGE.to_string(),
            ModerationOutcome::Report(report) => report.render(),
        }
    }

    pub fn report(&self) -> Option<&ModerationReport> {
        match self {
            ModerationOutcome::Welcome => None,
            ModerationOutcome::Report(report) => Some(report),
        }
    }
}

impl fmt::Display for ModerationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Summarizes the most recent participant messages of a debate.
#[derive(Debug, Clone)]
pub struct Moderator {
    window: usize,
    theme_count: usize,
}

impl Default for Moderator {
    fn default() -> Self {
        Self::new(&DebateConfig::default())
    }
}

impl Moderator {
    pub fn new(config: &DebateConfig) -> Self {
        Self {
            window: config.moderation_window,
            theme_count: config.theme_count,
        }
    }

    /// Build a report over the last `window` messages sent by participants.
    ///
    /// System notices and AI replies are ignored. Returns
    /// [`ModerationOutcome::Welcome`] when no participant message remains.
    pub fn moderate(&self, topic: &str, history: &[ConversationMessage]) -> ModerationOutcome {
        let participant_messages: Vec<&ConversationMessage> =
            history.iter().filter(|m| m.is_participant()).collect();
        let start = participant_messages.len().saturating_sub(self.window);
        let recent = &participant_messages[start..];

        if recent.is_empty() {
            return ModerationOutcome::Welcome;
        }

        let mut contributions: Vec<Contribution> = Vec::new();
        let mut theme_table = TermFrequencyTable::new();
        for message in recent {
            match contributions.iter_mut().find(|c| c.name == message.sender_name) {
                Some(contribution) => contribution.message_count += 1,
                None => contributions.push(Contribution {
                    name: message.sender_name.clone(),
                    message_count: 1,
                }),
            }
            for word in informative_words(&message.content, THEME_MIN_WORD_LEN) {
                theme_table.record(word);
            }
        }

        let themes: Vec<String> = theme_table
            .top(self.theme_count)
            .into_iter()
            .map(str::to_string)
            .collect();
        let participants: Vec<String> = contributions.iter().map(|c| c.name.clone()).collect();
        let insight = Insight::assess(participants.len(), recent.len());

        debug!(
            window = recent.len(),
            skipped = history.len() - recent.len(),
            participants = participants.len(),
            themes = themes.len(),
            "moderated debate"
        );

        ModerationOutcome::Report(ModerationReport {
            topic: topic.to_string(),
            message_count: recent.len(),
            participants,
            contributions,
            themes,
            insight,
            recommendation: MOVING_FORWARD.to_string(),
        })
    }
}

/// Moderate `history` with the default window and theme count.
pub fn moderate(topic: &str, history: &[ConversationMessage]) -> ModerationOutcome {
    Moderator::default().moderate(topic, history)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insight_thresholds() {
        assert_eq!(Insight::assess(1, 40), Insight::SingleParticipant);
        assert_eq!(Insight::assess(2, 4), Insight::JustBeginning);
        assert_eq!(Insight::assess(2, 5), Insight::Developing);
        assert_eq!(Insight::assess(3, 14), Insight::Developing);
        assert_eq!(Insight::assess(3, 15), Insight::Substantial);
    }

    #[test]
    fn welcome_renders_welcome_text() {
        assert_eq!(ModerationOutcome::Welcome.render(), WELCOME_MESSAGE);
        assert!(ModerationOutcome::Welcome.report().is_none());
    }
}
