use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name used when a message arrives without one.
pub const DEFAULT_SENDER_NAME: &str = "Anonymous";

fn default_sender_name() -> String {
    DEFAULT_SENDER_NAME.to_string()
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// A human participant.
    User,
    /// A reply generated by this engine.
    Ai,
    /// Room notices such as joins.
    System,
}

/// One entry of a debate transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessage {
    pub sender: Sender,
    #[serde(default = "default_sender_name")]
    pub sender_name: String,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ConversationMessage {
    pub fn new(sender: Sender, sender_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            sender,
            sender_name: sender_name.into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(sender_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(Sender::User, sender_name, content)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(Sender::Ai, "AI Moderator", content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Sender::System, "System", content)
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whether the message was written by a human participant.
    pub fn is_participant(&self) -> bool {
        self.sender == Sender::User
    }
}
