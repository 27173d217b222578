use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::brain::Emotion;

/// Classification of a reply's purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportType {
    /// Facts about mental health, coping techniques, therapy.
    #[default]
    Informational,
    /// Listening, validation and check-ins.
    Emotional,
    /// Crisis resources. Only produced by the crisis short-circuit in practice.
    Crisis,
}

impl SupportType {
    pub fn label(&self) -> &'static str {
        match self {
            SupportType::Informational => "informational",
            SupportType::Emotional => "emotional",
            SupportType::Crisis => "crisis",
        }
    }
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Represents a single message in a conversation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Globally unique identifier (UUID v4).
    pub id: Uuid,
    /// The text content of the message.
    pub content: String,
    /// The author of the message.
    pub sender: Sender,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
    /// Emotion detected in the user input this message answers, if any.
    pub emotion: Option<Emotion>,
    /// Purpose of the reply. Always set on bot messages.
    pub support_type: Option<SupportType>,
}

impl ConversationMessage {
    /// Creates a bot reply stamped with a fresh id and the current time.
    pub fn bot(content: String, emotion: Option<Emotion>, support_type: SupportType) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            sender: Sender::Bot,
            timestamp: Utc::now(),
            emotion,
            support_type: Some(support_type),
        }
    }
}

/// Last emotion detected in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmotionalContext {
    pub current_emotion: Option<Emotion>,
    pub intensity: f32,
}

/// Summary over a conversation's bot replies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversationInsights {
    /// A most frequent emotion. On a tie any of the tied emotions may be
    /// returned; callers must not rely on which.
    pub dominant_emotion: Option<Emotion>,
    /// Distinct support types, in order of first use.
    pub support_types_used: Vec<SupportType>,
    /// Number of bot messages in the history.
    pub conversation_length: usize,
}
