//! Conversation data model.

use emaar_core::types::{MessageId, Timestamp};
use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Who authored a message record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Assistant,
}

/// Which canned reply a message was classified into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTopic {
    /// Featured residential projects.
    Projects,
    /// Real-estate technology trends.
    Technology,
    /// Generic company overview.
    About,
}

impl std::fmt::Display for ReplyTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplyTopic::Projects => write!(f, "projects"),
            ReplyTopic::Technology => write!(f, "technology"),
            ReplyTopic::About => write!(f, "about"),
        }
    }
}

// =============================================================================
// Payload
// =============================================================================

/// One numbered block of a structured reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadSection {
    /// Display number, e.g. `"1"`.
    pub number: String,
    pub title: String,
    pub details: Vec<String>,
}

/// Structured content attached to a synthesized reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub title: String,
    pub sections: Vec<PayloadSection>,
}

// =============================================================================
// MessageRecord
// =============================================================================

/// One immutable entry of the conversation history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: MessageId,
    pub text: String,
    pub author: Author,
    pub sent_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<ResponsePayload>,
}

impl MessageRecord {
    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }

    pub fn time(&self) -> String {
        self.sent_at.time_label()
    }

    pub fn date(&self) -> String {
        self.sent_at.date_label()
    }
}
