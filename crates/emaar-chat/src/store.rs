//! Append-only conversation store with deferred replies.
//!
//! Every accepted submission appends a user record immediately and spawns
//! one single-shot reply task. Reply tasks are never cancelled, retried or
//! coalesced. All appends go through one mutex that also owns the id
//! counter, so id order, insertion order and display order agree.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use emaar_core::config::ChatConfig;
use emaar_core::types::{MessageId, Timestamp};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::error::ChatError;
use crate::response::{reply_text, ResponseSynthesizer};
use crate::types::{Author, MessageRecord, ResponsePayload};

#[derive(Debug, Default)]
struct History {
    records: Vec<MessageRecord>,
    next_id: u64,
}

impl History {
    fn append(
        &mut self,
        text: String,
        author: Author,
        sent_at: Timestamp,
        structured_content: Option<ResponsePayload>,
    ) -> MessageRecord {
        self.next_id += 1;
        let record = MessageRecord {
            id: MessageId(self.next_id),
            text,
            author,
            sent_at,
            structured_content,
        };
        self.records.push(record.clone());
        record
    }
}

fn lock(history: &Mutex<History>) -> Result<MutexGuard<'_, History>, ChatError> {
    history
        .lock()
        .map_err(|e| ChatError::StateLock(format!("history lock poisoned: {}", e)))
}

// =============================================================================
// Submission / PendingReply
// =============================================================================

/// Handle to a scheduled reply.
///
/// Dropping it does not cancel the reply; the task still appends its record.
#[derive(Debug)]
pub struct PendingReply {
    in_reply_to: MessageId,
    handle: JoinHandle<Option<MessageRecord>>,
}

impl PendingReply {
    /// Id of the user record this reply answers.
    pub fn in_reply_to(&self) -> MessageId {
        self.in_reply_to
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the reply to be appended.
    ///
    /// Returns `None` if the store was dropped before the reply fired.
    pub async fn wait(self) -> Option<MessageRecord> {
        match self.handle.await {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Reply task failed");
                None
            }
        }
    }
}

/// Result of an accepted submission.
#[derive(Debug)]
pub struct Submission {
    pub user_record: MessageRecord,
    pub pending: PendingReply,
}

// =============================================================================
// ConversationStore
// =============================================================================

/// Ordered, append-only message history for a single session.
///
/// Cloning shares the same history. Reply tasks only hold a weak
/// reference, so a reply that fires after every clone is gone is a no-op.
#[derive(Debug, Clone)]
pub struct ConversationStore {
    session_id: Uuid,
    history: Arc<Mutex<History>>,
    synthesizer: ResponseSynthesizer,
    reply_delay: Duration,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::from_config(&ChatConfig::default())
    }
}

impl ConversationStore {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            history: Arc::new(Mutex::new(History::default())),
            synthesizer: ResponseSynthesizer::new(),
            reply_delay,
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.reply_delay())
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Submit a user message.
    ///
    /// Blank (whitespace-only) text is ignored and yields `Ok(None)`.
    /// Otherwise the user record is appended at once and a reply is
    /// scheduled `reply_delay` later. Must be called inside a Tokio runtime.
    pub fn submit(&self, text: &str) -> Result<Option<Submission>, ChatError> {
        if text.trim().is_empty() {
            tracing::debug!(session_id = %self.session_id, "Blank submission ignored");
            return Ok(None);
        }

        let sent_at = Timestamp::now();
        let user_record = lock(&self.history)?.append(text.to_string(), Author::User, sent_at, None);
        tracing::info!(
            session_id = %self.session_id,
            message_id = %user_record.id,
            "User message appended"
        );

        let pending = self.schedule_reply(user_record.id, text.to_string(), sent_at);
        Ok(Some(Submission {
            user_record,
            pending,
        }))
    }

    fn schedule_reply(&self, in_reply_to: MessageId, text: String, sent_at: Timestamp) -> PendingReply {
        let history: Weak<Mutex<History>> = Arc::downgrade(&self.history);
        let synthesizer = self.synthesizer;
        let delay = self.reply_delay;
        let session_id = self.session_id;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let Some(history) = history.upgrade() else {
                tracing::debug!(%session_id, %in_reply_to, "Conversation gone, reply dropped");
                return None;
            };

            let payload = synthesizer.synthesize(&text);
            let mut guard = match lock(&history) {
                Ok(guard) => guard,
                Err(e) => {
                    tracing::warn!(%session_id, error = %e, "Reply not appended");
                    return None;
                }
            };
            let record = guard.append(reply_text(&text), Author::Assistant, sent_at, Some(payload));
            tracing::info!(
                %session_id,
                message_id = %record.id,
                %in_reply_to,
                "Assistant reply appended"
            );
            Some(record)
        });

        PendingReply {
            in_reply_to,
            handle,
        }
    }

    /// Snapshot of the history in display order.
    pub fn history(&self) -> Result<Vec<MessageRecord>, ChatError> {
        Ok(lock(&self.history)?.records.clone())
    }

    pub fn len(&self) -> Result<usize, ChatError> {
        Ok(lock(&self.history)?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, ChatError> {
        Ok(self.len()? == 0)
    }
}
