//! Conversational core for the EMAAR assistant mockup.
//!
//! Provides canned suggestion matching, keyword-driven reply synthesis,
//! an append-only conversation store with deferred replies, and a
//! reducer-style application state for the presentation layer.

pub mod error;
pub mod response;
pub mod state;
pub mod store;
pub mod suggest;
pub mod types;

pub use error::ChatError;
pub use response::{reply_text, synthesize, ResponseSynthesizer};
pub use state::{Action, AppState, InputPhase, ViewMode};
pub use store::{ConversationStore, PendingReply, Submission};
pub use suggest::{match_suggestions, SuggestionMatcher};
pub use types::{Author, MessageRecord, PayloadSection, ReplyTopic, ResponsePayload};
