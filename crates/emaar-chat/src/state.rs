//! Reducer-style application state for the chat screen.
//!
//! All UI state lives in [`AppState`] and changes only through
//! [`AppState::dispatch`]. The input region moves between two phases:
//! - Idle -> Typing (text entered)
//! - Typing -> Idle (text cleared, or message submitted)

use std::fmt;

use emaar_core::config::ChatConfig;

use crate::error::ChatError;
use crate::store::{ConversationStore, PendingReply};
use crate::suggest::SuggestionMatcher;
use crate::types::MessageRecord;

/// Phase of the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPhase {
    /// Empty input, no suggestions.
    Idle,
    /// Non-empty input; suggestions follow every edit.
    Typing,
}

impl fmt::Display for InputPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputPhase::Idle => write!(f, "Idle"),
            InputPhase::Typing => write!(f, "Typing"),
        }
    }
}

/// Layout of the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Centered greeting and input; shown while the history is empty.
    Welcome,
    /// Message list with the input pinned below.
    Conversation,
}

/// Everything the user can do to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show or hide the sidebar.
    ToggleSidebar,
    /// The input text changed.
    InputChanged(String),
    /// A suggestion from the current list was picked (zero-based).
    SuggestionSelected(usize),
    /// The current input was submitted.
    Submit,
}

/// Complete state of the chat screen.
#[derive(Debug, Clone)]
pub struct AppState {
    sidebar_open: bool,
    menu_button_visible: bool,
    input: String,
    suggestions: Vec<String>,
    matcher: SuggestionMatcher,
    store: ConversationStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}

impl AppState {
    pub fn new(config: &ChatConfig) -> Self {
        Self::with_parts(
            SuggestionMatcher::from_config(config),
            ConversationStore::from_config(config),
        )
    }

    pub fn with_parts(matcher: SuggestionMatcher, store: ConversationStore) -> Self {
        Self {
            sidebar_open: true,
            menu_button_visible: false,
            input: String::new(),
            suggestions: Vec::new(),
            matcher,
            store,
        }
    }

    /// Apply one action.
    ///
    /// Returns the pending reply when a submission was accepted.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<PendingReply>, ChatError> {
        tracing::trace!(?action, phase = %self.phase(), "Dispatch");
        match action {
            Action::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                self.menu_button_visible = !self.menu_button_visible;
                Ok(None)
            }
            Action::InputChanged(text) => {
                self.suggestions = self.matcher.suggest(&text);
                self.input = text;
                Ok(None)
            }
            Action::SuggestionSelected(index) => {
                let chosen = self.suggestions.get(index).cloned().ok_or(
                    ChatError::InvalidSuggestion {
                        index,
                        available: self.suggestions.len(),
                    },
                )?;
                self.input = chosen;
                self.suggestions.clear();
                Ok(None)
            }
            Action::Submit => match self.store.submit(&self.input)? {
                Some(submission) => {
                    self.input.clear();
                    self.suggestions.clear();
                    Ok(Some(submission.pending))
                }
                None => Ok(None),
            },
        }
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Whether the header shows its own menu button (sidebar collapsed).
    pub fn menu_button_visible(&self) -> bool {
        self.menu_button_visible
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn phase(&self) -> InputPhase {
        if self.input.is_empty() {
            InputPhase::Idle
        } else {
            InputPhase::Typing
        }
    }

    pub fn view_mode(&self) -> Result<ViewMode, ChatError> {
        if self.store.is_empty()? {
            Ok(ViewMode::Welcome)
        } else {
            Ok(ViewMode::Conversation)
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn history(&self) -> Result<Vec<MessageRecord>, ChatError> {
        self.store.history()
    }
}

// =============================================================================
// Tests
// =============================================================================
