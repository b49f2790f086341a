//! Error types for the conversational core.

use emaar_core::error::EmaarError;

/// Errors from the chat engine.
///
/// Blank submissions are not errors; they are ignored by the store.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("conversation state lock poisoned: {0}")]
    StateLock(String),
    #[error("no suggestion at position {index} (showing {available})")]
    InvalidSuggestion { index: usize, available: usize },
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<EmaarError> for ChatError {
    fn from(err: EmaarError) -> Self {
        ChatError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        let err = ChatError::StateLock("history".to_string());
        assert_eq!(err.to_string(), "conversation state lock poisoned: history");

        let err = ChatError::InvalidSuggestion {
            index: 5,
            available: 2,
        };
        assert_eq!(err.to_string(), "no suggestion at position 5 (showing 2)");

        let err = ChatError::Config("bad delay".to_string());
        assert_eq!(err.to_string(), "configuration error: bad delay");
    }

    #[test]
    fn test_chat_error_from_emaar_error() {
        let core_err = EmaarError::Config("missing [chat]".to_string());
        let chat_err: ChatError = core_err.into();
        assert!(matches!(chat_err, ChatError::Config(_)));
        assert!(chat_err.to_string().contains("missing [chat]"));
    }

    #[test]
    fn test_errors_implement_debug() {
        let dbg = format!("{:?}", ChatError::StateLock(String::new()));
        assert!(dbg.contains("StateLock"));

        let dbg = format!(
            "{:?}",
            ChatError::InvalidSuggestion {
                index: 0,
                available: 0
            }
        );
        assert!(dbg.contains("InvalidSuggestion"));
    }
}
