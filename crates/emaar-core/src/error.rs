use thiserror::Error;

/// Top-level error type for the EMAAR assistant.
///
/// Subsystem crates define their own error types and implement
/// `From<EmaarError>` so that `?` works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmaarError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for EmaarError {
    fn from(err: toml::de::Error) -> Self {
        EmaarError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for EmaarError {
    fn from(err: toml::ser::Error) -> Self {
        EmaarError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for EmaarError {
    fn from(err: serde_json::Error) -> Self {
        EmaarError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for EMAAR operations.
pub type Result<T> = std::result::Result<T, EmaarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EmaarError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EmaarError = io_err.into();
        assert!(matches!(err, EmaarError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
        let err: EmaarError = toml_err.into();
        assert!(matches!(err, EmaarError::Config(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let err: EmaarError = json_err.into();
        assert!(matches!(err, EmaarError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
