use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EmaarError, Result};

/// Top-level configuration for the EMAAR assistant.
///
/// Loaded from `~/.emaar/config.toml` by default. Every section is optional
/// and falls back to the built-in mockup values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmaarConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

impl EmaarConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EmaarConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Reject configurations the chat core cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.chat.suggestions.iter().any(|s| s.trim().is_empty()) {
            return Err(EmaarError::Config(
                "chat.suggestions must not contain blank phrases".to_string(),
            ));
        }
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Conversation behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Delay between a submitted message and its synthesized reply.
    pub reply_delay_ms: u64,
    /// Canned phrases offered while the user types, in display order.
    pub suggestions: Vec<String>,
    /// How many catalog entries to show when nothing matches the input.
    pub fallback_suggestions: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            suggestions: default_suggestions(),
            fallback_suggestions: 2,
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

fn default_suggestions() -> Vec<String> {
    [
        "Tell me about EMAAR properties",
        "What are the latest projects?",
        "How can I invest in EMAAR?",
        "Show me floor plans for Dubai Hills Estate",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Signed-in user shown in the header and welcome banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Full name shown in the header.
    pub display_name: String,
    /// Email shown under the name.
    pub email: String,
    /// Name used in the "Hello ..." greeting.
    pub greeting_name: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: "Lama".to_string(),
            email: "lama@example.com".to_string(),
            greeting_name: "Lama".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = EmaarConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.reply_delay_ms, 1000);
        assert_eq!(config.chat.reply_delay(), Duration::from_secs(1));
        assert_eq!(config.chat.suggestions.len(), 4);
        assert_eq!(config.chat.suggestions[0], "Tell me about EMAAR properties");
        assert_eq!(config.chat.fallback_suggestions, 2);
        assert_eq!(config.profile.greeting_name, "Lama");
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[chat]
reply_delay_ms = 250
suggestions = ["Show me Burj Crown", "Payment plans"]
fallback_suggestions = 1

[profile]
display_name = "Test User"
email = "test@example.com"
greeting_name = "Tester"
"#;
        let file = create_temp_config(content);
        let config = EmaarConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.chat.reply_delay_ms, 250);
        assert_eq!(config.chat.suggestions, vec!["Show me Burj Crown", "Payment plans"]);
        assert_eq!(config.chat.fallback_suggestions, 1);
        assert_eq!(config.profile.greeting_name, "Tester");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[chat]
reply_delay_ms = 10
"#;
        let file = create_temp_config(content);
        let config = EmaarConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.reply_delay_ms, 10);
        assert_eq!(config.chat.suggestions.len(), 4);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.profile.display_name, "Lama");
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let file = create_temp_config("[chat\nreply_delay_ms = ");
        let err = EmaarConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, EmaarError::Config(_)));
    }

    #[test]
    fn test_load_rejects_blank_suggestion() {
        let file = create_temp_config("[chat]\nsuggestions = [\"ok\", \"  \"]\n");
        let err = EmaarConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("blank"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = EmaarConfig::load(Path::new("/nonexistent/emaar/config.toml")).unwrap_err();
        assert!(matches!(err, EmaarError::Io(_)));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let config = EmaarConfig::load_or_default(Path::new("/nonexistent/emaar/config.toml"));
        assert_eq!(config.chat.reply_delay_ms, 1000);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = EmaarConfig::default();
        config.chat.reply_delay_ms = 42;
        config.profile.email = "someone@example.com".to_string();
        config.save(&path).unwrap();

        let loaded = EmaarConfig::load(&path).unwrap();
        assert_eq!(loaded.chat.reply_delay_ms, 42);
        assert_eq!(loaded.profile.email, "someone@example.com");
        assert_eq!(loaded.chat.suggestions, config.chat.suggestions);
    }
}
