//! Plain-text rendering of the chat screen.

use emaar_chat::{AppState, ChatError, MessageRecord, ResponsePayload, ViewMode};
use emaar_core::config::ProfileConfig;

const BRAND: &str = "EMAAR";
const RULE: &str = "------------------------------------------------------------";

/// Render the whole screen for the current state.
pub fn render(state: &AppState, profile: &ProfileConfig) -> Result<String, ChatError> {
    let mut lines = Vec::new();

    if state.sidebar_open() {
        lines.push("[EM] (:menu to hide)".to_string());
        lines.push("Projects".to_string());
        lines.push("  + New Project".to_string());
        lines.push(RULE.to_string());
    }

    let menu = if state.menu_button_visible() { "[=] " } else { "" };
    lines.push(format!("{}{}    {} <{}>", menu, BRAND, profile.display_name, profile.email));
    lines.push(RULE.to_string());

    match state.view_mode()? {
        ViewMode::Welcome => {
            lines.push(format!("Hello {}", profile.greeting_name));
            lines.push("How can I help you today?".to_string());
        }
        ViewMode::Conversation => {
            for record in state.history()? {
                lines.push(render_message(&record));
            }
        }
    }

    lines.push(String::new());
    if !state.suggestions().is_empty() {
        for (i, s) in state.suggestions().iter().enumerate() {
            lines.push(format!("  #{} {}", i + 1, s));
        }
    }
    if state.input().is_empty() {
        lines.push("> Ask Something...".to_string());
    } else {
        lines.push(format!("> {}", state.input()));
    }

    lines.push(RULE.to_string());
    lines.push(format!("(c) 2025 {} AI. Terms of Use - Privacy Policy", BRAND));
    Ok(lines.join("\n"))
}

/// Render one message bubble, including structured content when present.
pub fn render_message(record: &MessageRecord) -> String {
    let who = if record.is_user() { "You" } else { BRAND };
    let mut out = format!("[{} {}] {}: {}", record.date(), record.time(), who, record.text);
    if let Some(ref payload) = record.structured_content {
        out.push('\n');
        out.push_str(&render_payload(payload));
    }
    out
}

/// Render a structured reply as a numbered list.
pub fn render_payload(payload: &ResponsePayload) -> String {
    let mut lines = vec![format!("  {}", payload.title)];
    for section in &payload.sections {
        lines.push(format!("  {}. {}", section.number, section.title));
        for detail in &section.details {
            lines.push(format!("     - {}", detail));
        }
    }
    lines.join("\n")
}
