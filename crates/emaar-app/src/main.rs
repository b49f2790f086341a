//! EMAAR assistant binary - composition root.
//!
//! 1. Parse CLI flags and load configuration from TOML
//! 2. Install tracing (stderr, so the screen stays clean)
//! 3. Drive the chat state from stdin lines and re-render after each one

mod cli;
mod repl;
mod view;

use clap::Parser;
use emaar_chat::{Action, AppState, PendingReply};
use emaar_core::config::EmaarConfig;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::CliArgs;
use crate::repl::Command;

/// Wait for a reply and report it.
async fn await_reply(pending: PendingReply) {
    let in_reply_to = pending.in_reply_to();
    match pending.wait().await {
        Some(record) => tracing::debug!(message_id = %record.id, %in_reply_to, "Reply received"),
        None => tracing::warn!(%in_reply_to, "Reply never arrived"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let mut config = EmaarConfig::load_or_default(&config_file);
    config.chat.reply_delay_ms = args.resolve_reply_delay_ms(config.chat.reply_delay_ms);
    let log_level = args.resolve_log_level(&config.general.log_level);

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting EMAAR assistant v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), reply_delay_ms = config.chat.reply_delay_ms, "Configuration resolved");

    let mut state = AppState::new(&config.chat);
    tracing::info!(session_id = %state.store().session_id(), "Session started");
    println!("{}", view::render(&state, &config.profile)?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let pending = match Command::parse(&line) {
            Command::Quit => break,
            Command::ToggleMenu => state.dispatch(Action::ToggleSidebar)?,
            Command::History => {
                println!("{}", serde_json::to_string_pretty(&state.history()?)?);
                continue;
            }
            Command::Preview(text) => state.dispatch(Action::InputChanged(text))?,
            Command::Pick(n) => {
                match state.dispatch(Action::SuggestionSelected(n.saturating_sub(1))) {
                    Ok(pending) => pending,
                    Err(e) => {
                        tracing::warn!(error = %e, "Suggestion not applied");
                        None
                    }
                }
            }
            Command::SendCurrent => state.dispatch(Action::Submit)?,
            Command::Send(text) => {
                state.dispatch(Action::InputChanged(text))?;
                state.dispatch(Action::Submit)?
            }
        };

        if let Some(pending) = pending {
            println!("{}", view::render(&state, &config.profile)?);
            await_reply(pending).await;
        }
        println!("{}", view::render(&state, &config.profile)?);
    }

    tracing::info!("EMAAR assistant exiting");
    Ok(())
}
