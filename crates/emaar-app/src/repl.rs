//! Line commands understood by the terminal front end.

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:quit` / `:q`
    Quit,
    /// `:menu`: toggle the sidebar.
    ToggleMenu,
    /// `:history`: dump the conversation as JSON.
    History,
    /// `?text`: type `text` and show suggestions without sending.
    Preview(String),
    /// `#n`: pick the n-th (1-based) visible suggestion.
    Pick(usize),
    /// Empty line: send whatever is in the input box.
    SendCurrent,
    /// Anything else: type it and send it.
    Send(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            ":quit" | ":q" => return Command::Quit,
            ":menu" => return Command::ToggleMenu,
            ":history" => return Command::History,
            "" => return Command::SendCurrent,
            _ => {}
        }
        if let Some(rest) = line.strip_prefix('?') {
            return Command::Preview(rest.to_string());
        }
        if let Some(n) = line
            .strip_prefix('#')
            .and_then(|rest| rest.trim().parse::<usize>().ok())
        {
            return Command::Pick(n);
        }
        Command::Send(line.to_string())
    }
}
