//! Commands typed on the terminal.

/// Help line shown at startup and on `help`.
pub const HELP_TEXT: &str = "s/save = save log to history, h/history = open history folder, \
     c/clear = clear log, q/quit = exit";

/// An action requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    Save,
    History,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl UserCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let input = line.trim();
        if input.is_empty() {
            return None;
        }

        let command = match input.to_lowercase().as_str() {
            "s" | "save" => UserCommand::Save,
            "h" | "history" => UserCommand::History,
            "c" | "clear" => UserCommand::Clear,
            "?" | "help" => UserCommand::Help,
            "q" | "quit" | "exit" => UserCommand::Quit,
            _ => UserCommand::Unknown(input.to_string()),
        };
        Some(command)
    }
}
