pub mod cli;
pub mod clipboard_log;
mod context;
pub mod event_loop;
pub mod user_command;

pub use clipboard_log::{ClipboardLog, Flow, PollOutcome, SaveOutcome};
pub use context::AppContext;
pub use user_command::{HELP_TEXT, UserCommand};
