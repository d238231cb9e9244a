//! The clipboard log controller: poller state, log buffer and user actions.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::app::user_command::{HELP_TEXT, UserCommand};
use crate::domain::{AppError, LogBuffer, LogEntry, Notice, history_file_name};
use crate::ports::{ClipboardReader, Clock, FolderOpener, HistoryStore, LogSurface, Notifier};

/// What a single poll observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The clipboard could not be read; the tick was skipped.
    ReadFailed,
    /// Same value as the previous successful read.
    Unchanged,
    /// A new value was observed; `appended` is false for blank text.
    Changed { appended: bool },
}

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing to save; no file was written.
    Empty,
    Saved(PathBuf),
    Failed,
}

/// Whether the event loop should keep running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Single owner of all mutable application state.
pub struct ClipboardLog<C, K, H, O, S>
where
    C: ClipboardReader,
    K: Clock,
    H: HistoryStore,
    O: FolderOpener,
    S: LogSurface + Notifier,
{
    ctx: AppContext<C, K, H, O>,
    surface: S,
    snapshot: String,
    buffer: LogBuffer,
    failure_streak: u32,
}

impl<C, K, H, O, S> ClipboardLog<C, K, H, O, S>
where
    C: ClipboardReader,
    K: Clock,
    H: HistoryStore,
    O: FolderOpener,
    S: LogSurface + Notifier,
{
    pub fn new(ctx: AppContext<C, K, H, O>, surface: S) -> Self {
        Self { ctx, surface, snapshot: String::new(), buffer: LogBuffer::new(), failure_streak: 0 }
    }

    pub fn context(&self) -> &AppContext<C, K, H, O> {
        &self.ctx
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Last observed clipboard value.
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    /// Read the clipboard once and append the value if it changed.
    pub fn poll(&mut self) -> PollOutcome {
        let current = match self.ctx.clipboard_mut().read_text() {
            Ok(text) => text,
            Err(e) => {
                self.failure_streak += 1;
                if self.failure_streak == 1 {
                    warn!("Clipboard access exception: {}", e);
                } else {
                    debug!(streak = self.failure_streak, "clipboard still unreadable: {}", e);
                }
                return PollOutcome::ReadFailed;
            }
        };

        if self.failure_streak > 0 {
            info!(failed_reads = self.failure_streak, "clipboard readable again");
            self.failure_streak = 0;
        }

        if current == self.snapshot {
            return PollOutcome::Unchanged;
        }

        let text = current.trim().to_string();
        self.snapshot = current;
        let appended = !text.is_empty();
        if appended {
            self.append(&text);
        }
        PollOutcome::Changed { appended }
    }

    /// Append `text` with the current time and scroll to it.
    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let entry = LogEntry::new(self.ctx.clock().now().time(), text);
        let record = self.buffer.append(&entry);
        self.surface.append(&record);
        self.surface.scroll_to_end();
        debug!(entries = self.buffer.len(), bytes = text.len(), "clipboard entry appended");
    }

    /// Write the trimmed log to a timestamped history file.
    pub fn save(&mut self) -> SaveOutcome {
        if self.buffer.is_blank() {
            self.surface.notify(Notice::warning("Save failed", "The current content is empty"));
            return SaveOutcome::Empty;
        }

        let file_name = history_file_name(self.ctx.clock().now());
        match self.ctx.history().save(&file_name, self.buffer.trimmed()) {
            Ok(path) => {
                info!(path = %path.display(), entries = self.buffer.len(), "log saved");
                self.surface.notify(Notice::info(
                    "Successfully saved",
                    format!("The file has been saved to:\n{}", path.display()),
                ));
                SaveOutcome::Saved(path)
            }
            Err(e) => {
                warn!("save failed: {}", e);
                self.surface.notify(Notice::error("Save failed", format!("Error:\n{}", e)));
                SaveOutcome::Failed
            }
        }
    }

    /// Empty the log. The clipboard snapshot is kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.surface.clear();
        debug!("log cleared");
    }

    /// Open the history directory in the platform file manager.
    pub fn show_history(&mut self) -> Result<(), AppError> {
        let result =
            self.ctx.history().ensure_dir().and_then(|dir| self.ctx.opener().open_folder(&dir));
        if let Err(e) = &result {
            warn!("opening history folder failed: {}", e);
            self.surface
                .notify(Notice::error("Open failed", format!("Unable to open directory:\n{}", e)));
        }
        result
    }

    /// Dispatch a user command.
    pub fn handle(&mut self, command: UserCommand) -> Flow {
        debug!(?command, "user command");
        match command {
            UserCommand::Save => {
                self.save();
            }
            UserCommand::History => {
                let _ = self.show_history();
            }
            UserCommand::Clear => self.clear(),
            UserCommand::Help => {
                // Shown on the surface only; the saved log never contains it.
                self.surface.append(&format!("{}\n", HELP_TEXT));
                self.surface.scroll_to_end();
            }
            UserCommand::Quit => return Flow::Quit,
            UserCommand::Unknown(input) => self.surface.notify(Notice::warning(
                "Unknown command",
                format!("'{}'. {}", input, HELP_TEXT),
            )),
        }
        Flow::Continue
    }
}
