use std::io::{self, IsTerminal, Stdout, Write};

use tracing::warn;

use crate::domain::{Notice, Severity};
use crate::ports::{LogSurface, Notifier};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const CLEARED_MARKER: &str = "--- log cleared ---";

/// Terminal rendering of the log and of user notices.
pub struct TerminalSurface<W: Write> {
    out: W,
    ansi: bool,
}

impl TerminalSurface<Stdout> {
    /// Surface on standard output; the screen is wiped on clear only for a TTY.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let ansi = out.is_terminal();
        Self { out, ansi }
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, ansi: bool) -> Self {
        Self { out, ansi }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            warn!("failed to write to terminal: {}", e);
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!("failed to flush terminal: {}", e);
        }
    }
}

impl<W: Write> LogSurface for TerminalSurface<W> {
    fn append(&mut self, record: &str) {
        self.write(record);
    }

    fn scroll_to_end(&mut self) {
        // The terminal follows its output; flushing puts the record on screen.
        self.flush();
    }

    fn clear(&mut self) {
        if self.ansi {
            self.write(CLEAR_SCREEN);
        } else {
            self.write(&format!("\n{}\n", CLEARED_MARKER));
        }
        self.flush();
    }
}

impl<W: Write> Notifier for TerminalSurface<W> {
    fn notify(&mut self, notice: Notice) {
        let icon = match notice.severity {
            Severity::Info => "✅",
            Severity::Warning => "⚠️ ",
            Severity::Error => "❌",
        };
        self.write(&format!("{} {}: {}\n", icon, notice.title, notice.message));
        self.flush();
    }
}
