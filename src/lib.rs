//! cliplog: watch the system clipboard and keep a timestamped, saveable log of it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::io::{self, BufReader};
use std::sync::mpsc;

use adapters::{
    ArboardClipboardReader, FilesystemHistoryStore, SystemClock, TerminalSurface,
    folder_opener_for,
};
use app::{AppContext, ClipboardLog, HELP_TEXT, event_loop};
use tracing::info;

pub use app::{Flow, PollOutcome, SaveOutcome, UserCommand};
pub use domain::{AppError, LogBuffer, LogEntry, Notice, Platform, Settings, Severity};

/// Watch the clipboard until the user quits.
///
/// Entries and notices go to stdout; commands are read from stdin.
pub fn watch(settings: Settings) -> Result<(), AppError> {
    settings.validate()?;

    let platform = Platform::current();
    info!(%platform, history_dir = %settings.history_dir.display(), "starting clipboard log");

    let ctx = AppContext::new(
        ArboardClipboardReader::new(),
        SystemClock,
        FilesystemHistoryStore::new(&settings.history_dir),
        folder_opener_for(&platform),
    );
    let mut app = ClipboardLog::new(ctx, TerminalSurface::stdout());

    println!(
        "👀 Watching clipboard every {}ms. History folder: {}",
        settings.poll_interval_ms,
        settings.history_dir.display()
    );
    println!("{}", HELP_TEXT);

    let (tx, rx) = mpsc::channel();
    let _input = app::cli::spawn_input_reader(BufReader::new(io::stdin()), tx);
    event_loop::run(&mut app, &rx, settings.poll_interval());

    println!("👋 Stopped watching clipboard");
    Ok(())
}
