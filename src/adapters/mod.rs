mod clipboard_arboard;
mod folder_opener_command;
mod history_filesystem;
mod system_clock;
mod terminal_surface;

pub use clipboard_arboard::ArboardClipboardReader;
pub use folder_opener_command::{CommandFolderOpener, UnsupportedFolderOpener, folder_opener_for};
pub use history_filesystem::FilesystemHistoryStore;
pub use system_clock::SystemClock;
pub use terminal_surface::TerminalSurface;
