mod clipboard_reader;
mod clock;
mod folder_opener;
mod history_store;
mod log_surface;

pub use clipboard_reader::ClipboardReader;
pub use clock::Clock;
pub use folder_opener::FolderOpener;
pub use history_store::HistoryStore;
pub use log_surface::{LogSurface, Notifier};
