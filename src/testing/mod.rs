mod fake_folder_opener;
mod fixed_clock;
mod mock_clipboard;
mod recording_surface;

pub use fake_folder_opener::FakeFolderOpener;
pub use fixed_clock::FixedClock;
pub use mock_clipboard::{CountingClipboard, FailingClipboard, ScriptedClipboard};
pub use recording_surface::RecordingSurface;
