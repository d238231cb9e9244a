use std::path::PathBuf;

use crate::domain::AppError;

/// Port for the directory of saved history files.
pub trait HistoryStore {
    /// Create the history directory if needed and return its path.
    fn ensure_dir(&self) -> Result<PathBuf, AppError>;

    /// Write `content` to `file_name` inside the history directory.
    ///
    /// Returns the path of the written file.
    fn save(&self, file_name: &str, content: &str) -> Result<PathBuf, AppError>;
}
