//! Naming rules for saved history files.

use chrono::NaiveDateTime;

/// Default history directory, relative to the working directory.
pub const DEFAULT_HISTORY_DIR: &str = "clip_history";

const FILE_PREFIX: &str = "clip_";
const FILE_EXTENSION: &str = ".txt";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// File name for a snapshot saved at `saved_at`: `clip_YYYYMMDD_HHMMSS.txt`.
pub fn history_file_name(saved_at: NaiveDateTime) -> String {
    format!("{}{}{}", FILE_PREFIX, saved_at.format(STAMP_FORMAT), FILE_EXTENSION)
}
