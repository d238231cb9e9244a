use crate::domain::AppError;

/// Port for reading the system clipboard.
pub trait ClipboardReader {
    /// Read the current clipboard text.
    ///
    /// Non-text content and an inaccessible clipboard are both errors.
    fn read_text(&mut self) -> Result<String, AppError>;
}
