use arboard::Clipboard;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::ClipboardReader;

/// Arboard-based clipboard reader.
///
/// The backend is opened lazily and reopened after a failed attempt, so a
/// clipboard that is unavailable at startup only costs skipped reads.
#[derive(Default)]
pub struct ArboardClipboardReader {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboardReader {
    pub fn new() -> Self {
        Self::default()
    }

    fn clipboard(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            let clipboard =
                Clipboard::new().map_err(|e| AppError::ClipboardError(format!("{}", e)))?;
            debug!("clipboard backend opened");
            self.clipboard = Some(clipboard);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| AppError::ClipboardError("clipboard backend unavailable".to_string()))
    }
}

impl ClipboardReader for ArboardClipboardReader {
    fn read_text(&mut self) -> Result<String, AppError> {
        let clipboard = self.clipboard()?;
        clipboard.get_text().map_err(|e| AppError::ClipboardError(format!("{}", e)))
    }
}
