use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::FolderOpener;

/// Folder opener that records requests instead of launching anything.
#[derive(Default)]
pub struct FakeFolderOpener {
    opened: RefCell<Vec<PathBuf>>,
    failure: Option<String>,
}

impl FakeFolderOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self { opened: RefCell::default(), failure: Some(reason.to_string()) }
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }
}

impl FolderOpener for FakeFolderOpener {
    fn open_folder(&self, path: &Path) -> Result<(), AppError> {
        if let Some(reason) = &self.failure {
            return Err(AppError::FolderOpenError {
                path: path.display().to_string(),
                details: reason.clone(),
            });
        }
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
