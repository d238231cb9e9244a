use std::path::Path;

use crate::domain::AppError;

/// Port for revealing a directory in the platform file manager.
pub trait FolderOpener {
    fn open_folder(&self, path: &Path) -> Result<(), AppError>;
}

impl<T: FolderOpener + ?Sized> FolderOpener for Box<T> {
    fn open_folder(&self, path: &Path) -> Result<(), AppError> {
        (**self).open_folder(path)
    }
}
