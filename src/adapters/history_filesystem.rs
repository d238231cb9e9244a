use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::HistoryStore;

/// Filesystem-based history store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct FilesystemHistoryStore {
    dir: PathBuf,
}

impl FilesystemHistoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl HistoryStore for FilesystemHistoryStore {
    fn ensure_dir(&self) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.dir)?;
        Ok(std::path::absolute(&self.dir).unwrap_or_else(|_| self.dir.clone()))
    }

    fn save(&self, file_name: &str, content: &str) -> Result<PathBuf, AppError> {
        let dir = self.ensure_dir()?;
        let path = dir.join(file_name);
        fs::write(&path, content)?;
        Ok(path)
    }
}
