use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::{AppError, Platform};
use crate::ports::FolderOpener;

/// Opens folders by running the platform's file-manager command.
#[derive(Debug, Clone)]
pub struct CommandFolderOpener {
    program: String,
    check_status: bool,
}

impl CommandFolderOpener {
    /// `check_status` is false for launchers whose exit status carries no meaning.
    pub fn new(program: impl Into<String>, check_status: bool) -> Self {
        Self { program: program.into(), check_status }
    }

    /// Command-based opener for `platform`, if it has one.
    pub fn for_platform(platform: &Platform) -> Option<Self> {
        // explorer.exe reports 1 even when the window opened.
        platform
            .folder_open_program()
            .map(|program| Self::new(program, *platform != Platform::Windows))
    }
}

impl FolderOpener for CommandFolderOpener {
    fn open_folder(&self, path: &Path) -> Result<(), AppError> {
        debug!(program = %self.program, path = %path.display(), "opening folder");

        let output = Command::new(&self.program).arg(path).output().map_err(|e| {
            AppError::FolderOpenError {
                path: path.display().to_string(),
                details: format!("failed to run {}: {}", self.program, e),
            }
        })?;

        if self.check_status && !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::FolderOpenError {
                path: path.display().to_string(),
                details: if stderr.is_empty() {
                    format!("{} exited with {}", self.program, output.status)
                } else {
                    stderr
                },
            });
        }

        Ok(())
    }
}

/// Opener for platforms without a known file-manager integration.
#[derive(Debug, Clone)]
pub struct UnsupportedFolderOpener {
    platform: String,
}

impl FolderOpener for UnsupportedFolderOpener {
    fn open_folder(&self, _path: &Path) -> Result<(), AppError> {
        Err(AppError::UnsupportedPlatform(self.platform.clone()))
    }
}

/// Select the folder opener for `platform`.
pub fn folder_opener_for(platform: &Platform) -> Box<dyn FolderOpener> {
    match CommandFolderOpener::for_platform(platform) {
        Some(opener) => Box::new(opener),
        None => Box::new(UnsupportedFolderOpener { platform: platform.to_string() }),
    }
}
