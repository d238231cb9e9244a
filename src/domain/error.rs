use std::io;

use thiserror::Error;

/// Library-wide error type for cliplog operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Clipboard backend could not be created or read.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// The platform file manager failed to open a folder.
    #[error("Failed to open '{path}': {details}")]
    FolderOpenError { path: String, details: String },

    /// No folder-open integration exists for this platform.
    #[error("Opening folders is not supported on platform '{0}'")]
    UnsupportedPlatform(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::UnsupportedPlatform(_) => io::ErrorKind::Unsupported,
            AppError::ClipboardError(_) | AppError::FolderOpenError { .. } => io::ErrorKind::Other,
        }
    }
}
