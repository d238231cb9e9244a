pub mod configuration;
pub mod error;
pub mod history;
pub mod log;
pub mod notice;
pub mod platform;

pub use configuration::{Settings, SettingsOverrides, load_settings};
pub use error::AppError;
pub use history::{DEFAULT_HISTORY_DIR, history_file_name};
pub use log::{LogBuffer, LogEntry};
pub use notice::{Notice, Severity};
pub use platform::Platform;
