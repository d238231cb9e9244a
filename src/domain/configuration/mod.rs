pub mod loader;
pub mod settings;

pub use loader::{load_settings, parse_settings};
pub use settings::{DEFAULT_POLL_INTERVAL_MS, Settings, SettingsOverrides};
