//! Settings loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::domain::configuration::{Settings, SettingsOverrides};

/// Resolve settings: defaults, then the optional TOML file, then CLI overrides.
pub fn load_settings(
    config_path: Option<&Path>,
    overrides: SettingsOverrides,
) -> Result<Settings, AppError> {
    let base = match config_path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|err| {
                if err.kind() == io::ErrorKind::NotFound {
                    AppError::config_error(format!("Config file not found: {}", path.display()))
                } else {
                    AppError::Io(err)
                }
            })?;
            parse_settings(&content)?
        }
        None => Settings::default(),
    };

    let settings = base.with_overrides(overrides);
    settings.validate()?;
    Ok(settings)
}

/// Parse settings from TOML content.
pub fn parse_settings(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
