//! Host platform detection.

use std::fmt;

/// Operating system family, as far as folder opening is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and the free Unix systems that ship `xdg-open`.
    Linux,
    Unsupported(String),
}

impl Platform {
    /// Detect the platform this binary was built for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` identifier.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" | "illumos" | "solaris" => {
                Platform::Linux
            }
            other => Platform::Unsupported(other.to_string()),
        }
    }

    /// Program that opens a directory in the native file manager.
    pub fn folder_open_program(&self) -> Option<&'static str> {
        match self {
            Platform::Windows => Some("explorer"),
            Platform::MacOs => Some("open"),
            Platform::Linux => Some("xdg-open"),
            Platform::Unsupported(_) => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::MacOs => write!(f, "macos"),
            Platform::Linux => write!(f, "linux"),
            Platform::Unsupported(name) => write!(f, "{}", name),
        }
    }
}
