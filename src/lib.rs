//! TERMFOLIO - terminal portfolio
//!
//! An interactive terminal rendition of a personal portfolio page:
//! a typed-text hero line that loops through a playlist of roles, and a
//! five-question tech quiz drawn from a built-in question bank.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod simple;
pub mod util;
pub mod widget;

// Common error types
#[derive(Debug)]
pub enum FolioError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Widget construction or lifecycle error
    WidgetError(String),
    /// TUI rendering or interaction error
    TuiError(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::IoError(err) => write!(f, "I/O error: {}", err),
            FolioError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FolioError::WidgetError(msg) => write!(f, "Widget error: {}", msg),
            FolioError::TuiError(msg) => write!(f, "TUI error: {}", msg),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolioError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::IoError(err)
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::ConfigError(format!("JSON parsing error: {}", err))
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for FolioError {
    fn from(err: toml::ser::Error) -> Self {
        FolioError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for termfolio operations
pub type Result<T> = std::result::Result<T, FolioError>;

/// Error handling utilities
pub mod error {
    use super::FolioError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &FolioError) -> String {
        match error {
            FolioError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            FolioError::WidgetError(msg) => {
                format!("Widget error: {}. Restart the application.", msg)
            }
            FolioError::TuiError(_) => {
                "Terminal error. Make sure you are running in an interactive terminal.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "termfolio";
pub const CONFIG_FILE: &str = "termfolio.toml";
