//! Configuration management module
//!
//! Handles loading, saving, and validation of the widget settings:
//! the typed-text playlist and timings, and the quiz session parameters.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::widget::quiz::{validate_bank, QuizQuestion, SESSION_LEN};
use crate::widget::typed_text::TypedTextConfig;
use crate::widget::{default_bank, load_bank};
use crate::{FolioError, Result, APP_NAME, CONFIG_FILE};

/// Typed-text hero settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypedTextSettings {
    /// Playlist of role strings the hero line cycles through
    pub texts: Vec<String>,
    /// Delay between typed characters in milliseconds
    pub typing_speed_ms: u64,
    /// Delay between deleted characters in milliseconds
    pub deleting_speed_ms: u64,
    /// Pause after a fully typed string in milliseconds
    pub delay_between_texts_ms: u64,
    /// Cursor blink half-period in milliseconds
    pub cursor_blink_ms: u64,
}

impl Default for TypedTextSettings {
    fn default() -> Self {
        Self {
            texts: vec![
                "Computer Science Student".to_string(),
                "Frontend Developer".to_string(),
                "Java Enthusiast".to_string(),
                "Problem Solver".to_string(),
                "Tech Innovator".to_string(),
                "Creative Coder".to_string(),
            ],
            typing_speed_ms: 70,
            deleting_speed_ms: 40,
            delay_between_texts_ms: 1800,
            cursor_blink_ms: 500,
        }
    }
}

/// Quiz settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSettings {
    /// Questions drawn per session
    pub questions_per_session: usize,
    /// Optional JSON file replacing the built-in question bank
    pub bank_path: Option<PathBuf>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            questions_per_session: SESSION_LEN,
            bank_path: None,
        }
    }
}

/// Application configuration covering both widgets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Typed-text hero settings
    pub typed_text: TypedTextSettings,
    /// Quiz settings
    pub quiz: QuizSettings,
}

impl FolioConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the typed-text playlist
    pub fn with_texts(mut self, texts: Vec<String>) -> Self {
        self.typed_text.texts = texts;
        self
    }

    /// Set the typing speed in milliseconds
    pub fn with_typing_speed_ms(mut self, ms: u64) -> Self {
        self.typed_text.typing_speed_ms = ms;
        self
    }

    /// Set the deleting speed in milliseconds
    pub fn with_deleting_speed_ms(mut self, ms: u64) -> Self {
        self.typed_text.deleting_speed_ms = ms;
        self
    }

    /// Set the pause between texts in milliseconds
    pub fn with_delay_between_texts_ms(mut self, ms: u64) -> Self {
        self.typed_text.delay_between_texts_ms = ms;
        self
    }

    /// Set the number of questions per quiz session
    pub fn with_questions_per_session(mut self, count: usize) -> Self {
        self.quiz.questions_per_session = count;
        self
    }

    /// Set a JSON file to load the question bank from
    pub fn with_bank_path(mut self, path: PathBuf) -> Self {
        self.quiz.bank_path = Some(path);
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        // Typed-text invariants are owned by the widget config
        self.typed_text_config().validate()?;

        if self.quiz.questions_per_session == 0 {
            return Err(FolioError::ConfigError(
                "Questions per session must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the runtime typed-text configuration
    pub fn typed_text_config(&self) -> TypedTextConfig {
        TypedTextConfig::new(self.typed_text.texts.clone())
            .with_typing_speed(Duration::from_millis(self.typed_text.typing_speed_ms))
            .with_deleting_speed(Duration::from_millis(self.typed_text.deleting_speed_ms))
            .with_delay_between_texts(Duration::from_millis(
                self.typed_text.delay_between_texts_ms,
            ))
            .with_cursor_blink(Duration::from_millis(self.typed_text.cursor_blink_ms))
    }

    /// Resolve the question bank, honoring `bank_path` when set
    ///
    /// The resolved bank is validated against the configured session length
    /// before it is handed to a session.
    pub fn resolve_bank(&self) -> Result<Vec<QuizQuestion>> {
        let bank = match &self.quiz.bank_path {
            Some(path) => load_bank(path)?,
            None => default_bank(),
        };
        validate_bank(&bank, self.quiz.questions_per_session)?;
        Ok(bank)
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            FolioError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            FolioError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FolioError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            FolioError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        fs::write(&config_path, content).map_err(|e| {
            FolioError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses the platform config directory, e.g. `~/.config/termfolio/termfolio.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            FolioError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = FolioConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.quiz.questions_per_session, SESSION_LEN);
        assert_eq!(config.typed_text.texts.len(), 6);
    }

    #[test]
    fn test_invalid_speeds_are_rejected() {
        let config = FolioConfig::default().with_typing_speed_ms(0);
        assert!(config.validate().is_err());

        let config = FolioConfig::default().with_texts(Vec::new());
        assert!(config.validate().is_err());

        let config = FolioConfig::default().with_questions_per_session(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_serialization() {
        let config = FolioConfig::default()
            .with_typing_speed_ms(30)
            .with_questions_per_session(3);
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: FolioConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");

        assert_eq!(deserialized.typed_text.typing_speed_ms, 30);
        assert_eq!(deserialized.quiz.questions_per_session, 3);
        assert_eq!(deserialized.typed_text.texts, config.typed_text.texts);
    }

    #[test]
    fn test_config_file_path() {
        let path = FolioConfig::config_file_path().unwrap();
        assert!(path.to_string_lossy().contains("termfolio"));
        assert!(path.to_string_lossy().contains("termfolio.toml"));
    }

    #[test]
    fn test_resolve_bank_defaults_to_builtin() {
        let bank = FolioConfig::default().resolve_bank().unwrap();
        assert_eq!(bank.len(), 8);
    }

    #[test]
    fn test_resolve_bank_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");
        let json = serde_json::to_string(&crate::widget::default_bank()).unwrap();
        std::fs::write(&path, json).unwrap();

        let config = FolioConfig::default().with_bank_path(path);
        let bank = config.resolve_bank().unwrap();
        assert_eq!(bank.len(), 8);
    }

    #[test]
    fn test_resolve_bank_too_small_for_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");
        let small: Vec<_> = crate::widget::default_bank().into_iter().take(3).collect();
        std::fs::write(&path, serde_json::to_string(&small).unwrap()).unwrap();

        let config = FolioConfig::default().with_bank_path(path);
        assert!(config.resolve_bank().is_err());
    }
}
