//! Typed-text cycler state machine
//!
//! Types and deletes strings from a fixed playlist forever, mimicking a
//! human typing at the keyboard. The machine itself is pure and synchronous:
//! every call to [`TypedText::tick`] advances exactly one step and reports
//! how long the caller should wait before the next one. Timer scheduling
//! lives in [`crate::widget::cycler`].

use std::time::Duration;

use crate::util::text::{char_len, char_prefix};
use crate::{FolioError, Result};

/// Configuration for a typed-text cycler instance
#[derive(Debug, Clone)]
pub struct TypedTextConfig {
    /// Ordered playlist of strings to type and delete
    texts: Vec<String>,
    /// Delay between keystrokes while typing
    typing_speed: Duration,
    /// Delay between deletions while erasing
    deleting_speed: Duration,
    /// Pause after a string is fully typed, before deletion starts
    delay_between_texts: Duration,
    /// Cursor blink half-period
    cursor_blink: Duration,
}

impl TypedTextConfig {
    /// Create a configuration with the default animation timings
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts,
            typing_speed: Duration::from_millis(80),
            deleting_speed: Duration::from_millis(50),
            delay_between_texts: Duration::from_millis(1500),
            cursor_blink: Duration::from_millis(500),
        }
    }

    /// Set the delay between typed characters
    pub fn with_typing_speed(mut self, speed: Duration) -> Self {
        self.typing_speed = speed;
        self
    }

    /// Set the delay between deleted characters
    pub fn with_deleting_speed(mut self, speed: Duration) -> Self {
        self.deleting_speed = speed;
        self
    }

    /// Set the pause after a fully typed string
    pub fn with_delay_between_texts(mut self, delay: Duration) -> Self {
        self.delay_between_texts = delay;
        self
    }

    /// Set the cursor blink half-period
    pub fn with_cursor_blink(mut self, blink: Duration) -> Self {
        self.cursor_blink = blink;
        self
    }

    /// Validate the configuration parameters
    ///
    /// An empty playlist or a zero duration is a configuration error, not a
    /// silent default.
    pub fn validate(&self) -> Result<()> {
        if self.texts.is_empty() {
            return Err(FolioError::ConfigError(
                "Typed-text playlist must contain at least one string".to_string(),
            ));
        }

        if self.typing_speed.is_zero() {
            return Err(FolioError::ConfigError(
                "Typing speed must be greater than 0".to_string(),
            ));
        }

        if self.deleting_speed.is_zero() {
            return Err(FolioError::ConfigError(
                "Deleting speed must be greater than 0".to_string(),
            ));
        }

        if self.delay_between_texts.is_zero() {
            return Err(FolioError::ConfigError(
                "Delay between texts must be greater than 0".to_string(),
            ));
        }

        if self.cursor_blink.is_zero() {
            return Err(FolioError::ConfigError(
                "Cursor blink period must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Playlist of strings the cycler loops through
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Delay between typed characters
    pub fn typing_speed(&self) -> Duration {
        self.typing_speed
    }

    /// Delay between deleted characters
    pub fn deleting_speed(&self) -> Duration {
        self.deleting_speed
    }

    /// Pause after a fully typed string
    pub fn delay_between_texts(&self) -> Duration {
        self.delay_between_texts
    }

    /// Cursor blink half-period
    pub fn cursor_blink(&self) -> Duration {
        self.cursor_blink
    }
}

/// Discrete phase of the typed-text state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedTextPhase {
    /// Extending the displayed prefix one character per tick
    Typing,
    /// Holding the fully typed string before deletion
    Paused,
    /// Shortening the displayed prefix one character per tick
    Deleting,
}

/// Typed-text cycler state machine
///
/// Owns the mutable animation state exclusively. Created at widget mount,
/// dropped at unmount; the only mutation path is [`TypedText::tick`].
#[derive(Debug)]
pub struct TypedText {
    config: TypedTextConfig,
    text_index: usize,
    prefix_chars: usize,
    phase: TypedTextPhase,
}

impl TypedText {
    /// Create a new machine from a validated configuration
    pub fn new(config: TypedTextConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            text_index: 0,
            prefix_chars: 0,
            phase: TypedTextPhase::Typing,
        })
    }

    /// Advance the machine one step and return the delay until the next tick
    ///
    /// Phase transitions:
    /// - Typing extends the prefix until it matches the target, then moves
    ///   to Paused with the configured between-texts delay.
    /// - Paused performs a single delayed hand-off to Deleting without
    ///   touching the prefix.
    /// - Deleting shortens the prefix one character per tick; the tick that
    ///   empties it also wraps the playlist index and returns to Typing. A
    ///   one-string playlist keeps cycling rather than freezing.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            TypedTextPhase::Typing => {
                if self.prefix_chars < self.target_chars() {
                    self.prefix_chars += 1;
                    self.config.typing_speed
                } else {
                    self.phase = TypedTextPhase::Paused;
                    self.config.delay_between_texts
                }
            }
            TypedTextPhase::Paused => {
                self.phase = TypedTextPhase::Deleting;
                self.config.deleting_speed
            }
            TypedTextPhase::Deleting => {
                if self.prefix_chars > 0 {
                    self.prefix_chars -= 1;
                }
                if self.prefix_chars == 0 {
                    self.text_index = (self.text_index + 1) % self.config.texts.len();
                    self.phase = TypedTextPhase::Typing;
                    self.config.typing_speed
                } else {
                    self.config.deleting_speed
                }
            }
        }
    }

    /// Currently displayed prefix of the target string
    pub fn display(&self) -> &str {
        char_prefix(self.target(), self.prefix_chars)
    }

    /// The playlist entry currently being typed or deleted
    pub fn target(&self) -> &str {
        &self.config.texts[self.text_index]
    }

    /// Index of the current playlist entry
    pub fn text_index(&self) -> usize {
        self.text_index
    }

    /// Current phase of the machine
    pub fn phase(&self) -> TypedTextPhase {
        self.phase
    }

    /// Configuration the machine was built with
    pub fn config(&self) -> &TypedTextConfig {
        &self.config
    }

    fn target_chars(&self) -> usize {
        char_len(self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(texts: &[&str]) -> TypedTextConfig {
        TypedTextConfig::new(texts.iter().map(|s| s.to_string()).collect())
            .with_typing_speed(Duration::from_millis(10))
            .with_deleting_speed(Duration::from_millis(10))
            .with_delay_between_texts(Duration::from_millis(50))
    }

    #[test]
    fn test_rejects_empty_playlist() {
        let result = TypedText::new(TypedTextConfig::new(Vec::new()));
        assert!(matches!(result, Err(FolioError::ConfigError(_))));
    }

    #[test]
    fn test_rejects_zero_speeds() {
        let base = config(&["Hi"]);

        let result = TypedText::new(base.clone().with_typing_speed(Duration::ZERO));
        assert!(matches!(result, Err(FolioError::ConfigError(_))));

        let result = TypedText::new(base.clone().with_deleting_speed(Duration::ZERO));
        assert!(matches!(result, Err(FolioError::ConfigError(_))));

        let result = TypedText::new(base.clone().with_delay_between_texts(Duration::ZERO));
        assert!(matches!(result, Err(FolioError::ConfigError(_))));

        let result = TypedText::new(base.with_cursor_blink(Duration::ZERO));
        assert!(matches!(result, Err(FolioError::ConfigError(_))));
    }

    #[test]
    fn test_full_cycle_for_single_text() {
        let mut machine = TypedText::new(config(&["Hi"])).unwrap();
        assert_eq!(machine.display(), "");
        assert_eq!(machine.phase(), TypedTextPhase::Typing);

        // Typing: one character per tick at typing speed
        assert_eq!(machine.tick(), Duration::from_millis(10));
        assert_eq!(machine.display(), "H");
        assert_eq!(machine.tick(), Duration::from_millis(10));
        assert_eq!(machine.display(), "Hi");
        assert_eq!(machine.phase(), TypedTextPhase::Typing);

        // Completion tick: pause exactly once before deleting begins
        assert_eq!(machine.tick(), Duration::from_millis(50));
        assert_eq!(machine.phase(), TypedTextPhase::Paused);
        assert_eq!(machine.display(), "Hi");

        // Pause hand-off does not mutate the prefix
        assert_eq!(machine.tick(), Duration::from_millis(10));
        assert_eq!(machine.phase(), TypedTextPhase::Deleting);
        assert_eq!(machine.display(), "Hi");

        // Deleting: one character per tick at deleting speed
        machine.tick();
        assert_eq!(machine.display(), "H");

        // The tick that empties the prefix wraps the playlist and resumes
        // typing; a single-entry playlist cycles instead of freezing
        assert_eq!(machine.tick(), Duration::from_millis(10));
        assert_eq!(machine.display(), "");
        assert_eq!(machine.phase(), TypedTextPhase::Typing);
        assert_eq!(machine.text_index(), 0);

        machine.tick();
        assert_eq!(machine.display(), "H");
        machine.tick();
        assert_eq!(machine.display(), "Hi");
    }

    #[test]
    fn test_visits_playlist_in_index_order() {
        let mut machine = TypedText::new(config(&["ab", "c", "de"])).unwrap();
        let mut visited = Vec::new();
        let mut last_index = usize::MAX;

        for _ in 0..200 {
            if machine.text_index() != last_index {
                last_index = machine.text_index();
                visited.push(last_index);
            }
            machine.tick();
        }

        assert!(visited.len() >= 6);
        for (i, index) in visited.iter().enumerate() {
            assert_eq!(*index, i % 3);
        }
    }

    #[test]
    fn test_prefix_stays_within_target_bounds() {
        let mut machine = TypedText::new(config(&["héllo", "", "ok"])).unwrap();
        for _ in 0..500 {
            let display_chars = machine.display().chars().count();
            let target_chars = machine.target().chars().count();
            assert!(display_chars <= target_chars);
            machine.tick();
        }
    }

    #[test]
    fn test_typing_grows_prefix_by_one_per_tick() {
        let mut machine = TypedText::new(config(&["rust"])).unwrap();
        let mut previous = 0;
        while machine.phase() == TypedTextPhase::Typing {
            machine.tick();
            let current = machine.display().chars().count();
            if machine.phase() == TypedTextPhase::Typing {
                assert_eq!(current, previous + 1);
            }
            previous = current;
        }
        assert_eq!(machine.display(), "rust");
        assert_eq!(machine.phase(), TypedTextPhase::Paused);
    }

    #[test]
    fn test_multibyte_targets_are_sliced_on_char_boundaries() {
        let mut machine = TypedText::new(config(&["héllo"])).unwrap();
        machine.tick();
        assert_eq!(machine.display(), "h");
        machine.tick();
        assert_eq!(machine.display(), "hé");
        machine.tick();
        assert_eq!(machine.display(), "hél");
    }
}
