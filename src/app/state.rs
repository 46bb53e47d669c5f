//! Application state management
//!
//! Handles screen transitions, navigation logic, and keyboard event
//! processing for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Hero screen with the typed-text line and main menu
    Home,
    /// Quiz screen covering intro, questions, and results
    Quiz,
}

impl Default for AppState {
    fn default() -> Self {
        Self::Home
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Pick an answer option directly (1-4)
    Number(usize),
    /// Restart the quiz (r, R)
    Restart,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    previous_state: Option<AppState>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the hero screen
    pub fn new() -> Self {
        Self {
            current_state: AppState::Home,
            previous_state: None,
            should_quit: false,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> &AppState {
        &self.current_state
    }

    /// Get the previous state if available
    pub fn previous_state(&self) -> Option<&AppState> {
        self.previous_state.as_ref()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        if new_state != self.current_state {
            self.previous_state = Some(self.current_state.clone());
            self.current_state = new_state;
        }
    }

    /// Go back to the previous state if available, otherwise go to Home
    pub fn go_back(&mut self) {
        match self.previous_state.take() {
            Some(prev_state) => {
                self.current_state = prev_state;
            }
            None => {
                self.current_state = AppState::Home;
            }
        }
    }

    /// Handle the navigation actions with global meaning
    ///
    /// Quit always quits; Back quits from Home and otherwise returns to the
    /// previous screen. Everything else is screen-specific and left to the
    /// screen components.
    pub fn handle_navigation(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Quit => {
                self.should_quit = true;
            }
            NavigationAction::Back => match self.current_state {
                AppState::Home => {
                    self.should_quit = true;
                }
                _ => {
                    self.go_back();
                }
            },
            _ => {}
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            // Direct answer choice
            KeyCode::Char(c @ '1'..='4') => {
                NavigationAction::Number(c as usize - '1' as usize)
            }

            // Quiz restart
            KeyCode::Char('r') | KeyCode::Char('R') => NavigationAction::Restart,

            _ => NavigationAction::None,
        }
    }

    /// Handle a keyboard event and update state accordingly
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let action = Self::key_to_navigation(key);
        self.handle_navigation(action);
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_state_manager_creation() {
        let state_manager = StateManager::new();
        assert_eq!(*state_manager.current_state(), AppState::Home);
        assert!(!state_manager.should_quit());
        assert!(state_manager.previous_state().is_none());
    }

    #[test]
    fn test_state_transitions() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Quiz);
        assert_eq!(*state_manager.current_state(), AppState::Quiz);
        assert_eq!(state_manager.previous_state(), Some(&AppState::Home));
    }

    #[test]
    fn test_go_back() {
        let mut state_manager = StateManager::new();

        state_manager.transition_to(AppState::Quiz);
        state_manager.go_back();
        assert_eq!(*state_manager.current_state(), AppState::Home);
        assert!(state_manager.previous_state().is_none());

        // Going back with no history stays at Home
        state_manager.go_back();
        assert_eq!(*state_manager.current_state(), AppState::Home);
    }

    #[test]
    fn test_back_from_home_quits() {
        let mut state_manager = StateManager::new();
        state_manager.handle_navigation(NavigationAction::Back);
        assert!(state_manager.should_quit());
    }

    #[test]
    fn test_back_from_quiz_returns_home() {
        let mut state_manager = StateManager::new();
        state_manager.transition_to(AppState::Quiz);
        state_manager.handle_navigation(NavigationAction::Back);
        assert_eq!(*state_manager.current_state(), AppState::Home);
        assert!(!state_manager.should_quit());
    }

    #[test]
    fn test_key_to_navigation() {
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            NavigationAction::Down
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)),
            NavigationAction::Restart
        );
    }

    #[test]
    fn test_digit_keys_map_to_option_indices() {
        for (key, expected) in [('1', 0), ('2', 1), ('3', 2), ('4', 3)] {
            assert_eq!(
                StateManager::key_to_navigation(KeyEvent::new(
                    KeyCode::Char(key),
                    KeyModifiers::NONE
                )),
                NavigationAction::Number(expected)
            );
        }
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE)),
            NavigationAction::None
        );
    }

    #[test]
    fn test_handle_key_event() {
        let mut state_manager = StateManager::new();
        state_manager.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(state_manager.should_quit());
    }
}
