//! Main application controller
//!
//! Manages the TUI, application state, and screen rendering loop. The
//! typed-text cycler is mounted together with the home screen and torn
//! down whenever that screen goes away, so no timer can outlive the state
//! it animates.

use std::io;

use tokio::sync::mpsc;

use crate::{
    app::{
        screens::{HomeMenuItem, HomeScreen, QuizScreen},
        state::{AppState, NavigationAction, StateManager},
        tui::Tui,
    },
    config::FolioConfig,
    widget::{Cycler, TypedTextSnapshot},
    Result,
};

/// Capacity of the snapshot channel between the cycler task and the UI loop
const SNAPSHOT_CHANNEL_SIZE: usize = 64;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application state manager
    state_manager: StateManager,
    /// Application config
    config: FolioConfig,
    /// Screen components
    home_screen: HomeScreen,
    quiz_screen: QuizScreen,
    /// Typed-text cycler, alive only while the home screen is mounted
    cycler: Option<Cycler>,
    /// Snapshot receiver paired with the running cycler
    snapshot_rx: Option<mpsc::Receiver<TypedTextSnapshot>>,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        let config = FolioConfig::load()?;
        let bank = config.resolve_bank()?;
        let quiz_screen = QuizScreen::new(bank, config.quiz.questions_per_session)?;

        Ok(Self {
            tui: Tui::new()?,
            state_manager: StateManager::new(),
            config,
            home_screen: HomeScreen::new(),
            quiz_screen,
            cycler: None,
            snapshot_rx: None,
        })
    }

    /// Initialize the terminal and mount the home screen widgets
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        self.mount_cycler()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.drain_snapshots();
            self.draw()?;
            self.handle_events()?;
        }

        // Teardown must invalidate any pending cycler tick
        self.unmount_cycler();
        self.tui.restore()?;
        Ok(())
    }

    /// Spawn a cycler for the home screen hero line
    fn mount_cycler(&mut self) -> Result<()> {
        let (tx, rx) = mpsc::channel(SNAPSHOT_CHANNEL_SIZE);
        let cycler = Cycler::spawn(self.config.typed_text_config(), tx)?;
        self.cycler = Some(cycler);
        self.snapshot_rx = Some(rx);
        Ok(())
    }

    /// Cancel the cycler and drop its channel
    fn unmount_cycler(&mut self) {
        if let Some(mut cycler) = self.cycler.take() {
            cycler.cancel();
        }
        self.snapshot_rx = None;
        self.home_screen.clear_snapshot();
    }

    /// Forward pending cycler snapshots to the home screen
    fn drain_snapshots(&mut self) {
        if let Some(rx) = &mut self.snapshot_rx {
            while let Ok(snapshot) = rx.try_recv() {
                self.home_screen.update_snapshot(snapshot);
            }
        }
    }

    /// Draw the current screen
    fn draw(&mut self) -> io::Result<()> {
        let state = self.state_manager.current_state().clone();
        let home_screen = &mut self.home_screen;
        let quiz_screen = &mut self.quiz_screen;

        self.tui.draw(|f| match state {
            AppState::Home => home_screen.render(f),
            AppState::Quiz => quiz_screen.render(f),
        })
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.handle_events()? {
            let action = StateManager::key_to_navigation(key);

            // Global key handling
            if action == NavigationAction::Quit {
                self.state_manager.quit();
                return Ok(());
            }

            match self.state_manager.current_state().clone() {
                AppState::Home => self.handle_home_events(action)?,
                AppState::Quiz => self.handle_quiz_events(action)?,
            }
        }
        Ok(())
    }

    fn handle_home_events(&mut self, action: NavigationAction) -> Result<()> {
        match action {
            NavigationAction::Up => self.home_screen.select_previous(),
            NavigationAction::Down => self.home_screen.select_next(),
            NavigationAction::Select => match self.home_screen.selected_item() {
                HomeMenuItem::Quiz => {
                    // The hero widget unmounts with its screen
                    self.unmount_cycler();
                    self.state_manager.transition_to(AppState::Quiz);
                }
                HomeMenuItem::Quit => self.state_manager.quit(),
            },
            NavigationAction::Back => self.state_manager.quit(),
            _ => {}
        }
        Ok(())
    }

    fn handle_quiz_events(&mut self, action: NavigationAction) -> Result<()> {
        match action {
            NavigationAction::Back => {
                self.state_manager.go_back();
                self.mount_cycler()?;
            }
            _ => self.quiz_screen.handle_navigation(action),
        }
        Ok(())
    }
}
