//! Home screen implementation
//!
//! Hero section with the animated typed-text role line and the main menu.
//! The typed-text content arrives as snapshots from the cycler task; this
//! screen only renders the latest one.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::widget::TypedTextSnapshot;

/// Entries of the home menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeMenuItem {
    /// Start the tech quiz
    Quiz,
    /// Leave the application
    Quit,
}

impl HomeMenuItem {
    /// All menu entries in display order
    pub fn all() -> Vec<Self> {
        vec![Self::Quiz, Self::Quit]
    }

    /// Display text for the entry
    pub fn display_text(&self) -> &'static str {
        match self {
            Self::Quiz => "Test Your Tech Knowledge",
            Self::Quit => "Quit",
        }
    }
}

/// Home screen component with hero line and menu
#[derive(Debug)]
pub struct HomeScreen {
    items: Vec<HomeMenuItem>,
    selected_index: usize,
    list_state: ListState,
    snapshot: Option<TypedTextSnapshot>,
}

impl HomeScreen {
    /// Create a new home screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            items: HomeMenuItem::all(),
            selected_index: 0,
            list_state,
            snapshot: None,
        }
    }

    /// Store the latest typed-text snapshot for the next render
    pub fn update_snapshot(&mut self, snapshot: TypedTextSnapshot) {
        self.snapshot = Some(snapshot);
    }

    /// Drop the typed-text state, e.g. when its cycler is torn down
    pub fn clear_snapshot(&mut self) {
        self.snapshot = None;
    }

    /// Get the currently selected menu entry
    pub fn selected_item(&self) -> HomeMenuItem {
        self.items[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the home screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title block
                Constraint::Length(3), // Typed-text hero line
                Constraint::Min(8),    // Menu
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_hero_line(f, chunks[1]);
        self.render_menu(f, chunks[2]);
        self.render_help(f, chunks[3]);
    }

    /// Render the title section
    fn render_title(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Main title
                Constraint::Length(2), // Subtitle
            ])
            .split(area);

        let title = Paragraph::new("TERMFOLIO")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Interactive Terminal Portfolio")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    /// Render the typed-text hero line with its blinking cursor block
    fn render_hero_line(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let (text, cursor_visible) = match &self.snapshot {
            Some(snapshot) => (snapshot.text.as_str(), snapshot.cursor_visible),
            None => ("", false),
        };

        let cursor_style = if cursor_visible {
            Style::default().fg(Color::Cyan)
        } else {
            // Reserve the cell so the line doesn't shift while blinking
            Style::default().fg(Color::Reset)
        };

        let line = Line::from(vec![
            Span::raw("I'm a "),
            Span::styled(
                text.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(if cursor_visible { "▌" } else { " " }, cursor_style),
        ]);

        let hero = Paragraph::new(line).alignment(Alignment::Center);
        f.render_widget(hero, area);
    }

    /// Render the main menu
    fn render_menu(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(item.display_text()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    /// Render the help text
    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let help_text = vec![Line::from(vec![
            Span::styled(
                "↑↓",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Navigate  "),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Select  "),
            Span::styled(
                "Q",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        f.render_widget(help, area);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::TypedTextPhase;

    #[test]
    fn test_home_screen_creation() {
        let screen = HomeScreen::new();
        assert_eq!(screen.selected_item(), HomeMenuItem::Quiz);
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let mut screen = HomeScreen::new();

        screen.select_next();
        assert_eq!(screen.selected_item(), HomeMenuItem::Quit);

        screen.select_next();
        assert_eq!(screen.selected_item(), HomeMenuItem::Quiz);

        screen.select_previous();
        assert_eq!(screen.selected_item(), HomeMenuItem::Quit);
    }

    #[test]
    fn test_snapshot_update_and_clear() {
        let mut screen = HomeScreen::new();
        assert!(screen.snapshot.is_none());

        screen.update_snapshot(TypedTextSnapshot {
            text: "Frontend".to_string(),
            cursor_visible: true,
            phase: TypedTextPhase::Typing,
        });
        assert_eq!(screen.snapshot.as_ref().unwrap().text, "Frontend");

        screen.clear_snapshot();
        assert!(screen.snapshot.is_none());
    }
}
