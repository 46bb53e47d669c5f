//! Quiz screen implementation
//!
//! Drives one quiz session through its intro, question, and completion
//! cards. The screen owns the session state machine and a small rng for
//! question draws; the engine's no-op guards mean stray key presses can
//! never corrupt a session.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::NavigationAction;
use crate::widget::quiz::{QuizPhase, QuizQuestion, QuizSession};
use crate::Result;

/// Quiz screen component
pub struct QuizScreen {
    session: QuizSession,
    rng: SmallRng,
    /// Option the highlight cursor rests on for the current question
    cursor: usize,
}

impl QuizScreen {
    /// Create a new quiz screen over a validated question bank
    pub fn new(bank: Vec<QuizQuestion>, questions_per_session: usize) -> Result<Self> {
        Ok(Self {
            session: QuizSession::with_session_len(bank, questions_per_session)?,
            rng: SmallRng::from_entropy(),
            cursor: 0,
        })
    }

    /// The underlying session, for status display
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Option index the highlight cursor rests on
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply a navigation action to the current quiz phase
    pub fn handle_navigation(&mut self, action: NavigationAction) {
        match self.session.phase() {
            QuizPhase::NotStarted => {
                if action == NavigationAction::Select {
                    self.start();
                }
            }
            QuizPhase::InProgress => self.handle_question_navigation(action),
            QuizPhase::Completed => {
                if matches!(action, NavigationAction::Restart | NavigationAction::Select) {
                    self.start();
                }
            }
        }
    }

    fn start(&mut self) {
        self.session.restart(&mut self.rng);
        self.cursor = 0;
    }

    fn handle_question_navigation(&mut self, action: NavigationAction) {
        let option_count = match self.session.current_question() {
            Some(question) => question.options.len(),
            None => return,
        };

        if self.session.is_current_answered() {
            // Only advancing makes sense once the answer is locked in
            if action == NavigationAction::Select {
                self.session.advance();
                self.cursor = 0;
            }
            return;
        }

        match action {
            NavigationAction::Up => {
                self.cursor = if self.cursor == 0 {
                    option_count - 1
                } else {
                    self.cursor - 1
                };
            }
            NavigationAction::Down => {
                self.cursor = (self.cursor + 1) % option_count;
            }
            NavigationAction::Select => {
                self.session.select_option(self.cursor);
            }
            NavigationAction::Number(option) => {
                if option < option_count {
                    self.cursor = option;
                    self.session.select_option(option);
                }
            }
            _ => {}
        }
    }

    /// Render the quiz screen for the current phase
    pub fn render(&mut self, f: &mut Frame) {
        match self.session.phase() {
            QuizPhase::NotStarted => self.render_intro(f),
            QuizPhase::InProgress => self.render_question(f),
            QuizPhase::Completed => self.render_completed(f),
        }
    }

    /// Render the pre-session card
    fn render_intro(&self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(6),    // Pitch
                Constraint::Length(3), // Help
            ])
            .split(size);

        let title = Paragraph::new("Ready to Test Your Knowledge?")
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
        f.render_widget(title, chunks[0]);

        let pitch = Paragraph::new(format!(
            "This quiz contains {} random questions about programming and web development. \
             See how many you can answer correctly!",
            self.session.session_len()
        ))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(pitch, chunks[1]);

        self.render_help(f, chunks[2], "Enter Start Quiz  Esc Menu  Q Quit");
    }

    /// Render the active question card
    fn render_question(&self, f: &mut Frame) {
        let question = match self.session.current_question() {
            Some(question) => question,
            None => return,
        };
        let answer = self.session.current_answer();

        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress + score header
                Constraint::Length(4), // Question text
                Constraint::Length(6), // Options
                Constraint::Min(4),    // Explanation
                Constraint::Length(3), // Help
            ])
            .split(size);

        self.render_header(f, chunks[0], question);

        let question_text = Paragraph::new(question.question.clone())
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(question_text, chunks[1]);

        self.render_options(f, chunks[2], question);
        self.render_explanation(f, chunks[3], question);

        let help = if answer.is_some() {
            if self.session.current_index() + 1 < self.session.total() {
                "Enter Next Question  Esc Menu  Q Quit"
            } else {
                "Enter View Results  Esc Menu  Q Quit"
            }
        } else {
            "↑↓ Navigate  1-4 Pick  Enter Answer  Esc Menu"
        };
        self.render_help(f, chunks[4], help);
    }

    /// Render the progress badges above the question
    fn render_header(&self, f: &mut Frame, area: ratatui::layout::Rect, question: &QuizQuestion) {
        let header = Line::from(vec![
            Span::styled(
                format!(
                    "Question {} of {}",
                    self.session.current_index() + 1,
                    self.session.total()
                ),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("   "),
            Span::styled(
                format!("Score: {}", self.session.score()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("   "),
            Span::styled(
                question.category.clone(),
                Style::default().fg(Color::Yellow),
            ),
        ]);

        let widget = Paragraph::new(header)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
    }

    /// Render the four options with selection and correctness markers
    fn render_options(&self, f: &mut Frame, area: ratatui::layout::Rect, question: &QuizQuestion) {
        let answer = self.session.current_answer();
        let mut lines = Vec::new();

        for (index, option) in question.options.iter().enumerate() {
            let marker = match answer {
                Some(_) if index == question.correct_answer => " ✓ ",
                Some(answer) if index == answer.selected => " ✗ ",
                Some(_) => "   ",
                None if index == self.cursor => ">> ",
                None => "   ",
            };

            let style = match answer {
                Some(_) if index == question.correct_answer => Style::default().fg(Color::Green),
                Some(answer) if index == answer.selected => Style::default().fg(Color::Red),
                Some(_) => Style::default().fg(Color::DarkGray),
                None if index == self.cursor => Style::default().bg(Color::Cyan).fg(Color::Black),
                None => Style::default().fg(Color::White),
            };

            lines.push(Line::from(Span::styled(
                format!("{}{}. {}", marker, index + 1, option),
                style,
            )));
        }

        let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(widget, area);
    }

    /// Render the explanation once the question is answered
    fn render_explanation(&self, f: &mut Frame, area: ratatui::layout::Rect, question: &QuizQuestion) {
        let answer = match self.session.current_answer() {
            Some(answer) => answer,
            None => return,
        };

        let (verdict, color) = if answer.correct {
            ("Correct! ", Color::Green)
        } else {
            ("Incorrect. ", Color::Red)
        };

        let text = Line::from(vec![
            Span::styled(verdict, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::raw(question.explanation.clone()),
        ]);

        let widget = Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
        f.render_widget(widget, area);
    }

    /// Render the completion card with score, tier message, and timing
    fn render_completed(&self, f: &mut Frame) {
        let summary = match self.session.summary() {
            Some(summary) => summary,
            None => return,
        };

        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Score
                Constraint::Min(4),    // Tier message and timing
                Constraint::Length(3), // Help
            ])
            .split(size);

        let title = Paragraph::new("Quiz Completed!")
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );
        f.render_widget(title, chunks[0]);

        let score = Paragraph::new(format!("You scored: {} / {}", summary.score, summary.total))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(score, chunks[1]);

        let elapsed = std::time::Duration::from_secs(summary.elapsed.as_secs());
        let detail = vec![
            Line::from(Span::styled(
                summary.tier.message(),
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                format!(
                    "Finished in {} at {}",
                    humantime::format_duration(elapsed),
                    summary.completed_at.format("%H:%M:%S UTC")
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let widget = Paragraph::new(detail)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(widget, chunks[2]);

        self.render_help(f, chunks[3], "R Try Again  Esc Menu  Q Quit");
    }

    /// Render the help footer
    fn render_help(&self, f: &mut Frame, area: ratatui::layout::Rect, text: &str) {
        let help = Paragraph::new(text)
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(help, area);
    }
}
