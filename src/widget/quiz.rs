//! Quiz runner state machine
//!
//! Runs one quiz session from question selection through scoring. Every
//! operation completes synchronously; the host invokes them in response to
//! user gestures and renders from the read-only accessors. Precondition
//! violations (answering twice, advancing early) are defined as no-ops so
//! the engine stays correct even when the host forgets to disable controls.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{FolioError, Result};

/// Number of questions drawn for a standard session
pub const SESSION_LEN: usize = 5;

/// Number of answer options every question carries
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Stable identifier within the bank
    pub id: u32,
    /// Question text
    pub question: String,
    /// Ordered answer options, exactly four
    pub options: Vec<String>,
    /// Index of the correct option
    pub correct_answer: usize,
    /// Explanation shown after the question is answered
    pub explanation: String,
    /// Topic label
    pub category: String,
}

/// Overall phase of a quiz session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Session created but not started
    NotStarted,
    /// Questions are being presented
    InProgress,
    /// All questions answered and advanced past
    Completed,
}

/// Recorded answer for one question
///
/// Immutable once recorded until the session restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    /// Option index the user selected
    pub selected: usize,
    /// Whether the selection matched the correct option
    pub correct: bool,
}

/// Feedback tier for a completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultTier {
    /// Every question answered correctly
    Perfect,
    /// At least half of the questions answered correctly
    Solid,
    /// Fewer than half answered correctly
    Practice,
}

impl ResultTier {
    /// Classify a final score
    ///
    /// The half-way boundary rounds up: 3 of 5 is enough for [`Solid`].
    ///
    /// [`Solid`]: ResultTier::Solid
    pub fn for_score(score: usize, total: usize) -> Self {
        if total > 0 && score == total {
            ResultTier::Perfect
        } else if score >= (total + 1) / 2 {
            ResultTier::Solid
        } else {
            ResultTier::Practice
        }
    }

    /// Feedback message shown with the final score
    pub fn message(&self) -> &'static str {
        match self {
            ResultTier::Perfect => "Perfect score! You're a tech genius!",
            ResultTier::Solid => "Good job! You know your stuff!",
            ResultTier::Practice => "Keep learning! Practice makes perfect!",
        }
    }
}

/// Result of a completed session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// When the last question was advanced past
    pub completed_at: DateTime<Utc>,
    /// Questions answered correctly
    pub score: usize,
    /// Questions in the session
    pub total: usize,
    /// Feedback tier for the score
    pub tier: ResultTier,
    /// Wall-clock time from start to completion
    pub elapsed: Duration,
}

/// Validate a question bank against a session length
pub fn validate_bank(bank: &[QuizQuestion], session_len: usize) -> Result<()> {
    if session_len == 0 {
        return Err(FolioError::ConfigError(
            "Session length must be greater than 0".to_string(),
        ));
    }

    if bank.len() < session_len {
        return Err(FolioError::ConfigError(format!(
            "Question bank has {} questions but a session needs {}",
            bank.len(),
            session_len
        )));
    }

    for question in bank {
        if question.options.len() != OPTIONS_PER_QUESTION {
            return Err(FolioError::ConfigError(format!(
                "Question {} must have exactly {} options, found {}",
                question.id,
                OPTIONS_PER_QUESTION,
                question.options.len()
            )));
        }
        if question.correct_answer >= question.options.len() {
            return Err(FolioError::ConfigError(format!(
                "Question {} marks option {} correct but only has {} options",
                question.id,
                question.correct_answer,
                question.options.len()
            )));
        }
    }

    Ok(())
}

/// Draw `count` distinct questions from the bank
///
/// Performs an unbiased Fisher-Yates shuffle of the whole bank through the
/// caller-supplied random source and takes the prefix, so a seeded rng
/// produces a reproducible draw.
pub fn draw_questions<R: Rng>(bank: &[QuizQuestion], count: usize, rng: &mut R) -> Vec<QuizQuestion> {
    let mut shuffled: Vec<QuizQuestion> = bank.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Quiz session state machine
///
/// Owns the per-session mutable state exclusively. The bank itself is fixed
/// for the lifetime of the session object; `start`/`restart` only redraw the
/// working subset.
#[derive(Debug)]
pub struct QuizSession {
    bank: Vec<QuizQuestion>,
    session_len: usize,
    questions: Vec<QuizQuestion>,
    answers: Vec<Option<Answer>>,
    current: usize,
    score: usize,
    phase: QuizPhase,
    started_at: Option<Instant>,
    summary: Option<SessionSummary>,
}

impl QuizSession {
    /// Create a session over a bank, drawing [`SESSION_LEN`] questions per run
    pub fn new(bank: Vec<QuizQuestion>) -> Result<Self> {
        Self::with_session_len(bank, SESSION_LEN)
    }

    /// Create a session drawing a custom number of questions per run
    pub fn with_session_len(bank: Vec<QuizQuestion>, session_len: usize) -> Result<Self> {
        validate_bank(&bank, session_len)?;
        Ok(Self {
            bank,
            session_len,
            questions: Vec::new(),
            answers: Vec::new(),
            current: 0,
            score: 0,
            phase: QuizPhase::NotStarted,
            started_at: None,
            summary: None,
        })
    }

    /// Start a run: draw questions, reset score and pointer
    pub fn start<R: Rng>(&mut self, rng: &mut R) {
        self.questions = draw_questions(&self.bank, self.session_len, rng);
        self.answers = vec![None; self.questions.len()];
        self.current = 0;
        self.score = 0;
        self.phase = QuizPhase::InProgress;
        self.started_at = Some(Instant::now());
        self.summary = None;
        debug!(questions = self.questions.len(), "quiz session started");
    }

    /// Record an answer for the current question
    ///
    /// Valid only while the session is in progress and the current question
    /// is unanswered; otherwise (including an out-of-range option index)
    /// the call is a no-op and returns `None`. The first recorded selection
    /// is final until restart, so repeated calls can never double-count the
    /// score.
    pub fn select_option(&mut self, option: usize) -> Option<Answer> {
        if self.phase != QuizPhase::InProgress {
            return None;
        }
        let question = &self.questions[self.current];
        if option >= question.options.len() {
            return None;
        }
        if self.answers[self.current].is_some() {
            return None;
        }

        let answer = Answer {
            selected: option,
            correct: option == question.correct_answer,
        };
        if answer.correct {
            self.score += 1;
        }
        self.answers[self.current] = Some(answer);
        Some(answer)
    }

    /// Move to the next question, or complete the session on the last one
    ///
    /// Valid only once the current question is answered; otherwise a no-op.
    pub fn advance(&mut self) {
        if self.phase != QuizPhase::InProgress {
            return;
        }
        if self.answers[self.current].is_none() {
            return;
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
        } else {
            self.phase = QuizPhase::Completed;
            let elapsed = self
                .started_at
                .map(|t| t.elapsed())
                .unwrap_or(Duration::ZERO);
            let total = self.questions.len();
            self.summary = Some(SessionSummary {
                completed_at: Utc::now(),
                score: self.score,
                total,
                tier: ResultTier::for_score(self.score, total),
                elapsed,
            });
            debug!(score = self.score, total, "quiz session completed");
        }
    }

    /// Discard the session state and start a fresh run
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        self.start(rng);
    }

    /// Overall session phase
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Questions answered correctly so far
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of questions in the current run
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions a run draws from the bank
    pub fn session_len(&self) -> usize {
        self.session_len
    }

    /// Zero-based pointer to the current question
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question currently presented, if a run is active
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.phase == QuizPhase::InProgress {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    /// Recorded answer for the current question
    pub fn current_answer(&self) -> Option<Answer> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Per-question answer states for the current run
    pub fn answers(&self) -> &[Option<Answer>] {
        &self.answers
    }

    /// Whether the current question has been answered
    pub fn is_current_answered(&self) -> bool {
        self.current_answer().is_some()
    }

    /// Feedback tier, available once the session is completed
    pub fn result_tier(&self) -> Option<ResultTier> {
        self.summary.as_ref().map(|s| s.tier)
    }

    /// Completion summary, available once the session is completed
    pub fn summary(&self) -> Option<&SessionSummary> {
        self.summary.as_ref()
    }
}
