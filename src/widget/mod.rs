//! Interactive widget engine module
//!
//! Contains the typed-text cycler state machine and its async timer driver,
//! plus the quiz runner state machine and the built-in question bank.

pub mod bank;
pub mod cycler;
pub mod quiz;
pub mod typed_text;

// Re-export commonly used types
pub use bank::{default_bank, load_bank};
pub use cycler::{Cycler, TypedTextSnapshot};
pub use quiz::{
    draw_questions, Answer, QuizPhase, QuizQuestion, QuizSession, ResultTier, SessionSummary,
};
pub use typed_text::{TypedText, TypedTextConfig, TypedTextPhase};
