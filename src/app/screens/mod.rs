//! TUI screen components
//!
//! Contains individual screen implementations for different application states.

pub mod home;
pub mod quiz;

pub use home::{HomeMenuItem, HomeScreen};
pub use quiz::QuizScreen;
