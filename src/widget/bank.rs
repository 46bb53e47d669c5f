//! Built-in question bank
//!
//! Eight general programming and web-development questions baked into the
//! binary, plus an optional JSON override so the bank can be swapped
//! without recompiling.

use std::fs;
use std::path::Path;

use crate::widget::quiz::QuizQuestion;
use crate::{FolioError, Result};

fn q(
    id: u32,
    question: &str,
    options: [&str; 4],
    correct_answer: usize,
    explanation: &str,
    category: &str,
) -> QuizQuestion {
    QuizQuestion {
        id,
        question: question.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_answer,
        explanation: explanation.to_string(),
        category: category.to_string(),
    }
}

/// The fixed bank the quiz ships with
pub fn default_bank() -> Vec<QuizQuestion> {
    vec![
        q(
            1,
            "What does the 'DOM' stand for in web development?",
            [
                "Data Object Model",
                "Document Object Model",
                "Digital Object Model",
                "Document Oriented Model",
            ],
            1,
            "The DOM (Document Object Model) is a programming interface for web documents \
             that represents the page so programs can change the structure, style, and content.",
            "Web Development",
        ),
        q(
            2,
            "In React, what hook is used to perform side effects?",
            ["useState", "useReducer", "useEffect", "useContext"],
            2,
            "useEffect is the React hook used for performing side effects in functional \
             components, like data fetching, subscriptions, or manually changing the DOM.",
            "React",
        ),
        q(
            3,
            "What is the main purpose of TypeScript?",
            [
                "To replace JavaScript completely",
                "To add static typing to JavaScript",
                "To create server-side applications only",
                "To optimize JavaScript runtime performance",
            ],
            1,
            "TypeScript adds static typing to JavaScript, allowing developers to define types \
             for variables, function parameters, and return values, which can help catch errors \
             during development.",
            "TypeScript",
        ),
        q(
            4,
            "Which of these is NOT a feature of Java?",
            [
                "Platform independence",
                "Automatic memory management",
                "Multiple inheritance of classes",
                "Object-oriented programming",
            ],
            2,
            "Java does not support multiple inheritance of classes to avoid the 'diamond \
             problem'. It uses interfaces to achieve similar functionality.",
            "Java",
        ),
        q(
            5,
            "What is the difference between '==' and '===' in JavaScript?",
            [
                "There is no difference",
                "'==' checks value only, '===' checks value and type",
                "'===' checks value only, '==' checks value and type",
                "'==' is for strings, '===' is for numbers",
            ],
            1,
            "The '==' operator performs type coercion before comparing values, while '===' \
             compares both value and type without type coercion.",
            "JavaScript",
        ),
        q(
            6,
            "What MySQL command is used to retrieve data from a database?",
            ["GET", "FIND", "SELECT", "EXTRACT"],
            2,
            "The SELECT statement is used in MySQL to retrieve data from a database. It's one \
             of the fundamental SQL commands.",
            "Databases",
        ),
        q(
            7,
            "Which CSS property is used to create space between elements' content and their borders?",
            ["margin", "padding", "spacing", "gap"],
            1,
            "Padding in CSS is used to create space between an element's content and its \
             border. Margin creates space outside the border, between elements.",
            "CSS",
        ),
        q(
            8,
            "In Python, what is the correct way to define a function?",
            [
                "function myFunc():",
                "def myFunc():",
                "create myFunc():",
                "func myFunc():",
            ],
            1,
            "In Python, functions are defined using the 'def' keyword followed by the function \
             name and parentheses.",
            "Python",
        ),
    ]
}

/// Load a replacement bank from a JSON file
///
/// The file must contain an array of questions in the same shape as
/// [`QuizQuestion`]. Parse failures surface as configuration errors; there
/// is no silent fallback to the built-in bank.
pub fn load_bank(path: &Path) -> Result<Vec<QuizQuestion>> {
    let content = fs::read_to_string(path).map_err(|e| {
        FolioError::ConfigError(format!(
            "Failed to read question bank {}: {}",
            path.display(),
            e
        ))
    })?;

    let bank: Vec<QuizQuestion> = serde_json::from_str(&content).map_err(|e| {
        FolioError::ConfigError(format!(
            "Failed to parse question bank {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::quiz::{validate_bank, OPTIONS_PER_QUESTION, SESSION_LEN};

    #[test]
    fn test_default_bank_shape() {
        let bank = default_bank();
        assert_eq!(bank.len(), 8);
        validate_bank(&bank, SESSION_LEN).expect("built-in bank must validate");

        let mut ids: Vec<u32> = bank.iter().map(|q| q.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        for question in &bank {
            assert_eq!(question.options.len(), OPTIONS_PER_QUESTION);
            assert!(question.correct_answer < OPTIONS_PER_QUESTION);
            assert!(!question.explanation.is_empty());
            assert!(!question.category.is_empty());
        }
    }

    #[test]
    fn test_load_bank_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");
        let json = serde_json::to_string_pretty(&default_bank()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = load_bank(&path).unwrap();
        assert_eq!(loaded, default_bank());
    }

    #[test]
    fn test_load_bank_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_bank(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(FolioError::ConfigError(_))));
    }

    #[test]
    fn test_load_bank_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_bank(&path), Err(FolioError::ConfigError(_))));
    }
}
