//! Plain-terminal quiz mode
//!
//! Runs one quiz session over stdin/stdout without the TUI, for terminals
//! where raw mode is unavailable or when piping the session into a script.

use std::io::{self, Write};

use indicatif::ProgressBar;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::FolioConfig;
use crate::widget::quiz::{QuizPhase, QuizSession};
use crate::Result;

/// Ask the user for an option number until a valid one comes in
fn ask_option(option_count: usize) -> Result<usize> {
    loop {
        print!("Your answer (1-{}): ", option_count);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        match input.trim().parse::<usize>() {
            Ok(n) if (1..=option_count).contains(&n) => return Ok(n - 1),
            _ => println!("Please enter a number between 1 and {}.", option_count),
        }
    }
}

/// Run one complete quiz session in line mode
pub fn run_quiz(config: &FolioConfig) -> Result<()> {
    let bank = config.resolve_bank()?;
    let mut session = QuizSession::with_session_len(bank, config.quiz.questions_per_session)?;
    let mut rng = SmallRng::from_entropy();

    println!("Test Your Tech Knowledge");
    println!(
        "This quiz contains {} random questions about programming and web development.\n",
        session.session_len()
    );

    session.start(&mut rng);
    let progress = ProgressBar::new(session.total() as u64);

    while session.phase() == QuizPhase::InProgress {
        let question = match session.current_question() {
            Some(question) => question.clone(),
            None => break,
        };

        println!(
            "\nQuestion {} of {} [{}]",
            session.current_index() + 1,
            session.total(),
            question.category
        );
        println!("{}", question.question);
        for (index, option) in question.options.iter().enumerate() {
            println!("  {}. {}", index + 1, option);
        }

        let choice = ask_option(question.options.len())?;
        match session.select_option(choice) {
            Some(answer) if answer.correct => println!("Correct! {}", question.explanation),
            Some(_) => println!("Incorrect. {}", question.explanation),
            None => {}
        }

        progress.inc(1);
        session.advance();
    }

    progress.finish_and_clear();

    if let Some(summary) = session.summary() {
        println!("\nQuiz Completed!");
        println!("You scored: {} / {}", summary.score, summary.total);
        println!("{}", summary.tier.message());
        let elapsed = std::time::Duration::from_secs(summary.elapsed.as_secs());
        println!("Finished in {}.", humantime::format_duration(elapsed));
    }

    Ok(())
}
