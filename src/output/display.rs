//! Screen builders
//!
//! Every screen is built as a list of lines so the session can route it
//! through whichever console is active.

use super::formatters::{create_progress_bar, format_percentage, heavy_rule, light_rule};
use crate::core::{Outcome, Question, Report};
use colored::Colorize;

/// Welcome banner and rules
#[must_use]
pub fn welcome_lines(time_limit: u32) -> Vec<String> {
    vec![
        heavy_rule().bright_cyan().to_string(),
        "🎯 WELCOME TO TRIVIA CLI GAME 🎯".bright_cyan().bold().to_string(),
        heavy_rule().bright_cyan().to_string(),
        String::new(),
        "Rules:".bold().to_string(),
        format!("1. You have {time_limit} seconds to answer each question"),
        "2. Type the letter of your answer (A, B, C, or D)".to_string(),
        "3. Score points for correct answers".to_string(),
        "4. Get explanations for each answer".to_string(),
        String::new(),
        heavy_rule().bright_cyan().to_string(),
    ]
}

/// Question header, text and labeled options
#[must_use]
pub fn question_lines(
    question: &Question,
    index: usize,
    total: usize,
    time_limit: u32,
) -> Vec<String> {
    let mut lines = vec![
        String::new(),
        heavy_rule(),
        format!("Question {} of {total}", index + 1)
            .bright_yellow()
            .bold()
            .to_string(),
        heavy_rule(),
        String::new(),
        question.text().bold().to_string(),
        String::new(),
        "Options:".to_string(),
    ];

    lines.extend(
        question
            .labeled_options()
            .map(|(choice, text)| format!("  {}) {text}", choice.to_string().bright_white().bold())),
    );

    lines.extend([
        String::new(),
        format!("Time limit: {time_limit} seconds"),
        heavy_rule(),
        String::new(),
        "Enter your answer (A/B/C/D):".to_string(),
    ]);

    lines
}

/// Warning shown for anything that is not an answer letter
#[must_use]
pub fn invalid_input_line() -> String {
    format!(
        "\n{}",
        "⚠️  Invalid input! Please enter A, B, C, or D.".yellow()
    )
}

/// Notice shown when the countdown expires
#[must_use]
pub fn timeout_line() -> String {
    format!("\n{}", "⏰ Time's up! Moving to next question...".red().bold())
}

/// Correctness, explanation and running score for a resolved question
#[must_use]
pub fn result_lines(question: &Question, outcome: Outcome, score: u32) -> Vec<String> {
    let mut lines = vec![String::new(), light_rule()];

    if outcome.is_correct() {
        lines.push("✅ CORRECT!".green().bold().to_string());
    } else {
        lines.push("❌ INCORRECT!".red().bold().to_string());
        let submitted = outcome
            .answer()
            .map_or_else(|| "Time's up!".to_string(), |choice| choice.to_string());
        lines.push(format!("Your answer: {submitted}"));
        let correct = question.correct();
        lines.push(format!(
            "Correct answer: {}",
            format!("{correct}) {}", question.option(correct)).green()
        ));
    }

    lines.extend([
        String::new(),
        format!("📚 Explanation: {}", question.explanation()),
        String::new(),
        format!("Current Score: {score} points").bright_cyan().to_string(),
        light_rule(),
    ]);

    lines
}

/// Game over screen with final score, percentage and feedback tier
#[must_use]
pub fn report_lines(report: &Report) -> Vec<String> {
    let percentage = report.percentage();
    let bar = create_progress_bar(f64::from(report.score), f64::from(report.max_score), 30);

    vec![
        String::new(),
        heavy_rule().bright_cyan().to_string(),
        "🎮 GAME OVER! 🎮".bright_cyan().bold().to_string(),
        heavy_rule().bright_cyan().to_string(),
        String::new(),
        format!(
            "Final Score: {} out of {}",
            report.score.to_string().bright_yellow().bold(),
            report.max_score
        ),
        format!(
            "Questions Answered: {} of {}",
            report.answered, report.total
        ),
        format!(
            "Percentage: [{}] {}",
            bar.green(),
            format_percentage(percentage).bright_yellow()
        ),
        String::new(),
        report.tier().to_string().bold().to_string(),
        String::new(),
        heavy_rule().bright_cyan().to_string(),
        "Thanks for playing! 👋".to_string(),
    ]
}

#[must_use]
pub fn ready_prompt() -> String {
    "\nAre you ready to start? (yes/no)".to_string()
}

#[must_use]
pub fn starting_line() -> String {
    format!("\n{}\n", "🎬 Starting game... Good luck!".bright_green())
}

#[must_use]
pub fn declined_line() -> String {
    "\nOkay, maybe next time! 👋".to_string()
}

#[must_use]
pub fn play_again_prompt() -> String {
    "\nWould you like to play again? (yes/no)".to_string()
}

#[must_use]
pub fn goodbye_line() -> String {
    "\nGoodbye! 👋".to_string()
}

#[must_use]
pub fn interrupted_line() -> String {
    "\n\n👋 Thanks for playing! Game interrupted.".to_string()
}
