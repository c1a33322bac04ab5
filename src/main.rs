//! Trivia CLI
//!
//! Timed multiple-choice trivia quiz. Every exit path the user can take,
//! including Ctrl+C, ends with status 0.

use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use trivia_cli::{
    console::{Console, Interrupter, LineConsole, TerminalConsole},
    questions,
    session::{Exit, QuizConfig, QuizSession},
};

#[derive(Parser)]
#[command(
    name = "trivia_cli",
    about = "Timed multiple-choice trivia quiz: answer with A, B, C or D before the countdown runs out",
    version
)]
struct Cli {}

/// Whether log lines can go to stderr without breaking the screen
///
/// In raw mode a log line on the same terminal staircases across the quiz,
/// so logging needs stderr redirected (`2>file`) when stdin is a terminal.
fn logging_enabled(stdin_tty: bool, stderr_tty: bool) -> bool {
    !stdin_tty || !stderr_tty
}

/// Route SIGINT into the console so the session can say goodbye
fn play<C: Console>(
    session: &mut QuizSession,
    console: &mut C,
    interrupter: Interrupter,
) -> Result<Exit> {
    ctrlc::set_handler(move || interrupter.interrupt())?;
    session.run(console)
}

fn main() -> Result<()> {
    Cli::parse();

    let stdin_tty = io::stdin().is_terminal();
    if logging_enabled(stdin_tty, io::stderr().is_terminal()) {
        pretty_env_logger::init();
    }

    let questions = questions::builtin();
    let mut session = QuizSession::new(&questions, QuizConfig::default())?;

    // Raw mode needs a real terminal; piped input gets the plain line console
    let exit = if stdin_tty {
        let mut console = TerminalConsole::new()?;
        let interrupter = console.interrupter();
        play(&mut session, &mut console, interrupter)?
    } else {
        let mut console = LineConsole::stdio();
        let interrupter = console.interrupter();
        play(&mut session, &mut console, interrupter)?
    };

    log::debug!("exiting after {exit:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logging_stays_off_the_raw_mode_screen() {
        assert!(!logging_enabled(true, true));
    }

    #[test]
    fn logging_with_redirected_stderr_or_piped_input() {
        assert!(logging_enabled(true, false));
        assert!(logging_enabled(false, true));
        assert!(logging_enabled(false, false));
    }
}
