//! Trivia CLI
//!
//! A timed multiple-choice trivia quiz for the terminal.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trivia_cli::console::LineConsole;
//! use trivia_cli::questions;
//! use trivia_cli::session::{QuizConfig, QuizSession};
//!
//! let questions = questions::builtin();
//! let mut session = QuizSession::new(&questions, QuizConfig::default()).unwrap();
//! let exit = session.run(&mut LineConsole::stdio()).unwrap();
//! println!("{exit:?}");
//! ```

// Core domain types
pub mod core;

// Built-in question list
pub mod questions;

// Session state machine and countdown
pub mod session;

// Terminal input and output
pub mod console;

// Screen text
pub mod output;
