//! Console collaborators
//!
//! The session only talks to the user through the [`Console`] trait:
//! printing lines, redrawing a single status line in place, and waiting
//! for a line of input with an optional bound.

mod line;
mod terminal;

pub use line::LineConsole;
pub use terminal::TerminalConsole;

use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Result of waiting for user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A full line was submitted
    Line(String),
    /// The wait elapsed without a submitted line
    Idle,
    /// The user asked to abort (Ctrl+C)
    Interrupted,
    /// No further input will ever arrive
    Closed,
}

/// Message on a [`LineConsole`] input channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Feed {
    Line(String),
    Interrupt,
    Eof,
}

/// Wakes a console out of a blocking wait with [`Input::Interrupted`]
///
/// Cloneable and `Send`, so it can be moved into a signal handler.
#[derive(Debug, Clone)]
pub struct Interrupter(Target);

#[derive(Debug, Clone)]
enum Target {
    Flag(Arc<AtomicBool>),
    Channel(Sender<Feed>),
}

impl Interrupter {
    pub(crate) const fn flag(flag: Arc<AtomicBool>) -> Self {
        Self(Target::Flag(flag))
    }

    pub(crate) const fn channel(tx: Sender<Feed>) -> Self {
        Self(Target::Channel(tx))
    }

    /// Ask the console to report an interrupt from its current or next wait
    pub fn interrupt(&self) {
        match &self.0 {
            Target::Flag(flag) => flag.store(true, Ordering::SeqCst),
            Target::Channel(tx) => {
                // The console is gone, nothing left to wake
                let _ = tx.send(Feed::Interrupt);
            }
        }
    }
}

/// Everything the quiz needs from a terminal
pub trait Console {
    /// Print one line of text below any status line
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn print_line(&mut self, text: &str) -> Result<()>;

    /// Replace the status line in place (countdown and prompt)
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn show_status(&mut self, text: &str) -> Result<()>;

    /// Wait for a submitted line
    ///
    /// With `Some(wait)` returns [`Input::Idle`] once `wait` has elapsed;
    /// with `None` blocks until a line, an interrupt or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn poll_line(&mut self, wait: Option<Duration>) -> Result<Input>;

    /// Clear the whole screen, if supported
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn clear_screen(&mut self) -> Result<()> {
        Ok(())
    }

    /// Pause without accepting input
    ///
    /// Returns [`Input::Interrupted`] if the user aborts during the pause,
    /// otherwise [`Input::Idle`].
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn wait(&mut self, duration: Duration) -> Result<Input> {
        std::thread::sleep(duration);
        Ok(Input::Idle)
    }
}

/// Print several lines in order
///
/// # Errors
///
/// Returns the first write error.
pub fn print_lines<C: Console + ?Sized>(console: &mut C, lines: &[String]) -> Result<()> {
    for line in lines {
        console.print_line(line)?;
    }
    Ok(())
}
