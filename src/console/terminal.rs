//! Raw-mode terminal console
//!
//! Keys are read one event at a time so the countdown can keep redrawing the
//! status line while the user types. Ctrl+C arrives as a key event instead of
//! a signal; an interrupt signal from outside the terminal raises a shared
//! flag instead. Both are reported as [`Input::Interrupted`].

use super::{Console, Input, Interrupter};
use anyhow::Result;
use crossterm::{
    cursor::{MoveTo, MoveToColumn},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Longest stretch spent waiting on key events before checking the interrupt flag
const FLAG_CHECK: Duration = Duration::from_millis(100);

/// What a key press does to the line being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Edited,
    Submit,
    Interrupt,
    Close,
    Ignored,
}

/// Why a wait for the next key ended
enum Wake {
    Key(KeyEvent),
    Elapsed,
    Interrupted,
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Apply one key event to the input buffer
fn apply_key(buffer: &mut String, key: KeyEvent) -> KeyAction {
    // Only process key press events (fixes Windows double-input bug)
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignored;
    }
    if is_interrupt(&key) {
        return KeyAction::Interrupt;
    }
    let chord = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('d')
            if key.modifiers.contains(KeyModifiers::CONTROL) && buffer.is_empty() =>
        {
            KeyAction::Close
        }
        KeyCode::Char(_) if chord => KeyAction::Ignored,
        KeyCode::Char(c) => {
            buffer.push(c);
            KeyAction::Edited
        }
        KeyCode::Backspace => {
            buffer.pop();
            KeyAction::Edited
        }
        KeyCode::Enter => KeyAction::Submit,
        _ => KeyAction::Ignored,
    }
}

/// Interactive console on the controlling terminal
pub struct TerminalConsole<W: Write = Stdout> {
    out: W,
    status: String,
    buffer: String,
    interrupted: Arc<AtomicBool>,
    raw_mode: bool,
}

impl TerminalConsole<Stdout> {
    /// Switch the terminal to raw mode
    ///
    /// Raw mode is restored when the console is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal refuses raw mode.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        Ok(Self {
            out: io::stdout(),
            status: String::new(),
            buffer: String::new(),
            interrupted: Arc::new(AtomicBool::new(false)),
            raw_mode: true,
        })
    }
}

impl<W: Write> TerminalConsole<W> {
    #[cfg(test)]
    fn with_writer(out: W) -> Self {
        Self {
            out,
            status: String::new(),
            buffer: String::new(),
            interrupted: Arc::new(AtomicBool::new(false)),
            raw_mode: false,
        }
    }

    /// Handle that makes the current or next wait return [`Input::Interrupted`]
    #[must_use]
    pub fn interrupter(&self) -> Interrupter {
        Interrupter::flag(Arc::clone(&self.interrupted))
    }

    /// Redraw the status line followed by the typed input
    fn redraw(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(&self.status),
            Print(&self.buffer)
        )?;
        self.out.flush()
    }

    fn submit(&mut self) -> io::Result<Input> {
        let line = std::mem::take(&mut self.buffer);
        self.status.clear();
        queue!(self.out, Print("\r\n"))?;
        self.out.flush()?;
        Ok(Input::Line(line))
    }

    /// Next key press before `deadline`, checking the interrupt flag in between
    fn next_key(&self, deadline: Option<Instant>) -> io::Result<Wake> {
        loop {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                return Ok(Wake::Interrupted);
            }
            let slice = match deadline {
                Some(deadline) => {
                    let left = deadline.saturating_duration_since(Instant::now());
                    if left.is_zero() {
                        return Ok(Wake::Elapsed);
                    }
                    left.min(FLAG_CHECK)
                }
                None => FLAG_CHECK,
            };
            if event::poll(slice)?
                && let Event::Key(key) = event::read()?
            {
                return Ok(Wake::Key(key));
            }
        }
    }
}

impl<W: Write> Drop for TerminalConsole<W> {
    fn drop(&mut self) {
        if self.raw_mode {
            let _ = disable_raw_mode();
        }
    }
}

impl<W: Write> Console for TerminalConsole<W> {
    fn print_line(&mut self, text: &str) -> Result<()> {
        if !self.status.is_empty() {
            // Leave the last status on screen; partial input is abandoned
            queue!(
                self.out,
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                Print(&self.status),
                Print("\r\n")
            )?;
            self.status.clear();
            self.buffer.clear();
        }
        // Raw mode does not translate '\n' into a carriage return
        for line in text.split('\n') {
            queue!(self.out, Print(line), Print("\r\n"))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn show_status(&mut self, text: &str) -> Result<()> {
        text.clone_into(&mut self.status);
        self.redraw()?;
        Ok(())
    }

    fn poll_line(&mut self, wait: Option<Duration>) -> Result<Input> {
        let deadline = wait.map(|wait| Instant::now() + wait);

        loop {
            let key = match self.next_key(deadline)? {
                Wake::Key(key) => key,
                Wake::Elapsed => return Ok(Input::Idle),
                Wake::Interrupted => {
                    self.buffer.clear();
                    return Ok(Input::Interrupted);
                }
            };

            match apply_key(&mut self.buffer, key) {
                KeyAction::Edited => self.redraw()?,
                KeyAction::Submit => return Ok(self.submit()?),
                KeyAction::Interrupt => {
                    self.buffer.clear();
                    return Ok(Input::Interrupted);
                }
                KeyAction::Close => return Ok(Input::Closed),
                KeyAction::Ignored => {}
            }
        }
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn wait(&mut self, duration: Duration) -> Result<Input> {
        let deadline = Some(Instant::now() + duration);

        loop {
            match self.next_key(deadline)? {
                Wake::Elapsed => return Ok(Input::Idle),
                Wake::Interrupted => return Ok(Input::Interrupted),
                // Keys pressed during a pause are dropped, except the interrupt
                Wake::Key(key) if key.kind == KeyEventKind::Press && is_interrupt(&key) => {
                    return Ok(Input::Interrupted);
                }
                Wake::Key(_) => {}
            }
        }
    }
}
