//! Plain line console
//!
//! Used when stdin is not a terminal. A reader thread forwards complete lines
//! over a channel so the session can wait on them with a timeout. The same
//! channel carries interrupt requests from the signal handler.

use super::{Console, Feed, Input, Interrupter};
use anyhow::Result;
use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, Stdout, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Console over any line reader and writer
pub struct LineConsole<W: Write> {
    out: W,
    feed: Receiver<Feed>,
    // Held so the channel stays open after the reader thread finishes
    wake: Sender<Feed>,
    // Lines typed during a pause, handed out by the next `poll_line`
    pending: VecDeque<String>,
    closed: bool,
    status_shown: bool,
}

impl LineConsole<Stdout> {
    /// Console over the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::spawn(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<W: Write> LineConsole<W> {
    /// Start forwarding lines from `reader` and write output to `out`
    #[must_use]
    pub fn spawn<R: BufRead + Send + 'static>(reader: R, out: W) -> Self {
        let (tx, rx) = mpsc::channel();
        let reader_tx = tx.clone();

        thread::spawn(move || {
            for line in reader.lines() {
                let Ok(line) = line else { break };
                if reader_tx.send(Feed::Line(line)).is_err() {
                    return;
                }
            }
            log::debug!("input reader reached end of input");
            let _ = reader_tx.send(Feed::Eof);
        });

        Self {
            out,
            feed: rx,
            wake: tx,
            pending: VecDeque::new(),
            closed: false,
            status_shown: false,
        }
    }

    /// Handle that makes the current or next wait return [`Input::Interrupted`]
    #[must_use]
    pub fn interrupter(&self) -> Interrupter {
        Interrupter::channel(self.wake.clone())
    }

    /// Output written so far
    #[must_use]
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn end_status(&mut self) -> io::Result<()> {
        if self.status_shown {
            writeln!(self.out)?;
            self.status_shown = false;
        }
        Ok(())
    }

    fn received(&mut self, line: String) -> Result<Input> {
        self.end_status()?;
        Ok(Input::Line(line))
    }

    fn interrupted(&mut self) -> Result<Input> {
        self.end_status()?;
        Ok(Input::Interrupted)
    }

    fn close(&mut self) {
        if !self.closed {
            log::debug!("input closed");
            self.closed = true;
        }
    }

    /// Next channel message before `deadline`, `None` once it passes
    fn next_feed(&mut self, deadline: Option<Instant>) -> Option<Feed> {
        let Some(deadline) = deadline else {
            // `wake` keeps the sender side alive, so this only fails if it is dropped
            return Some(self.feed.recv().unwrap_or(Feed::Eof));
        };
        let left = deadline.saturating_duration_since(Instant::now());
        match self.feed.recv_timeout(left) {
            Ok(feed) => Some(feed),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                self.close();
                thread::sleep(left);
                None
            }
        }
    }
}

impl<W: Write> Console for LineConsole<W> {
    fn print_line(&mut self, text: &str) -> Result<()> {
        self.end_status()?;
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    fn show_status(&mut self, text: &str) -> Result<()> {
        write!(self.out, "\r{text}")?;
        self.out.flush()?;
        self.status_shown = true;
        Ok(())
    }

    fn poll_line(&mut self, wait: Option<Duration>) -> Result<Input> {
        if let Some(line) = self.pending.pop_front() {
            return self.received(line);
        }
        let deadline = wait.map(|wait| Instant::now() + wait);

        loop {
            if deadline.is_none() && self.closed {
                self.end_status()?;
                return Ok(Input::Closed);
            }
            match self.next_feed(deadline) {
                Some(Feed::Line(line)) => return self.received(line),
                Some(Feed::Interrupt) => return self.interrupted(),
                // Keep waiting out a bounded wait so an interrupt still gets through
                Some(Feed::Eof) => self.close(),
                None => return Ok(Input::Idle),
            }
        }
    }

    fn wait(&mut self, duration: Duration) -> Result<Input> {
        let deadline = Some(Instant::now() + duration);

        loop {
            match self.next_feed(deadline) {
                Some(Feed::Line(line)) => self.pending.push_back(line),
                Some(Feed::Interrupt) => return self.interrupted(),
                Some(Feed::Eof) => self.close(),
                None => return Ok(Input::Idle),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    /// Reader that blocks until bytes are sent or the sender is dropped
    struct ChannelReader {
        rx: Receiver<Vec<u8>>,
        chunk: Cursor<Vec<u8>>,
    }

    impl Read for ChannelReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            loop {
                let n = self.chunk.read(buf)?;
                if n > 0 {
                    return Ok(n);
                }
                match self.rx.recv() {
                    Ok(bytes) => self.chunk = Cursor::new(bytes),
                    Err(_) => return Ok(0),
                }
            }
        }
    }

    fn open_console() -> (Sender<Vec<u8>>, LineConsole<Vec<u8>>) {
        let (tx, rx) = mpsc::channel();
        let reader = ChannelReader {
            rx,
            chunk: Cursor::new(Vec::new()),
        };
        (tx, LineConsole::spawn(BufReader::new(reader), Vec::new()))
    }

    fn console(input: &str) -> LineConsole<Vec<u8>> {
        LineConsole::spawn(Cursor::new(input.to_string()), Vec::new())
    }

    fn written(console: &LineConsole<Vec<u8>>) -> String {
        String::from_utf8_lossy(console.writer()).into_owned()
    }

    #[test]
    fn reads_lines_in_order() {
        let mut console = console("yes\nC\n");

        assert_eq!(
            console.poll_line(None).unwrap(),
            Input::Line("yes".to_string())
        );
        assert_eq!(console.poll_line(None).unwrap(), Input::Line("C".to_string()));
    }

    #[test]
    fn end_of_input() {
        let mut console = console("y\n");

        assert_eq!(console.poll_line(None).unwrap(), Input::Line("y".to_string()));
        assert_eq!(console.poll_line(None).unwrap(), Input::Closed);
        assert_eq!(console.poll_line(None).unwrap(), Input::Closed);
        assert_eq!(
            console
                .poll_line(Some(Duration::from_millis(1)))
                .unwrap(),
            Input::Idle
        );
    }

    #[test]
    fn print_line_ends_status_line() {
        let mut console = console("");

        console.show_status("Time remaining: 30 seconds").unwrap();
        console.print_line("Time's up!").unwrap();

        assert_eq!(
            written(&console),
            "\rTime remaining: 30 seconds\nTime's up!\n"
        );
    }

    #[test]
    fn status_redraws_in_place() {
        let mut console = console("");

        console.show_status("Time remaining: 2 seconds").unwrap();
        console.show_status("Time remaining: 1 seconds").unwrap();

        assert_eq!(
            written(&console),
            "\rTime remaining: 2 seconds\rTime remaining: 1 seconds"
        );
    }

    #[test]
    fn received_line_ends_status_line() {
        let mut console = console("b\n");

        console.show_status("> ").unwrap();
        console.poll_line(None).unwrap();
        console.print_line("next").unwrap();

        assert_eq!(written(&console), "\r> \nnext\n");
    }

    #[test]
    fn bounded_wait_on_open_input_goes_idle() {
        let (tx, mut console) = open_console();

        assert_eq!(
            console
                .poll_line(Some(Duration::from_millis(10)))
                .unwrap(),
            Input::Idle
        );
        assert!(!console.closed);

        tx.send(b"B\n".to_vec()).unwrap();
        assert_eq!(console.poll_line(None).unwrap(), Input::Line("B".to_string()));

        drop(tx);
        assert_eq!(console.poll_line(None).unwrap(), Input::Closed);
    }

    #[test]
    fn line_arriving_within_bound_is_delivered() {
        let (tx, mut console) = open_console();

        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            let _ = tx.send(b"a\n".to_vec());
            thread::sleep(Duration::from_millis(200));
        });

        assert_eq!(
            console.poll_line(Some(Duration::from_secs(5))).unwrap(),
            Input::Line("a".to_string())
        );
    }

    #[test]
    fn interrupt_ends_blocking_read() {
        let (_tx, mut console) = open_console();

        console.interrupter().interrupt();

        assert_eq!(console.poll_line(None).unwrap(), Input::Interrupted);
    }

    #[test]
    fn interrupt_ends_pause() {
        let (_tx, mut console) = open_console();
        let interrupter = console.interrupter();

        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            interrupter.interrupt();
        });

        assert_eq!(
            console.wait(Duration::from_secs(5)).unwrap(),
            Input::Interrupted
        );
    }

    #[test]
    fn interrupt_after_end_of_input() {
        let mut console = console("");

        assert_eq!(console.poll_line(None).unwrap(), Input::Closed);
        console.interrupter().interrupt();

        assert_eq!(
            console
                .poll_line(Some(Duration::from_millis(50)))
                .unwrap(),
            Input::Interrupted
        );
    }

    #[test]
    fn lines_typed_during_pause_are_kept() {
        let mut console = console("C\nD\n");

        assert_eq!(
            console.wait(Duration::from_millis(50)).unwrap(),
            Input::Idle
        );

        assert_eq!(console.poll_line(None).unwrap(), Input::Line("C".to_string()));
        assert_eq!(console.poll_line(None).unwrap(), Input::Line("D".to_string()));
        assert_eq!(console.poll_line(None).unwrap(), Input::Closed);
    }

    #[test]
    fn interrupt_ends_status_line() {
        let (_tx, mut console) = open_console();

        console.show_status("Time remaining: 12 seconds   > ").unwrap();
        console.interrupter().interrupt();
        console.poll_line(Some(Duration::from_secs(5))).unwrap();
        console.print_line("bye").unwrap();

        assert_eq!(
            written(&console),
            "\rTime remaining: 12 seconds   > \nbye\n"
        );
    }
}
