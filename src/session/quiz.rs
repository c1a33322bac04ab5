//! Quiz session state machine
//!
//! One `QuizSession` owns the score, the position in the question list and
//! the live countdown. It drives readiness, the question loop, the final
//! report and restarts through a [`Console`].

use super::config::QuizConfig;
use super::countdown::{Countdown, CountdownState};
use crate::console::{Console, Input, print_lines};
use crate::core::{Choice, InvalidChoice, Outcome, Question, Report};
use crate::output::{display, formatters::countdown_status};
use anyhow::Result;
use log::{debug, info};
use std::fmt;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

/// Where the session is in its lifecycle
///
/// A countdown running out is not a phase of its own: the question stays
/// `Asking` until the timeout notice is printed and then moves straight to
/// `Answered`. After an interrupt the phase is left where the interrupt hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    AwaitingReadiness,
    /// Waiting for an answer to the question at this index
    Asking(usize),
    /// The question at this index was scored, by answer or timeout
    Answered(usize),
    Finished,
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user did not confirm readiness
    Declined,
    /// The user finished and chose not to play again
    Completed,
    /// The user aborted
    Interrupted,
}

/// Error type for sessions that cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NoQuestions,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoQuestions => write!(f, "A quiz needs at least one question"),
        }
    }
}

impl std::error::Error for SessionError {}

/// How a single wait for an answer ended
enum Answer {
    Given(Choice),
    Invalid(InvalidChoice),
    Expired,
    Interrupted,
}

/// Reply to a yes/no prompt
enum Reply {
    Yes,
    No,
    Interrupted,
}

/// One play-through of a fixed question list
pub struct QuizSession<'a> {
    questions: &'a [Question],
    config: QuizConfig,
    phase: Phase,
    current_index: usize,
    score: u32,
    outcomes: Vec<Outcome>,
    active_timer: Option<Countdown>,
}

impl<'a> QuizSession<'a> {
    /// Create a session over `questions`
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoQuestions` for an empty list.
    pub fn new(questions: &'a [Question], config: QuizConfig) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        Ok(Self {
            questions,
            config,
            phase: Phase::NotStarted,
            current_index: 0,
            score: 0,
            outcomes: Vec::with_capacity(questions.len()),
            active_timer: None,
        })
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Number of questions resolved in this pass
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Outcomes of the resolved questions, in order
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[must_use]
    pub const fn questions(&self) -> &'a [Question] {
        self.questions
    }

    /// Whether a countdown is currently live
    #[must_use]
    pub fn has_live_countdown(&self) -> bool {
        self.active_timer.as_ref().is_some_and(Countdown::is_running)
    }

    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.questions.len() as u32 * self.config.points_per_correct
    }

    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            score: self.score,
            max_score: self.max_score(),
            answered: self.current_index,
            total: self.questions.len(),
        }
    }

    /// Play until the user declines, finishes without replaying, or aborts
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails.
    pub fn run<C: Console>(&mut self, console: &mut C) -> Result<Exit> {
        if let Err(err) = console.clear_screen() {
            debug!("could not clear screen: {err}");
        }

        loop {
            if let ControlFlow::Break(exit) = self.play_once(console)? {
                info!("session ended: {exit:?}");
                return Ok(exit);
            }
            self.reset();
        }
    }

    /// Return to a fresh pass over the same questions
    pub fn reset(&mut self) {
        self.cancel_countdown();
        self.score = 0;
        self.current_index = 0;
        self.outcomes.clear();
        self.phase = Phase::AwaitingReadiness;
        debug!("session reset");
    }

    /// One pass from the welcome screen to the replay prompt
    ///
    /// `Continue` means the user asked to play again.
    fn play_once<C: Console>(&mut self, console: &mut C) -> Result<ControlFlow<Exit>> {
        if let ControlFlow::Break(exit) = self.await_readiness(console)? {
            return Ok(ControlFlow::Break(exit));
        }

        while self.current_index < self.questions.len() {
            if let ControlFlow::Break(exit) = self.ask_current(console)? {
                return Ok(ControlFlow::Break(exit));
            }
            if self.current_index < self.questions.len()
                && let ControlFlow::Break(exit) = self.pause(console, self.config.pacing_delay)?
            {
                return Ok(ControlFlow::Break(exit));
            }
        }

        self.finish(console)
    }

    fn await_readiness<C: Console>(&mut self, console: &mut C) -> Result<ControlFlow<Exit>> {
        self.phase = Phase::AwaitingReadiness;
        debug!("awaiting readiness");

        print_lines(console, &display::welcome_lines(self.config.time_limit))?;
        console.print_line(&display::ready_prompt())?;

        match prompt_yes_no(console)? {
            Reply::Yes => {
                console.print_line(&display::starting_line())?;
                self.pause(console, self.config.start_delay)
            }
            Reply::No => {
                console.print_line(&display::declined_line())?;
                Ok(ControlFlow::Break(Exit::Declined))
            }
            Reply::Interrupted => Ok(ControlFlow::Break(self.interrupt(console)?)),
        }
    }

    /// Ask the current question until it resolves
    ///
    /// Invalid input re-renders the same question with a fresh countdown.
    fn ask_current<C: Console>(&mut self, console: &mut C) -> Result<ControlFlow<Exit, Outcome>> {
        let index = self.current_index;
        let questions = self.questions;
        let question = &questions[index];
        self.phase = Phase::Asking(index);

        let outcome = loop {
            print_lines(
                console,
                &display::question_lines(
                    question,
                    index,
                    questions.len(),
                    self.config.time_limit,
                ),
            )?;

            match self.await_answer(console)? {
                Answer::Given(choice) if question.is_correct(choice) => {
                    break Outcome::Correct(choice);
                }
                Answer::Given(choice) => break Outcome::Incorrect(choice),
                Answer::Invalid(err) => {
                    debug!("question {}: {err}", index + 1);
                    console.print_line(&display::invalid_input_line())?;
                }
                Answer::Expired => {
                    console.print_line(&display::timeout_line())?;
                    break Outcome::TimedOut;
                }
                Answer::Interrupted => {
                    return Ok(ControlFlow::Break(self.interrupt(console)?));
                }
            }
        };

        self.resolve(outcome);
        print_lines(
            console,
            &display::result_lines(question, outcome, self.score),
        )?;

        Ok(ControlFlow::Continue(outcome))
    }

    /// Race one line of input against a fresh countdown
    ///
    /// Whichever comes first wins. A submitted line cancels the countdown
    /// before it is parsed, and an expired countdown stops consulting input,
    /// so a question can only be resolved once.
    fn await_answer<C: Console>(&mut self, console: &mut C) -> Result<Answer> {
        self.cancel_countdown();
        self.active_timer = Some(Countdown::start(self.config.time_limit, self.config.tick));

        let answer = loop {
            let Some(countdown) = self.active_timer.as_mut() else {
                break Answer::Expired;
            };
            console.show_status(&countdown_status(countdown.remaining()))?;
            if !countdown.is_running() {
                break Answer::Expired;
            }

            match console.poll_line(Some(countdown.until_next_tick(Instant::now())))? {
                Input::Line(line) => {
                    countdown.cancel();
                    break match line.parse::<Choice>() {
                        Ok(choice) => Answer::Given(choice),
                        Err(err) => Answer::Invalid(err),
                    };
                }
                Input::Idle | Input::Closed => {
                    if countdown.advance(Instant::now()) == CountdownState::Expired {
                        debug!("countdown expired");
                    }
                }
                // Left live for `interrupt` to cancel
                Input::Interrupted => return Ok(Answer::Interrupted),
            }
        };

        self.active_timer = None;
        Ok(answer)
    }

    /// Record the outcome of the current question and advance
    fn resolve(&mut self, outcome: Outcome) {
        debug_assert!(self.active_timer.is_none());
        debug_assert_eq!(self.outcomes.len(), self.current_index);

        if outcome.is_correct() {
            self.score += self.config.points_per_correct;
        }
        self.phase = Phase::Answered(self.current_index);
        self.outcomes.push(outcome);
        self.current_index += 1;

        info!(
            "question {} of {}: {outcome:?}, score {}",
            self.current_index,
            self.questions.len(),
            self.score
        );
    }

    fn finish<C: Console>(&mut self, console: &mut C) -> Result<ControlFlow<Exit>> {
        self.phase = Phase::Finished;
        let report = self.report();
        info!(
            "finished: {}/{} ({:.1}%)",
            report.score,
            report.max_score,
            report.percentage()
        );

        print_lines(console, &display::report_lines(&report))?;
        console.print_line(&display::play_again_prompt())?;

        match prompt_yes_no(console)? {
            Reply::Yes => Ok(ControlFlow::Continue(())),
            Reply::No => {
                console.print_line(&display::goodbye_line())?;
                Ok(ControlFlow::Break(Exit::Completed))
            }
            Reply::Interrupted => Ok(ControlFlow::Break(self.interrupt(console)?)),
        }
    }

    fn pause<C: Console>(&mut self, console: &mut C, duration: Duration) -> Result<ControlFlow<Exit>> {
        if duration.is_zero() {
            return Ok(ControlFlow::Continue(()));
        }

        match console.wait(duration)? {
            Input::Interrupted => Ok(ControlFlow::Break(self.interrupt(console)?)),
            _ => Ok(ControlFlow::Continue(())),
        }
    }

    /// Stop any live countdown and say goodbye
    fn interrupt<C: Console>(&mut self, console: &mut C) -> Result<Exit> {
        self.cancel_countdown();
        console.print_line(&display::interrupted_line())?;
        Ok(Exit::Interrupted)
    }

    fn cancel_countdown(&mut self) {
        if let Some(mut countdown) = self.active_timer.take()
            && countdown.cancel()
        {
            debug!("countdown cancelled with {} left", countdown.remaining());
        }
    }
}

/// Read a yes/no answer; anything but "yes" or "y" counts as no
fn prompt_yes_no<C: Console>(console: &mut C) -> Result<Reply> {
    console.show_status("> ")?;

    loop {
        match console.poll_line(None)? {
            Input::Line(line) => {
                let reply = line.trim().to_lowercase();
                return Ok(if reply == "yes" || reply == "y" {
                    Reply::Yes
                } else {
                    Reply::No
                });
            }
            Input::Closed => return Ok(Reply::No),
            Input::Interrupted => return Ok(Reply::Interrupted),
            Input::Idle => {}
        }
    }
}
