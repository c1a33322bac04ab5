//! Quiz sessions
//!
//! The session state machine, its per-question countdown and the constants
//! that drive them.

mod config;
mod countdown;
mod quiz;

pub use config::QuizConfig;
pub use countdown::{Countdown, CountdownState};
pub use quiz::{Exit, Phase, QuizSession, SessionError};
