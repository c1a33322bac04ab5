//! Session timing and scoring constants

use std::time::Duration;

/// Constants that drive one quiz session
///
/// The binary always runs with [`QuizConfig::default`]. Tests shorten the
/// delays so whole sessions run without sleeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    /// Countdown length per question, in ticks
    pub time_limit: u32,
    /// Length of one countdown tick
    pub tick: Duration,
    /// Pause between a result and the next question
    pub pacing_delay: Duration,
    /// Pause between confirming readiness and the first question
    pub start_delay: Duration,
    /// Points awarded per correct answer
    pub points_per_correct: u32,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_limit: 30,
            tick: Duration::from_secs(1),
            pacing_delay: Duration::from_secs(3),
            start_delay: Duration::from_secs(2),
            points_per_correct: 10,
        }
    }
}

impl QuizConfig {
    /// Same constants with every delay removed
    #[must_use]
    pub const fn without_delays(self) -> Self {
        Self {
            tick: Duration::ZERO,
            pacing_delay: Duration::ZERO,
            start_delay: Duration::ZERO,
            ..self
        }
    }
}
