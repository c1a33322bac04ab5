//! Per-question countdown
//!
//! A countdown is a passive clock: the session advances it whenever an input
//! wait comes back idle. It never fires on its own, so there is no second
//! thread that could resolve a question behind the session's back.

use std::time::{Duration, Instant};

/// Lifecycle of a countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running,
    Cancelled,
    Expired,
}

/// Fixed-length countdown measured in ticks
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: u32,
    tick: Duration,
    next_tick: Instant,
    state: CountdownState,
}

impl Countdown {
    /// Start a countdown of `limit` ticks now
    #[must_use]
    pub fn start(limit: u32, tick: Duration) -> Self {
        Self::start_at(limit, tick, Instant::now())
    }

    /// Start a countdown of `limit` ticks at a given instant
    #[must_use]
    pub fn start_at(limit: u32, tick: Duration, now: Instant) -> Self {
        Self {
            remaining: limit,
            tick,
            next_tick: now + tick,
            state: if limit == 0 {
                CountdownState::Expired
            } else {
                CountdownState::Running
            },
        }
    }

    /// Ticks left before expiry
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> CountdownState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// How long an input wait may block before the next tick is due
    #[must_use]
    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Consume at most one due tick
    ///
    /// Stopped countdowns are left untouched, so a cancelled countdown can
    /// never expire afterwards.
    pub fn advance(&mut self, now: Instant) -> CountdownState {
        if self.state == CountdownState::Running && now >= self.next_tick {
            self.remaining -= 1;
            self.next_tick += self.tick;
            if self.remaining == 0 {
                self.state = CountdownState::Expired;
            }
        }
        self.state
    }

    /// Stop a running countdown
    ///
    /// Idempotent: returns `false` when the countdown had already been
    /// cancelled or had expired.
    pub fn cancel(&mut self) -> bool {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Cancelled;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn counts_down_to_expiry() {
        let start = Instant::now();
        let mut countdown = Countdown::start_at(3, SECOND, start);

        assert_eq!(countdown.remaining(), 3);
        assert_eq!(countdown.advance(start + SECOND), CountdownState::Running);
        assert_eq!(countdown.remaining(), 2);
        assert_eq!(countdown.advance(start + SECOND * 2), CountdownState::Running);
        assert_eq!(countdown.advance(start + SECOND * 3), CountdownState::Expired);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn advance_before_tick_is_noop() {
        let start = Instant::now();
        let mut countdown = Countdown::start_at(3, SECOND, start);

        assert_eq!(
            countdown.advance(start + Duration::from_millis(500)),
            CountdownState::Running
        );
        assert_eq!(countdown.remaining(), 3);
    }

    #[test]
    fn advance_consumes_one_tick_per_call() {
        let start = Instant::now();
        let mut countdown = Countdown::start_at(5, SECOND, start);

        countdown.advance(start + SECOND * 4);
        assert_eq!(countdown.remaining(), 4);
    }

    #[test]
    fn until_next_tick() {
        let start = Instant::now();
        let countdown = Countdown::start_at(3, SECOND, start);

        assert_eq!(countdown.until_next_tick(start), SECOND);
        assert_eq!(
            countdown.until_next_tick(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert_eq!(countdown.until_next_tick(start + SECOND * 2), Duration::ZERO);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut countdown = Countdown::start(3, SECOND);

        assert!(countdown.cancel());
        assert!(!countdown.cancel());
        assert_eq!(countdown.state(), CountdownState::Cancelled);
    }

    #[test]
    fn cancelled_countdown_never_expires() {
        let start = Instant::now();
        let mut countdown = Countdown::start_at(1, SECOND, start);

        countdown.cancel();
        assert_eq!(
            countdown.advance(start + SECOND * 10),
            CountdownState::Cancelled
        );
        assert_eq!(countdown.remaining(), 1);
    }

    #[test]
    fn expired_countdown_cannot_be_cancelled() {
        let start = Instant::now();
        let mut countdown = Countdown::start_at(1, SECOND, start);

        assert_eq!(countdown.advance(start + SECOND), CountdownState::Expired);
        assert!(!countdown.cancel());
        assert_eq!(countdown.state(), CountdownState::Expired);
    }

    #[test]
    fn zero_tick_advances_on_every_call() {
        let mut countdown = Countdown::start(2, Duration::ZERO);

        assert_eq!(countdown.advance(Instant::now()), CountdownState::Running);
        assert_eq!(countdown.advance(Instant::now()), CountdownState::Expired);
    }

    #[test]
    fn zero_limit_starts_expired() {
        let countdown = Countdown::start(0, SECOND);
        assert!(!countdown.is_running());
        assert_eq!(countdown.state(), CountdownState::Expired);
    }
}
