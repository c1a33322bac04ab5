//! How a single question was resolved

use super::Choice;

/// Resolution of one question; exactly one is recorded per question per pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct(Choice),
    Incorrect(Choice),
    TimedOut,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct(_))
    }

    /// The submitted answer, if one was given in time
    #[must_use]
    pub const fn answer(self) -> Option<Choice> {
        match self {
            Self::Correct(choice) | Self::Incorrect(choice) => Some(choice),
            Self::TimedOut => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_correct_is_correct() {
        assert!(Outcome::Correct(Choice::A).is_correct());
        assert!(!Outcome::Incorrect(Choice::A).is_correct());
        assert!(!Outcome::TimedOut.is_correct());
    }

    #[test]
    fn timeout_has_no_answer() {
        assert_eq!(Outcome::Incorrect(Choice::D).answer(), Some(Choice::D));
        assert_eq!(Outcome::TimedOut.answer(), None);
    }
}
