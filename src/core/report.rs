//! End-of-session scoring
//!
//! Percentage and feedback tier for a finished pass through the questions.

use std::fmt;

/// Feedback tier chosen from the final percentage
///
/// Each lower bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Master,
    Good,
    NotBad,
    KeepPracticing,
}

impl Tier {
    /// Select the tier for a percentage in `0.0..=100.0`
    ///
    /// # Examples
    /// ```
    /// use trivia_cli::core::Tier;
    ///
    /// assert_eq!(Tier::from_percentage(80.0), Tier::Master);
    /// assert_eq!(Tier::from_percentage(39.9), Tier::KeepPracticing);
    /// ```
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Master
        } else if percentage >= 60.0 {
            Self::Good
        } else if percentage >= 40.0 {
            Self::NotBad
        } else {
            Self::KeepPracticing
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Master => "🏆",
            Self::Good => "👍",
            Self::NotBad => "💪",
            Self::KeepPracticing => "📚",
        }
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Master => "EXCELLENT! You're a trivia master!",
            Self::Good => "GOOD JOB! You know your stuff!",
            Self::NotBad => "NOT BAD! Keep learning!",
            Self::KeepPracticing => "KEEP PRACTICING! You'll do better next time!",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.message())
    }
}

/// Final result of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub score: u32,
    pub max_score: u32,
    pub answered: usize,
    pub total: usize,
}

impl Report {
    /// Score as a percentage of the maximum (0.0 for an empty quiz)
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.max_score) * 100.0
    }

    #[must_use]
    pub fn tier(&self) -> Tier {
        Tier::from_percentage(self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(score: u32, max_score: u32) -> Report {
        Report {
            score,
            max_score,
            answered: 5,
            total: 5,
        }
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(Tier::from_percentage(100.0), Tier::Master);
        assert_eq!(Tier::from_percentage(85.0), Tier::Master);
        assert_eq!(Tier::from_percentage(80.0), Tier::Master);
        assert_eq!(Tier::from_percentage(79.9), Tier::Good);
        assert_eq!(Tier::from_percentage(60.0), Tier::Good);
        assert_eq!(Tier::from_percentage(40.0), Tier::NotBad);
        assert_eq!(Tier::from_percentage(39.9), Tier::KeepPracticing);
        assert_eq!(Tier::from_percentage(0.0), Tier::KeepPracticing);
    }

    #[test]
    fn percentage_of_max_score() {
        assert!((report(50, 50).percentage() - 100.0).abs() < 1e-9);
        assert!((report(30, 50).percentage() - 60.0).abs() < 1e-9);
        assert!((report(20, 50).percentage() - 40.0).abs() < 1e-9);
        assert!(report(0, 50).percentage().abs() < 1e-9);
    }

    #[test]
    fn empty_quiz_is_zero_percent() {
        let empty = Report {
            score: 0,
            max_score: 0,
            answered: 0,
            total: 0,
        };
        assert!(empty.percentage().abs() < 1e-9);
        assert_eq!(empty.tier(), Tier::KeepPracticing);
    }

    #[test]
    fn tier_follows_percentage() {
        assert_eq!(report(50, 50).tier(), Tier::Master);
        assert_eq!(report(40, 50).tier(), Tier::Master);
        assert_eq!(report(30, 50).tier(), Tier::Good);
        assert_eq!(report(20, 50).tier(), Tier::NotBad);
        assert_eq!(report(10, 50).tier(), Tier::KeepPracticing);
    }

    #[test]
    fn tier_display() {
        assert_eq!(
            Tier::Master.to_string(),
            "🏆 EXCELLENT! You're a trivia master!"
        );
    }
}
