//! Answer letters
//!
//! A `Choice` is one of the four option labels shown next to every question.

use std::fmt;
use std::str::FromStr;

/// One of the four answer labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

/// Error type for input that is not an answer letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not one of A, B, C or D", self.0)
    }
}

impl std::error::Error for InvalidChoice {}

impl Choice {
    /// All labels in display order
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Position of this label in a question's option list
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    /// Uppercase letter for this label
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl FromStr for Choice {
    type Err = InvalidChoice;

    /// Parse user input, ignoring case and surrounding whitespace
    ///
    /// # Examples
    /// ```
    /// use trivia_cli::core::Choice;
    ///
    /// assert_eq!(" c ".parse::<Choice>(), Ok(Choice::C));
    /// assert!("z".parse::<Choice>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(InvalidChoice(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
