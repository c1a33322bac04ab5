//! Trivia question representation

use super::Choice;

/// A multiple-choice question with exactly four options
///
/// Questions are immutable once built; option labels come from their position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; 4],
    correct: Choice,
    explanation: String,
}

impl Question {
    /// Create a new question
    ///
    /// # Examples
    /// ```
    /// use trivia_cli::core::{Choice, Question};
    ///
    /// let q = Question::new("2 + 2?", ["3", "4", "5", "22"], Choice::B, "Basic arithmetic.");
    /// assert!(q.is_correct(Choice::B));
    /// assert_eq!(q.option(Choice::D), "22");
    /// ```
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        options: [&str; 4],
        correct: Choice,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.map(str::to_string),
            correct,
            explanation: explanation.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Option text for a label
    #[inline]
    #[must_use]
    pub fn option(&self, choice: Choice) -> &str {
        &self.options[choice.index()]
    }

    /// Options paired with their labels, in display order
    pub fn labeled_options(&self) -> impl Iterator<Item = (Choice, &str)> {
        Choice::ALL
            .into_iter()
            .map(move |choice| (choice, self.option(choice)))
    }

    #[inline]
    #[must_use]
    pub const fn correct(&self) -> Choice {
        self.correct
    }

    #[inline]
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[inline]
    #[must_use]
    pub fn is_correct(&self, choice: Choice) -> bool {
        self.correct == choice
    }
}
