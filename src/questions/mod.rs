//! Built-in question list
//!
//! The quiz ships with a fixed set of general-knowledge questions compiled
//! into the binary. Order is significant: questions are asked as listed.

use crate::core::{Choice, Question};

/// Number of built-in questions
pub const BUILTIN_COUNT: usize = 5;

/// Build the built-in question list
#[must_use]
pub fn builtin() -> Vec<Question> {
    vec![
        Question::new(
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            Choice::C,
            "Paris has been the capital of France since 508 AD.",
        ),
        Question::new(
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            Choice::B,
            "Mars appears red due to iron oxide (rust) on its surface.",
        ),
        Question::new(
            "What is the largest mammal in the world?",
            ["African Elephant", "Blue Whale", "Giraffe", "Polar Bear"],
            Choice::B,
            "The Blue Whale can grow up to 100 feet long and weigh 200 tons.",
        ),
        Question::new(
            "Who painted the Mona Lisa?",
            [
                "Vincent van Gogh",
                "Pablo Picasso",
                "Leonardo da Vinci",
                "Michelangelo",
            ],
            Choice::C,
            "Leonardo da Vinci painted the Mona Lisa between 1503 and 1506.",
        ),
        Question::new(
            "What is the chemical symbol for gold?",
            ["Go", "Gd", "Au", "Ag"],
            Choice::C,
            "Au comes from the Latin word 'aurum' meaning gold.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(builtin().len(), BUILTIN_COUNT);
    }

    #[test]
    fn builtin_answer_key() {
        let key: Vec<Choice> = builtin().iter().map(Question::correct).collect();
        assert_eq!(key, vec![Choice::C, Choice::B, Choice::B, Choice::C, Choice::C]);
    }

    #[test]
    fn builtin_questions_are_complete() {
        for question in builtin() {
            assert!(!question.text().is_empty());
            assert!(!question.explanation().is_empty());
            assert!(
                question.labeled_options().all(|(_, text)| !text.is_empty()),
                "Question '{}' has an empty option",
                question.text()
            );
        }
    }

    #[test]
    fn builtin_is_stable_between_calls() {
        assert_eq!(builtin(), builtin());
    }
}
