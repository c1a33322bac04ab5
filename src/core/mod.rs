//! Core domain types for the quiz
//!
//! Pure types with no terminal or timing dependencies.

mod choice;
mod outcome;
mod question;
mod report;

pub use choice::{Choice, InvalidChoice};
pub use outcome::Outcome;
pub use question::Question;
pub use report::{Report, Tier};
