//! Terminal output formatting
//!
//! Text for every quiz screen, independent of how it reaches the terminal.

pub mod display;
pub mod formatters;
