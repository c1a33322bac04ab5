//! Formatting utilities for terminal output

/// Width of banner rules
pub const RULE_WIDTH: usize = 50;

/// Heavy rule used around screens
#[must_use]
pub fn heavy_rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Light rule used around answer results
#[must_use]
pub fn light_rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage with one decimal place
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

/// Countdown status line, with the answer prompt after it
#[must_use]
pub fn countdown_status(remaining: u32) -> String {
    format!("Time remaining: {remaining} seconds   > ")
}
