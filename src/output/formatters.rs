//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

/// Color each letter of a guess by its mark
#[must_use]
pub fn colored_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .to_uppercase()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| colored_letter(letter, *mark).to_string())
        .collect()
}

fn colored_letter(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {letter} ");
    match mark {
        Mark::Exact => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for guess scoring
#[must_use]
pub fn scoring_bar() -> ProgressBar {
    styled_bar("{spinner:.green} scoring [{bar:40.cyan/blue}] {pos}/{len} guesses")
}

/// Progress bar for benchmark games
#[must_use]
pub fn benchmark_bar() -> ProgressBar {
    styled_bar("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
}

fn styled_bar(template: &str) -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}
