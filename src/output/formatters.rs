//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Colour one letter the way the board shows it
fn colored_letter(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Green => tile.black().on_green().bold(),
        Mark::Yellow => tile.black().on_yellow().bold(),
        Mark::Black => tile.white().on_bright_black(),
    }
}

/// Render a guess as coloured tiles
#[must_use]
pub fn colored_guess(guess: &Word, pattern: &Pattern) -> String {
    guess
        .text()
        .chars()
        .zip(pattern.marks())
        .map(|(letter, &mark)| colored_letter(letter, mark).to_string())
        .collect()
}

fn filled_cells(value: usize, max: usize, width: usize) -> usize {
    if max == 0 { 0 } else { (value * width / max).min(width) }
}

/// Coloured bar for a guess-distribution row; non-zero counts get at least one cell
#[must_use]
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    let filled = filled_cells(count, max, width)
        .max(usize::from(count > 0))
        .min(width);
    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(width - filled).bright_black()
    )
}
