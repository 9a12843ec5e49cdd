//! Core domain types
//!
//! Words, feedback patterns and guess history. Everything here is pure:
//! no I/O, no shared state.

mod history;
mod pattern;
mod word;

pub use history::{HistoryEntry, admits, is_consistent};
pub use pattern::{Mark, Pattern};
pub use word::{ALPHABET_SIZE, LetterCounts, Word, WordError, letter_index};
