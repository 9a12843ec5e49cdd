//! Guess validity policies
//!
//! The three game variants differ only in which words and guesses they accept,
//! so they are a closed enum selected when the game is constructed.

use super::Dictionary;
use crate::core::{HistoryEntry, Word, is_consistent};
use std::fmt;

/// Validity policy of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Any word of the configured length
    Trivial,
    /// Dictionary words only
    #[default]
    Classic,
    /// Dictionary words that are consistent with all feedback so far
    Hard,
}

impl GameMode {
    /// Parse a mode name
    ///
    /// Supported names: "trivial", "classic", "hard"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "trivial" | "unrestricted" => Some(Self::Trivial),
            "classic" | "dictionary" => Some(Self::Classic),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trivial => "trivial",
            Self::Classic => "classic",
            Self::Hard => "hard",
        }
    }

    /// Whether `word` is a legal word under this policy
    #[must_use]
    pub fn is_valid_word(self, word: &Word, dictionary: &Dictionary) -> bool {
        match self {
            Self::Trivial => word.len() == dictionary.word_length(),
            Self::Classic | Self::Hard => dictionary.contains(word),
        }
    }

    /// Whether `guess` may be played given the history so far
    ///
    /// In hard mode the guess, taken as a hypothetical secret, must reproduce
    /// every earlier pattern.
    #[must_use]
    pub fn is_valid_guess(self, guess: &Word, dictionary: &Dictionary, history: &[HistoryEntry]) -> bool {
        if !self.is_valid_word(guess, dictionary) {
            return false;
        }
        match self {
            Self::Trivial | Self::Classic => true,
            Self::Hard => is_consistent(guess, history),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
