//! Word representation
//!
//! A Word is a non-empty sequence of lowercase ASCII letters. Its length is not
//! fixed by the type; each game instance decides which length it accepts.

use std::fmt;
use thiserror::Error;

/// Number of symbols in the game alphabet ('a'..='z')
pub const ALPHABET_SIZE: usize = 26;

/// Per-letter occurrence counts, indexed by [`letter_index`]
pub type LetterCounts = [usize; ALPHABET_SIZE];

/// Map a lowercase ASCII letter to its slot in a [`LetterCounts`] array
///
/// # Panics
/// Panics in debug mode if `letter` is not in `b'a'..=b'z'`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase());
    (letter - b'a') as usize
}

/// A word over the lowercase alphabet
///
/// Words order lexicographically, which is what the solver relies on for
/// deterministic guess selection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only letters a-z, got {0:?}")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is rejected; callers reading free text normalise it
    /// first (see `wordlists::loader::words_from_text`).
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains anything other than the letters a-z
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("CRANE").is_err());
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        Ok(Self { text })
    }

    /// Build a word from bytes already known to be in `b'a'..=b'z'`
    pub(crate) fn from_letters(letters: &[u8]) -> Self {
        debug_assert!(!letters.is_empty() && letters.iter().all(u8::is_ascii_lowercase));
        Self {
            text: letters.iter().map(|&b| char::from(b)).collect(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false, words are never empty; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars().contains(&letter)
    }

    /// Count occurrences of every letter
    ///
    /// Used by pattern calculation to handle repeated letters.
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        let mut counts = [0; ALPHABET_SIZE];
        for &ch in self.chars() {
            counts[letter_index(ch)] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
