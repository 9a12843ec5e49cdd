//! Feedback pattern calculation and representation
//!
//! A pattern holds one [`Mark`] per guess position:
//! - Black (letter not in word, or all its occurrences already accounted for)
//! - Yellow (letter in word, wrong position)
//! - Green (letter in correct position)
//!
//! Patterns render as `G`/`Y`/`B` strings such as `"GGYBB"`, which is also the
//! form used by the line protocol.

use super::Word;
use super::word::letter_index;
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Black,
    Yellow,
    Green,
}

impl Mark {
    /// Protocol character for this mark
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and 'B'/'b'/'-'/'_'/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'B' | 'b' | '-' | '_' | '⬜' => Some(Self::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Black => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Mark>);

impl Pattern {
    /// Create a pattern from explicit marks
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    /// All greens for a word of `len` letters
    #[must_use]
    pub fn all_green(len: usize) -> Self {
        Self(vec![Mark::Green; len])
    }

    /// Calculate the pattern when `guess` is played against `answer`
    ///
    /// Greens are assigned first and consume their letter. Remaining positions
    /// are then scanned left to right: a letter still available in the answer
    /// becomes Yellow and consumes one occurrence, otherwise Black.
    ///
    /// Both words must have the same length. That is the caller's contract;
    /// it is only checked in debug builds.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Word, Pattern};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("crate").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &secret).to_string(), "GGGBG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "pattern of unequal lengths");

        let mut marks = vec![Mark::Black; guess.len()];
        let mut available = answer.letter_counts();

        // First pass: exact position matches
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                marks[i] = Mark::Green;
                available[letter_index(g)] -= 1;
            }
        }

        // Second pass: present elsewhere, in guess order
        for (mark, &g) in marks.iter_mut().zip(guess.chars()) {
            if *mark == Mark::Green {
                continue;
            }
            let slot = &mut available[letter_index(g)];
            if *slot > 0 {
                *mark = Mark::Yellow;
                *slot -= 1;
            }
        }

        Self(marks)
    }

    /// Per-position marks
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Green)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Green).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Yellow).count()
    }

    /// Parse a pattern from a string like "GYBBG" or "🟩🟨⬜⬜🟩"
    ///
    /// Returns `None` for an empty string or any unknown character.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Pattern;
    ///
    /// let p1 = Pattern::from_str("GY-GY").unwrap();
    /// let p2 = Pattern::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.to_string(), "GYBGY");
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let marks = s.chars().map(Mark::from_char).collect::<Option<Vec<_>>>()?;
        if marks.is_empty() {
            return None;
        }
        Some(Self(marks))
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(guess: &str, answer: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn pattern_exact_scenario() {
        // c, r, a in place; t absent; e in place
        assert_eq!(pattern("crate", "crane").to_string(), "GGGBG");
    }

    #[test]
    fn pattern_all_black() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p.to_string(), "BBBBB");
        assert_eq!(p.count_greens(), 0);
        assert_eq!(p.count_yellows(), 0);
    }

    #[test]
    fn pattern_all_green() {
        let p = pattern("crane", "crane");
        assert_eq!(p, Pattern::all_green(5));
        assert!(p.is_perfect());
    }

    #[test]
    fn pattern_repeated_letters_in_guess() {
        // ABBEY holds two b's; both b's in BABES are marked
        // b(yellow) a(yellow) b(green) e(green) s(black)
        assert_eq!(pattern("babes", "abbey").to_string(), "YYGGB");
    }

    #[test]
    fn pattern_leftover_occurrences_are_black() {
        // CRANE has a single e and the green at position 4 takes it
        assert_eq!(pattern("geese", "crane").to_string(), "BBBBG");
        assert_eq!(pattern("eerie", "crane").to_string(), "BBYBG");
    }

    #[test]
    fn pattern_yellow_scan_is_left_to_right() {
        // ROBOT vs FLOOR: first o yellow, second o green
        assert_eq!(pattern("robot", "floor").to_string(), "YYBGB");
        // SPEED vs ERASE: both e's yellow
        assert_eq!(pattern("speed", "erase").to_string(), "YBYYB");
        // PILOT has one l, only the first l of LLAMA gets it
        assert_eq!(pattern("llama", "pilot").to_string(), "YBBBB");
        assert_eq!(pattern("aback", "cigar").to_string(), "YBBYB");
    }

    #[test]
    fn pattern_greens_take_priority_over_earlier_yellows() {
        assert_eq!(pattern("aaa", "bba").to_string(), "BBG");
        assert_eq!(pattern("xxa", "yya").to_string(), "BBG");
    }

    #[test]
    fn pattern_other_lengths() {
        assert_eq!(pattern("ab", "ba").to_string(), "YY");
        assert_eq!(pattern("z", "z").to_string(), "G");
        assert_eq!(pattern("strength", "strength"), Pattern::all_green(8));
    }

    #[test]
    fn pattern_long_runs_of_one_letter() {
        let run = "a".repeat(300);
        assert_eq!(pattern(&run, &run), Pattern::all_green(300));

        // 256 a's then b, against b then 256 a's: every letter is displaced
        let secret = format!("{}b", "a".repeat(256));
        let guess = format!("b{}", "a".repeat(256));
        let p = pattern(&guess, &secret);
        assert_eq!(p.marks()[0], Mark::Yellow);
        assert_eq!(p.marks()[256], Mark::Yellow);
        assert_eq!(p.count_greens(), 255);
        assert_eq!(p.count_yellows(), 2);
    }

    #[test]
    fn pattern_from_str_valid() {
        let p1 = Pattern::from_str("GYG--").unwrap();
        let p2 = Pattern::from_str("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::from_str("gygbb").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.to_string(), "GYGBB");
    }

    #[test]
    fn pattern_from_str_invalid() {
        assert!(Pattern::from_str("GXGGY").is_none());
        assert!(Pattern::from_str("").is_none());
        assert!("GQ".parse::<Pattern>().is_err());
    }

    #[test]
    fn pattern_count_feedback() {
        let p = Pattern::from_str("YGGYY").unwrap();
        assert_eq!(p.count_greens(), 2);
        assert_eq!(p.count_yellows(), 3);
        assert_eq!(p.len(), 5);
    }

    #[test]
    fn pattern_to_emoji() {
        let p = Pattern::from_str("GYB").unwrap();
        assert_eq!(p.to_emoji(), "🟩🟨⬜");
    }

    #[test]
    fn pattern_symmetry() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "ab"] {
            let w = Word::new(word).unwrap();
            assert!(Pattern::calculate(&w, &w).is_perfect());
        }
    }
}
