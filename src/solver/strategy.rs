//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Word;
use std::collections::BTreeSet;

/// A strategy for picking the next guess from the live candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` only when there are no candidates.
    fn select_guess<'a>(&self, candidates: &'a BTreeSet<Word>) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Smallest candidate in dictionary order (default, deterministic)
    #[default]
    Lexicographic,
    /// Uniformly random candidate
    Random,
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a BTreeSet<Word>) -> Option<&'a Word> {
        match self {
            Self::Lexicographic => LexicographicStrategy.select_guess(candidates),
            Self::Random => RandomStrategy.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "lexicographic" (alias "first"), "random"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "lexicographic" | "first" => Some(Self::Lexicographic),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lexicographic => "lexicographic",
            Self::Random => "random",
        }
    }
}

/// Always guesses the lexicographically smallest candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicographicStrategy;

impl Strategy for LexicographicStrategy {
    fn select_guess<'a>(&self, candidates: &'a BTreeSet<Word>) -> Option<&'a Word> {
        candidates.first()
    }
}

/// Random strategy
///
/// Picks any remaining candidate. Not reproducible between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &'a BTreeSet<Word>) -> Option<&'a Word> {
        use rand::seq::IteratorRandom;

        candidates.iter().choose(&mut rand::rng())
    }
}
