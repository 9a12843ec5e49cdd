//! Guess history and the consistency check shared by game and solver
//!
//! Every place that asks "could this word still be the secret?" goes through
//! [`admits`], so the game's remaining-word count, the hard-mode guess check and
//! the solver's candidate filter can never disagree.

use super::{Pattern, Word};

/// One played round: the guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HistoryEntry {
    pub guess: Word,
    pub pattern: Pattern,
}

impl HistoryEntry {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// Whether `candidate`, taken as the secret, reproduces this entry's pattern
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        admits(&self.guess, &self.pattern, candidate)
    }
}

/// Whether playing `guess` against `candidate` yields exactly `pattern`
#[inline]
#[must_use]
pub fn admits(guess: &Word, pattern: &Pattern, candidate: &Word) -> bool {
    candidate.len() == guess.len() && Pattern::calculate(guess, candidate) == *pattern
}

/// Whether `candidate` is consistent with every entry of `history`, in order
#[must_use]
pub fn is_consistent(candidate: &Word, history: &[HistoryEntry]) -> bool {
    history.iter().all(|entry| entry.admits(candidate))
}
