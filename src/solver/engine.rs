//! Candidate-filtering solver

use super::strategy::{Strategy, StrategyType};
use crate::core::{Pattern, Word, admits};
use crate::game::{Config, Dictionary, GameError};
use log::{debug, warn};
use std::collections::BTreeSet;

/// Wordle solver
///
/// Keeps its own ordered candidate set, built from the same config as the game
/// but owned separately. Candidates only ever shrink until [`Solver::reset`].
#[derive(Debug, Clone)]
pub struct Solver<S: Strategy = StrategyType> {
    strategy: S,
    dictionary: Vec<Word>,
    candidates: BTreeSet<Word>,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver whose candidates are the dictionary described by `config`
    ///
    /// A universe dictionary is enumerated when its word length allows it;
    /// otherwise the solver starts with no candidates.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if the config is invalid.
    pub fn new(strategy: S, config: &Config) -> Result<Self, GameError> {
        let dictionary = match Dictionary::build(config)?.sorted_words() {
            Ok(words) => words,
            Err(e) => {
                warn!("solver starts without candidates: {e}");
                Vec::new()
            }
        };
        Ok(Self::from_words(strategy, dictionary))
    }

    /// Create a solver over an explicit word list
    pub fn from_words(strategy: S, words: impl IntoIterator<Item = Word>) -> Self {
        let candidates: BTreeSet<Word> = words.into_iter().collect();
        Self {
            strategy,
            dictionary: candidates.iter().cloned().collect(),
            candidates,
        }
    }

    /// Restore the full dictionary as candidates
    pub fn reset(&mut self) {
        self.candidates = self.dictionary.iter().cloned().collect();
    }

    /// Next guess according to the strategy, or `None` when no candidate is left
    #[must_use]
    pub fn choose_best_guess(&self) -> Option<&Word> {
        self.strategy.select_guess(&self.candidates)
    }

    /// Keep only candidates that would have produced `pattern` for `guess`
    ///
    /// Returns the number of candidates removed.
    pub fn update(&mut self, guess: &Word, pattern: &Pattern) -> usize {
        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| admits(guess, pattern, candidate));
        let removed = before - self.candidates.len();

        debug!(
            "{guess} {pattern}: {} candidates left ({removed} removed)",
            self.candidates.len()
        );
        removed
    }

    /// Drop a single word from the candidates, e.g. after the game refused it
    pub fn discard(&mut self, word: &Word) -> bool {
        self.candidates.remove(word)
    }

    /// Live candidates in lexicographic order
    #[must_use]
    pub const fn candidates(&self) -> &BTreeSet<Word> {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::LexicographicStrategy;

    const WORDS: [&str; 6] = ["slate", "crane", "irate", "grate", "crate", "crane"];

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn solver() -> Solver<LexicographicStrategy> {
        let config = Config::with_words(5, 6, WORDS).unwrap();
        Solver::new(LexicographicStrategy, &config).unwrap()
    }

    #[test]
    fn reset_loads_deduplicated_dictionary() {
        let s = solver();
        assert_eq!(s.candidate_count(), 5);
    }

    #[test]
    fn first_guess_is_smallest_word() {
        assert_eq!(solver().choose_best_guess(), Some(&word("crane")));
    }

    #[test]
    fn update_keeps_exactly_consistent_candidates() {
        let mut s = solver();
        let guess = word("crane");
        let pattern = Pattern::calculate(&guess, &word("grate"));
        let before: Vec<Word> = s.candidates().iter().cloned().collect();

        let removed = s.update(&guess, &pattern);

        for candidate in &before {
            let consistent = Pattern::calculate(&guess, candidate) == pattern;
            assert_eq!(s.candidates().contains(candidate), consistent);
        }
        assert_eq!(removed, before.len() - s.candidate_count());
        assert_eq!(s.candidate_count(), 2);
        assert_eq!(s.choose_best_guess(), Some(&word("grate")));
    }

    #[test]
    fn update_is_idempotent() {
        let mut s = solver();
        let guess = word("slate");
        let pattern = Pattern::calculate(&guess, &word("crate"));

        s.update(&guess, &pattern);
        let once = s.candidates().clone();
        assert_eq!(s.update(&guess, &pattern), 0);
        assert_eq!(s.candidates(), &once);
    }

    #[test]
    fn impossible_feedback_empties_candidates() {
        let mut s = solver();
        s.update(&word("zzzzz"), &Pattern::all_green(5));
        assert_eq!(s.candidate_count(), 0);
        assert!(s.choose_best_guess().is_none());
    }

    #[test]
    fn reset_restores_candidates() {
        let mut s = solver();
        s.update(&word("zzzzz"), &Pattern::all_green(5));
        s.reset();
        assert_eq!(s.candidate_count(), 5);
    }

    #[test]
    fn discard_removes_one_word() {
        let mut s = solver();
        assert!(s.discard(&word("crane")));
        assert!(!s.discard(&word("crane")));
        assert_eq!(s.choose_best_guess(), Some(&word("crate")));
    }

    #[test]
    fn small_universe_is_enumerated() {
        let s = Solver::new(LexicographicStrategy, &Config::universe(2, 6).unwrap()).unwrap();
        assert_eq!(s.candidate_count(), 676);
        assert_eq!(s.choose_best_guess(), Some(&word("aa")));
    }

    #[test]
    fn large_universe_starts_empty() {
        let s = Solver::new(LexicographicStrategy, &Config::universe(5, 6).unwrap()).unwrap();
        assert_eq!(s.candidate_count(), 0);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = Config {
            word_length: 5,
            max_tries: 0,
            dictionary_size: 0,
            dict_words: Vec::new(),
        };
        assert!(Solver::new(LexicographicStrategy, &config).is_err());
    }
}
