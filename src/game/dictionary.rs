//! Dictionary construction and membership
//!
//! A dictionary is either an explicit, deduplicated word list or the implicit
//! universe of every lowercase string of a given length. The universe is never
//! materialized for membership tests; [`all_words`] enumerates it only for
//! small lengths.

use super::{Config, GameError};
use crate::core::{ALPHABET_SIZE, HistoryEntry, Word, is_consistent};
use log::{debug, trace};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Longest word length [`all_words`] will enumerate (26^4 = 456,976 words)
pub const MAX_ENUMERABLE_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("cannot enumerate words of length {length}: limit is {max}")]
    TooLarge { length: usize, max: usize },
    #[error("cannot enumerate words of length zero")]
    ZeroLength,
}

/// The set of valid words for one game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dictionary {
    /// Every `word_length`-letter string over the alphabet
    Universe { word_length: usize },
    /// Explicit word list, all of `word_length` letters
    Listed {
        word_length: usize,
        words: FxHashSet<Word>,
    },
}

impl Dictionary {
    /// Build the dictionary described by `config`
    ///
    /// Listed words of the wrong length, or containing characters outside the
    /// alphabet, are dropped silently. Duplicates collapse.
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if the config is invalid.
    pub fn build(config: &Config) -> Result<Self, GameError> {
        config.validate()?;

        if config.is_universe() {
            debug!("universe dictionary of {}-letter words", config.word_length);
            return Ok(Self::Universe {
                word_length: config.word_length,
            });
        }

        let words: FxHashSet<Word> = config
            .dict_words
            .iter()
            .filter(|w| w.len() == config.word_length)
            .filter_map(|w| Word::new(w.as_str()).ok())
            .collect();

        debug!(
            "dictionary of {} {}-letter words ({} supplied)",
            words.len(),
            config.word_length,
            config.dict_words.len()
        );

        Ok(Self::Listed {
            word_length: config.word_length,
            words,
        })
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        match self {
            Self::Universe { word_length } | Self::Listed { word_length, .. } => *word_length,
        }
    }

    #[must_use]
    pub const fn is_universe(&self) -> bool {
        matches!(self, Self::Universe { .. })
    }

    /// Membership test; in universe mode this is a length check only
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        match self {
            Self::Universe { word_length } => word.len() == *word_length,
            Self::Listed { words, .. } => words.contains(word),
        }
    }

    /// Number of words, or `None` when the universe size overflows `usize`
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Universe { word_length } => universe_size(*word_length),
            Self::Listed { words, .. } => Some(words.len()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// All words in lexicographic order
    ///
    /// # Errors
    /// Returns `DictionaryError` when a universe dictionary is too large to enumerate.
    pub fn sorted_words(&self) -> Result<Vec<Word>, DictionaryError> {
        match self {
            Self::Universe { word_length } => all_words(*word_length),
            Self::Listed { words, .. } => {
                let mut sorted: Vec<Word> = words.iter().cloned().collect();
                sorted.sort_unstable();
                Ok(sorted)
            }
        }
    }

    /// Count words consistent with every entry of `history`
    ///
    /// Returns `None` for a universe too large to enumerate once history exists.
    #[must_use]
    pub fn count_consistent(&self, history: &[HistoryEntry]) -> Option<usize> {
        match self {
            Self::Listed { words, .. } => {
                Some(words.iter().filter(|w| is_consistent(w, history)).count())
            }
            Self::Universe { word_length } if history.is_empty() => universe_size(*word_length),
            Self::Universe { word_length } => match all_words(*word_length) {
                Ok(words) => Some(words.iter().filter(|w| is_consistent(w, history)).count()),
                Err(e) => {
                    trace!("remaining universe words unknown: {e}");
                    None
                }
            },
        }
    }
}

/// 26^length, or `None` on overflow
#[must_use]
pub fn universe_size(length: usize) -> Option<usize> {
    u32::try_from(length)
        .ok()
        .and_then(|exp| ALPHABET_SIZE.checked_pow(exp))
}

/// Enumerate every `length`-letter word in lexicographic order
///
/// # Errors
/// Returns `DictionaryError` for a zero length or one above
/// [`MAX_ENUMERABLE_LENGTH`].
pub fn all_words(length: usize) -> Result<Vec<Word>, DictionaryError> {
    if length == 0 {
        return Err(DictionaryError::ZeroLength);
    }
    if length > MAX_ENUMERABLE_LENGTH {
        return Err(DictionaryError::TooLarge {
            length,
            max: MAX_ENUMERABLE_LENGTH,
        });
    }

    let mut out = Vec::with_capacity(universe_size(length).unwrap_or(0));
    let mut current = vec![b'a'; length];
    fill_from(&mut current, 0, &mut out);
    Ok(out)
}

fn fill_from(current: &mut [u8], pos: usize, out: &mut Vec<Word>) {
    if pos == current.len() {
        out.push(Word::from_letters(current));
        return;
    }
    for letter in b'a'..=b'z' {
        current[pos] = letter;
        fill_from(current, pos + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn listed_dictionary_filters_and_dedupes() {
        let config = Config::with_words(
            5,
            6,
            ["crane", "slate", "crane", "toolong", "abc", "cr4ne", "SLATE"],
        )
        .unwrap();
        let dict = Dictionary::build(&config).unwrap();

        assert_eq!(dict.len(), Some(2));
        assert!(dict.contains(&word("crane")));
        assert!(dict.contains(&word("slate")));
        assert!(!dict.contains(&word("irate")));
    }

    #[test]
    fn build_rejects_invalid_config() {
        let config = Config {
            word_length: 5,
            max_tries: 0,
            dictionary_size: 1,
            dict_words: vec!["crane".to_string()],
        };
        assert!(matches!(
            Dictionary::build(&config),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn universe_membership_is_length_only() {
        let dict = Dictionary::build(&Config::universe(5, 6).unwrap()).unwrap();
        assert!(dict.is_universe());
        assert!(dict.contains(&word("qzxvj")));
        assert!(!dict.contains(&word("abcd")));
        assert_eq!(dict.len(), Some(11_881_376));
    }

    #[test]
    fn all_words_small_length_in_order() {
        let words = all_words(2).unwrap();
        assert_eq!(words.len(), 676);
        assert_eq!(words[0].text(), "aa");
        assert_eq!(words[1].text(), "ab");
        assert_eq!(words[26].text(), "ba");
        assert_eq!(words[675].text(), "zz");
        assert!(words.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn all_words_refuses_large_lengths() {
        assert_eq!(
            all_words(5),
            Err(DictionaryError::TooLarge { length: 5, max: 4 })
        );
        assert_eq!(all_words(0), Err(DictionaryError::ZeroLength));
    }

    #[test]
    fn sorted_words_of_list() {
        let config = Config::with_words(3, 6, ["cab", "abc", "bca"]).unwrap();
        let dict = Dictionary::build(&config).unwrap();
        let texts: Vec<String> = dict
            .sorted_words()
            .unwrap()
            .into_iter()
            .map(|w| w.text().to_string())
            .collect();
        assert_eq!(texts, ["abc", "bca", "cab"]);
    }

    #[test]
    fn count_consistent_universe() {
        let dict = Dictionary::build(&Config::universe(2, 6).unwrap()).unwrap();
        assert_eq!(dict.count_consistent(&[]), Some(676));

        // "ab" against secret "ab": only "ab" reproduces GG
        let guess = word("ab");
        let history = vec![HistoryEntry::new(guess.clone(), Pattern::calculate(&guess, &guess))];
        assert_eq!(dict.count_consistent(&history), Some(1));
    }

    #[test]
    fn count_consistent_large_universe_unknown() {
        let dict = Dictionary::build(&Config::universe(6, 6).unwrap()).unwrap();
        assert_eq!(dict.count_consistent(&[]), Some(308_915_776));

        let guess = word("abcdef");
        let history = vec![HistoryEntry::new(guess.clone(), Pattern::all_green(6))];
        assert_eq!(dict.count_consistent(&history), None);
    }
}
