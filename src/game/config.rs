//! Game configuration

use super::GameError;

/// Parameters shared by a game and the solver playing it
///
/// `dictionary_size == 0` selects universe mode: every lowercase string of
/// `word_length` letters counts as a dictionary word and `dict_words` is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Letters per word (L)
    pub word_length: usize,
    /// Rounds before the game is lost (T)
    pub max_tries: usize,
    /// Dictionary size hint (S); zero means universe mode
    pub dictionary_size: usize,
    /// Candidate dictionary words, filtered by length when the dictionary is built
    pub dict_words: Vec<String>,
}

impl Config {
    /// Create a validated config
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if `word_length` or `max_tries` is zero.
    pub fn new(
        word_length: usize,
        max_tries: usize,
        dictionary_size: usize,
        dict_words: Vec<String>,
    ) -> Result<Self, GameError> {
        let config = Self {
            word_length,
            max_tries,
            dictionary_size,
            dict_words,
        };
        config.validate()?;
        Ok(config)
    }

    /// Config backed by an explicit word list; S is the list length
    ///
    /// # Errors
    /// Same as [`Config::new`].
    pub fn with_words<I, W>(word_length: usize, max_tries: usize, words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let dict_words: Vec<String> = words.into_iter().map(Into::into).collect();
        Self::new(word_length, max_tries, dict_words.len(), dict_words)
    }

    /// Universe-mode config (S = 0)
    ///
    /// # Errors
    /// Same as [`Config::new`].
    pub fn universe(word_length: usize, max_tries: usize) -> Result<Self, GameError> {
        Self::new(word_length, max_tries, 0, Vec::new())
    }

    /// Check the positivity invariants
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` describing the first violated bound.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.word_length == 0 {
            return Err(GameError::InvalidConfig(
                "word length must be positive".to_string(),
            ));
        }
        if self.max_tries == 0 {
            return Err(GameError::InvalidConfig(
                "max tries must be positive".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn is_universe(&self) -> bool {
        self.dictionary_size == 0
    }
}
