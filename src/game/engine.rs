//! Game state machine

use super::{Config, Dictionary, GameError, GameMode};
use crate::core::{HistoryEntry, Pattern, Word};
use log::{debug, trace};
use std::fmt;

/// Lifecycle of a game
///
/// `Won` and `Lost` are terminal until the next `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotStarted => "NOT_STARTED",
            Self::Playing => "PLAYING",
            Self::Won => "WON",
            Self::Lost => "LOST",
        })
    }
}

/// A single word game
///
/// Owns its config, dictionary, secret and history. A game is reused across
/// secrets by calling [`Game::start`] again; it is not meant to be shared
/// between threads while playing.
#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    mode: GameMode,
    dictionary: Dictionary,
    secret: Option<Word>,
    history: Vec<HistoryEntry>,
    state: GameState,
    current_round: usize,
}

impl Game {
    /// Create a game and build its dictionary
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if the word length or try limit is zero.
    pub fn new(config: Config, mode: GameMode) -> Result<Self, GameError> {
        let dictionary = Dictionary::build(&config)?;
        Ok(Self {
            config,
            mode,
            dictionary,
            secret: None,
            history: Vec::new(),
            state: GameState::NotStarted,
            current_round: 0,
        })
    }

    /// Begin a new round with `secret`, discarding any previous history
    ///
    /// # Errors
    /// Returns `GameError::InvalidSecret` if the secret does not have the
    /// configured length; the game is left unchanged.
    pub fn start(&mut self, secret: Word) -> Result<(), GameError> {
        if secret.len() != self.config.word_length {
            return Err(GameError::InvalidSecret {
                secret: secret.text().to_string(),
                expected: self.config.word_length,
            });
        }

        debug!("starting {} game", self.mode);
        self.secret = Some(secret);
        self.history.clear();
        self.current_round = 0;
        self.state = GameState::Playing;
        Ok(())
    }

    /// Play one guess and return its feedback
    ///
    /// A rejected guess does not consume a round or touch the history.
    ///
    /// # Errors
    /// - `GameError::InvalidState` if the game is not being played
    /// - `GameError::InvalidGuess` if the active mode rejects the guess
    pub fn make_guess(&mut self, guess: &Word) -> Result<Pattern, GameError> {
        let secret = match (&self.state, &self.secret) {
            (GameState::Playing, Some(secret)) => secret,
            _ => return Err(GameError::InvalidState(self.state)),
        };

        if !self.is_valid_guess(guess) {
            trace!("rejected guess {guess}");
            return Err(GameError::InvalidGuess(guess.text().to_string()));
        }

        let pattern = Pattern::calculate(guess, secret);
        let won = guess == secret;

        self.history
            .push(HistoryEntry::new(guess.clone(), pattern.clone()));
        self.current_round += 1;

        if won {
            self.state = GameState::Won;
        } else if self.current_round >= self.config.max_tries {
            self.state = GameState::Lost;
        }

        debug!(
            "round {}: {guess} -> {pattern} ({})",
            self.current_round, self.state
        );
        Ok(pattern)
    }

    /// Parse and play a guess typed as text
    ///
    /// Text that is not a word is reported as an invalid guess.
    ///
    /// # Errors
    /// Same as [`Game::make_guess`].
    pub fn make_guess_str(&mut self, guess: &str) -> Result<Pattern, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::InvalidState(self.state));
        }
        let word = Word::new(guess).map_err(|e| GameError::InvalidGuess(e.to_string()))?;
        self.make_guess(&word)
    }

    /// Whether `word` is legal under the active mode, ignoring history
    #[must_use]
    pub fn is_valid_word(&self, word: &Word) -> bool {
        self.mode.is_valid_word(word, &self.dictionary)
    }

    /// Whether `guess` may be played now
    #[must_use]
    pub fn is_valid_guess(&self, guess: &Word) -> bool {
        self.mode
            .is_valid_guess(guess, &self.dictionary, &self.history)
    }

    /// Dictionary words still consistent with every pattern seen
    ///
    /// `None` when the dictionary is a universe too large to enumerate.
    #[must_use]
    pub fn remaining_words(&self) -> Option<usize> {
        self.dictionary.count_consistent(&self.history)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::Won | GameState::Lost)
    }

    #[must_use]
    pub const fn has_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    #[must_use]
    pub const fn has_lost(&self) -> bool {
        matches!(self.state, GameState::Lost)
    }

    /// Rounds played so far
    #[must_use]
    pub const fn current_round(&self) -> usize {
        self.current_round
    }

    #[must_use]
    pub const fn remaining_tries(&self) -> usize {
        self.config.max_tries.saturating_sub(self.current_round)
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The current secret, if a game was started
    #[must_use]
    pub const fn secret(&self) -> Option<&Word> {
        self.secret.as_ref()
    }

    /// One-line status: state, round and remaining word count
    ///
    /// e.g. `"PLAYING 2 14"`; the count is `?` when it cannot be computed.
    #[must_use]
    pub fn status_line(&self) -> String {
        let remaining = self
            .remaining_words()
            .map_or_else(|| "?".to_string(), |n| n.to_string());
        format!("{} {} {remaining}", self.state, self.current_round)
    }
}
