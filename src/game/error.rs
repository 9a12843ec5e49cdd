//! Game error kinds

use super::GameState;
use thiserror::Error;

/// Failures surfaced by [`Config`](super::Config) and [`Game`](super::Game)
///
/// Only `InvalidConfig` is fatal. The others leave the game untouched and the
/// caller may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Non-positive word length or try limit
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A guess was submitted while the game was not being played
    #[error("invalid game state: {0}")]
    InvalidState(GameState),

    /// The guess failed the active validity policy; no round was consumed
    #[error("Invalid guess: {0}")]
    InvalidGuess(String),

    /// The secret passed to `start` does not have the configured length
    #[error("invalid secret {secret:?}: expected {expected} letters")]
    InvalidSecret { secret: String, expected: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_guess_message() {
        assert_eq!(
            GameError::InvalidGuess("aaaaa".to_string()).to_string(),
            "Invalid guess: aaaaa"
        );
    }
}
