//! Solve loop
//!
//! Plays one secret with a solver: choose a guess, submit it, feed the pattern
//! back, until the game ends or the solver runs out of candidates.

use crate::core::{HistoryEntry, Word};
use crate::game::{Game, GameError};
use crate::solver::{Solver, Strategy};
use log::debug;

/// A single accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub entry: HistoryEntry,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Something that happened while solving, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveEvent {
    Guess(GuessStep),
    /// The game refused the guess; no round was used
    Rejected { guess: Word, reason: GameError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Won { guesses: usize },
    Lost,
}

impl SolveOutcome {
    /// Guess count on a win, -1 otherwise
    #[must_use]
    pub const fn sentinel(self) -> i64 {
        match self {
            Self::Won { guesses } => guesses as i64,
            Self::Lost => -1,
        }
    }
}

/// Result of solving a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub secret: Word,
    pub events: Vec<SolveEvent>,
    pub outcome: SolveOutcome,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Won { .. })
    }

    /// Accepted guesses only
    pub fn steps(&self) -> impl Iterator<Item = &GuessStep> {
        self.events.iter().filter_map(|event| match event {
            SolveEvent::Guess(step) => Some(step),
            SolveEvent::Rejected { .. } => None,
        })
    }
}

/// Play `secret` to the end with `solver`
///
/// Both `game` and `solver` are reset first, so they can be reused across
/// secrets. A guess the game rejects is discarded from the solver and the loop
/// retries without consuming a round.
///
/// # Errors
/// Returns `GameError::InvalidSecret` if the secret has the wrong length.
pub fn solve<S: Strategy>(
    game: &mut Game,
    solver: &mut Solver<S>,
    secret: Word,
) -> Result<SolveResult, GameError> {
    solver.reset();
    game.start(secret.clone())?;

    let mut events = Vec::new();

    while !game.is_game_over() {
        let Some(guess) = solver.choose_best_guess().cloned() else {
            debug!("no candidates left for {secret}");
            break;
        };
        let candidates_before = solver.candidate_count();

        match game.make_guess(&guess) {
            Ok(pattern) => {
                solver.update(&guess, &pattern);
                events.push(SolveEvent::Guess(GuessStep {
                    entry: HistoryEntry::new(guess, pattern),
                    candidates_before,
                    candidates_after: solver.candidate_count(),
                }));
            }
            Err(reason @ GameError::InvalidGuess(_)) => {
                solver.discard(&guess);
                events.push(SolveEvent::Rejected { guess, reason });
            }
            Err(e) => return Err(e),
        }
    }

    let outcome = if game.has_won() {
        SolveOutcome::Won {
            guesses: game.current_round(),
        }
    } else {
        SolveOutcome::Lost
    };

    Ok(SolveResult {
        secret,
        events,
        outcome,
    })
}
