//! Sequential evaluation of several secrets
//!
//! The same game and solver are reset and reused for every secret.

use super::solve::{SolveOutcome, SolveResult, solve};
use crate::core::Word;
use crate::game::{Game, GameError};
use crate::solver::{Solver, Strategy};

/// Results of a batch run, in input order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub results: Vec<SolveResult>,
}

impl BatchReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of won games
    #[must_use]
    pub fn success(&self) -> usize {
        self.results.iter().filter(|r| r.success()).count()
    }

    /// Guesses used over won games
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.results
            .iter()
            .filter_map(|r| match r.outcome {
                SolveOutcome::Won { guesses } => Some(guesses),
                SolveOutcome::Lost => None,
            })
            .sum()
    }

    /// Mean guesses per won game, 0.0 when nothing was won
    #[must_use]
    pub fn average_steps(&self) -> f64 {
        let success = self.success();
        if success == 0 {
            0.0
        } else {
            self.total_steps() as f64 / success as f64
        }
    }
}

/// Solve every secret in order
///
/// # Errors
/// Returns the first `GameError` a secret triggers (e.g. wrong length).
pub fn run_batch<S: Strategy>(
    game: &mut Game,
    solver: &mut Solver<S>,
    secrets: &[Word],
) -> Result<BatchReport, GameError> {
    let results = secrets
        .iter()
        .map(|secret| solve(game, solver, secret.clone()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BatchReport { results })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Config, GameMode};
    use crate::solver::LexicographicStrategy;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn batch_counts_and_average() {
        let config = Config::with_words(5, 6, ["crane", "grate", "irate", "zebra"]).unwrap();
        let mut game = Game::new(config.clone(), GameMode::Classic).unwrap();
        let mut solver = Solver::new(LexicographicStrategy, &config).unwrap();

        let report = run_batch(&mut game, &mut solver, &words(&["crane", "grate"])).unwrap();

        assert_eq!(report.total(), 2);
        assert_eq!(report.success(), 2);
        assert_eq!(report.total_steps(), 3);
        assert!((report.average_steps() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn batch_average_ignores_losses() {
        let config = Config::with_words(5, 1, ["crane", "grate"]).unwrap();
        let mut game = Game::new(config.clone(), GameMode::Classic).unwrap();
        let mut solver = Solver::new(LexicographicStrategy, &config).unwrap();

        let report = run_batch(&mut game, &mut solver, &words(&["crane", "grate"])).unwrap();

        assert_eq!(report.success(), 1);
        assert!((report.average_steps() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_report_average_is_zero() {
        assert!(BatchReport::default().average_steps().abs() < f64::EPSILON);
    }
}
