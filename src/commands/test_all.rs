//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every dictionary word and generates statistics.
//! Secrets are spread over rayon workers; each worker plays on its own clone of
//! the game and solver.

use super::solve::{SolveOutcome, solve};
use crate::core::Word;
use crate::game::Game;
use crate::output::formatters::distribution_bar;
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct WordTestResult {
    pub word: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub max_tries: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
}

fn test_one<S: Strategy>(game: &mut Game, solver: &mut Solver<S>, secret: &Word) -> WordTestResult {
    let start = Instant::now();
    let (guesses, success) = match solve(game, solver, secret.clone()) {
        Ok(result) => (
            result
                .steps()
                .map(|s| s.entry.guess.text().to_string())
                .collect::<Vec<_>>(),
            matches!(result.outcome, SolveOutcome::Won { .. }),
        ),
        Err(e) => {
            warn!("skipping {secret}: {e}");
            (Vec::new(), false)
        }
    };

    WordTestResult {
        word: secret.text().to_string(),
        num_guesses: guesses.len(),
        guesses,
        success,
        duration: start.elapsed(),
    }
}

/// Run the solver on every secret (or the first `limit` of them)
///
/// `game` and `solver` act as prototypes and are cloned per worker.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_test_all<S>(
    game: &Game,
    solver: &Solver<S>,
    secrets: &[Word],
    limit: Option<usize>,
) -> TestAllStatistics
where
    S: Strategy + Clone + Send + Sync,
{
    let test_words = &secrets[..limit.unwrap_or(secrets.len()).min(secrets.len())];

    println!("🎯 Testing {} words...", test_words.len());

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results: Vec<WordTestResult> = test_words
        .par_iter()
        .map_init(
            || (game.clone(), solver.clone()),
            |(game, solver), secret| {
                let result = test_one(game, solver, secret);
                pb.inc(1);
                result
            },
        )
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&results, game.config().max_tries, total_start.elapsed())
}

fn summarize(results: &[WordTestResult], max_tries: usize, total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for r in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(r.num_guesses).or_insert(0) += 1;
    }

    let solved: Vec<&WordTestResult> = results.iter().filter(|r| r.success).collect();
    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let mut worst_words: Vec<(String, usize)> = solved
        .iter()
        .map(|r| (r.word.clone(), r.num_guesses))
        .collect();
    worst_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: results.len(),
        solved: solved.len(),
        failed: results.len() - solved.len(),
        max_tries,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses: solved.iter().map(|r| r.num_guesses).max().unwrap_or(0),
        min_guesses: solved.iter().map(|r| r.num_guesses).min().unwrap_or(0),
        worst_words,
        failed_words: results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.word.clone())
            .collect(),
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Range:               {}-{}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.max_tries {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.solved > 0 {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = distribution_bar(count, max_count, 40);
            println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }
}
