//! Display functions for command results

use super::formatters::colored_guess;
use crate::commands::{SolveEvent, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut turn = 0;
    for event in &result.events {
        match event {
            SolveEvent::Guess(step) => {
                turn += 1;
                println!(
                    "\nTurn {turn}: {} {}",
                    colored_guess(&step.entry.guess, &step.entry.pattern),
                    step.entry.pattern.to_emoji()
                );

                if verbose {
                    println!(
                        "  Candidates: {} → {}",
                        step.candidates_before, step.candidates_after
                    );
                    if step.candidates_after > 0 {
                        println!(
                            "  Reduction:  {:.1}x",
                            step.candidates_before as f64 / step.candidates_after as f64
                        );
                    }
                }
            }
            SolveEvent::Rejected { guess, reason } => {
                println!(
                    "\n{} {} ({reason})",
                    "Skipped:".yellow(),
                    guess.text().to_uppercase()
                );
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {turn} guesses!").green().bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {turn} guesses").red().bold()
        );
    }
}
