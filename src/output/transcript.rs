//! Plain-text protocol output
//!
//! These writers produce the exact line format of the judge protocol, so they
//! never add colour.

use crate::commands::{BatchReport, SolveEvent, SolveOutcome, SolveResult};
use std::io::{self, Write};

/// `GUESS`/`PATTERN` lines for each accepted guess, `Error:` for rejections
///
/// # Errors
/// Propagates write failures.
pub fn write_solve_transcript<W: Write>(out: &mut W, result: &SolveResult) -> io::Result<()> {
    for event in &result.events {
        match event {
            SolveEvent::Guess(step) => {
                writeln!(out, "GUESS {}", step.entry.guess)?;
                writeln!(out, "PATTERN {}", step.entry.pattern)?;
            }
            SolveEvent::Rejected { reason, .. } => writeln!(out, "Error: {reason}")?,
        }
    }
    Ok(())
}

/// `RESULT WON n` or `RESULT LOST -1`
///
/// # Errors
/// Propagates write failures.
pub fn write_result_line<W: Write>(out: &mut W, outcome: SolveOutcome) -> io::Result<()> {
    match outcome {
        SolveOutcome::Won { .. } => writeln!(out, "RESULT WON {}", outcome.sentinel()),
        SolveOutcome::Lost => writeln!(out, "RESULT LOST {}", outcome.sentinel()),
    }
}

/// Transcript followed by the result line
///
/// # Errors
/// Propagates write failures.
pub fn write_single<W: Write>(out: &mut W, result: &SolveResult) -> io::Result<()> {
    write_solve_transcript(out, result)?;
    write_result_line(out, result.outcome)
}

/// `GAME i` blocks for every result, then the `SUMMARY` line
///
/// # Errors
/// Propagates write failures.
pub fn write_batch<W: Write>(out: &mut W, report: &BatchReport) -> io::Result<()> {
    for (i, result) in report.results.iter().enumerate() {
        writeln!(out, "GAME {}", i + 1)?;
        write_single(out, result)?;
    }
    writeln!(
        out,
        "SUMMARY success={}/{} avg_steps={:.2}",
        report.success(),
        report.total(),
        report.average_steps()
    )
}
