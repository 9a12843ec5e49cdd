//! Judge line protocol
//!
//! A request is a whitespace-separated token stream whose first token selects
//! the mode:
//!
//! ```text
//! FEEDBACK <secret> <guess>
//! FILTER <n> <word>×n <q> (<guess> <pattern>)×q
//! SINGLE <length> <tries> <n> <word>×n SECRET <secret>
//! BATCH <length> <tries> <n> <word>×n <k> (SECRET <secret>)×k
//! ```
//!
//! In SINGLE and BATCH, `n == 0` selects universe mode.

use super::batch::run_batch;
use super::solve::solve;
use crate::core::{HistoryEntry, Pattern, Word, is_consistent};
use crate::game::{Config, Game, GameMode};
use crate::output::transcript::{write_batch, write_single};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, bail, ensure};
use std::io::Write;
use std::str::SplitWhitespace;

/// A parsed judge request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Feedback {
        secret: Word,
        guess: Word,
    },
    Filter {
        words: Vec<Word>,
        history: Vec<HistoryEntry>,
    },
    Single {
        config: Config,
        secret: Word,
    },
    Batch {
        config: Config,
        secrets: Vec<Word>,
    },
}

/// Token cursor with descriptive errors for missing input
struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    fn next(&mut self, what: &str) -> Result<&'a str> {
        self.inner
            .next()
            .with_context(|| format!("premature end of input: expected {what}"))
    }

    fn next_usize(&mut self, what: &str) -> Result<usize> {
        let token = self.next(what)?;
        token
            .parse()
            .with_context(|| format!("invalid {what}: {token:?}"))
    }

    fn next_word(&mut self, what: &str) -> Result<Word> {
        let token = self.next(what)?;
        Word::new(token).with_context(|| format!("invalid {what}: {token:?}"))
    }

    fn next_pattern(&mut self, what: &str) -> Result<Pattern> {
        let token = self.next(what)?;
        Pattern::from_str(token).with_context(|| format!("invalid {what}: {token:?}"))
    }

    /// `SECRET <word>` with the configured length
    fn next_secret(&mut self, word_length: usize, game: Option<usize>) -> Result<Word> {
        let at = game.map_or_else(String::new, |i| format!(" at GAME {i}"));
        let header = self.next("SECRET header")?;
        ensure!(
            header == "SECRET",
            "expected SECRET header{at}, found {header:?}"
        );
        let secret = self.next_word("secret")?;
        ensure!(
            secret.len() == word_length,
            "SECRET length {} != word length {word_length}{at}",
            secret.len()
        );
        Ok(secret)
    }

    /// `<length> <tries> <n> <word>×n`, keeping only words of the right length
    fn next_config(&mut self) -> Result<Config> {
        let word_length = self.next_usize("word length")?;
        let max_tries = self.next_usize("max tries")?;
        let dictionary_size = self.next_usize("dictionary size")?;

        let mut dict_words = Vec::new();
        for _ in 0..dictionary_size {
            let w = self.next("dictionary word")?;
            if w.len() == word_length {
                dict_words.push(w.to_string());
            }
        }

        Ok(Config::new(
            word_length,
            max_tries,
            dictionary_size,
            dict_words,
        )?)
    }
}

/// Parse a complete request
///
/// # Errors
/// Fails on unknown modes, malformed or missing tokens, secrets of the wrong
/// length, invalid configs and a batch size below one.
pub fn parse_request(input: &str) -> Result<Request> {
    let mut tokens = Tokens::new(input);
    let mode = tokens.next("mode")?;

    match mode {
        "FEEDBACK" => {
            let secret = tokens.next_word("secret")?;
            let guess = tokens.next_word("guess")?;
            ensure!(
                secret.len() == guess.len(),
                "secret and guess lengths differ ({} vs {})",
                secret.len(),
                guess.len()
            );
            Ok(Request::Feedback { secret, guess })
        }
        "FILTER" => {
            let n = tokens.next_usize("dictionary size")?;
            let words = (0..n)
                .map(|_| tokens.next_word("dictionary word"))
                .collect::<Result<Vec<_>>>()?;

            let q = tokens.next_usize("history size")?;
            let mut history = Vec::new();
            for _ in 0..q {
                let guess = tokens.next_word("history guess")?;
                let pattern = tokens.next_pattern("history pattern")?;
                ensure!(
                    guess.len() == pattern.len(),
                    "pattern {pattern} does not fit guess {guess}"
                );
                history.push(HistoryEntry::new(guess, pattern));
            }
            Ok(Request::Filter { words, history })
        }
        "SINGLE" => {
            let config = tokens.next_config()?;
            let secret = tokens.next_secret(config.word_length, None)?;
            Ok(Request::Single { config, secret })
        }
        "BATCH" => {
            let config = tokens.next_config()?;
            let k = tokens.next_usize("batch size")?;
            ensure!(k >= 1, "invalid BATCH k: {k}");
            let secrets = (1..=k)
                .map(|i| tokens.next_secret(config.word_length, Some(i)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Request::Batch { config, secrets })
        }
        other => bail!("unknown mode {other:?}: use FEEDBACK, FILTER, SINGLE or BATCH"),
    }
}

/// Execute a request and write its protocol output
///
/// SINGLE and BATCH games use `mode` for guess validity and `strategy` for
/// the solver.
///
/// # Errors
/// Fails on game errors or write failures.
pub fn run_request<S, W>(request: &Request, mode: GameMode, strategy: S, out: &mut W) -> Result<()>
where
    S: Strategy,
    W: Write,
{
    match request {
        Request::Feedback { secret, guess } => {
            writeln!(out, "{}", Pattern::calculate(guess, secret))?;
        }
        Request::Filter { words, history } => {
            let count = words.iter().filter(|w| is_consistent(w, history)).count();
            writeln!(out, "{count}")?;
        }
        Request::Single { config, secret } => {
            let mut game = Game::new(config.clone(), mode)?;
            let mut solver = Solver::new(strategy, config)?;
            let result = solve(&mut game, &mut solver, secret.clone())?;
            write_single(out, &result)?;
        }
        Request::Batch { config, secrets } => {
            let mut game = Game::new(config.clone(), mode)?;
            let mut solver = Solver::new(strategy, config)?;
            let report = run_batch(&mut game, &mut solver, secrets)?;
            write_batch(out, &report)?;
        }
    }
    Ok(())
}
