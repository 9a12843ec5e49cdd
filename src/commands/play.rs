//! Interactive play
//!
//! A human guesses against a secret through a text prompt. Invalid guesses
//! are reported and retried without using a round.

use crate::core::Word;
use crate::game::{Dictionary, Game, GameError};
use crate::output::formatters::colored_guess;
use anyhow::{Context, Result};
use colored::Colorize;
use log::warn;
use rand::Rng;
use std::io::{BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySummary {
    pub secret: Word,
    pub won: bool,
    pub rounds: usize,
    /// Player left before the game was over
    pub quit: bool,
}

/// Pick a random secret from the dictionary
///
/// Universe dictionaries yield a random string of the right length.
///
/// # Errors
/// Fails if the dictionary has no words.
pub fn random_secret(dictionary: &Dictionary) -> Result<Word> {
    use rand::seq::IteratorRandom;

    let mut rng = rand::rng();
    match dictionary {
        Dictionary::Universe { word_length } => {
            let letters: Vec<u8> = (0..*word_length)
                .map(|_| rng.random_range(b'a'..=b'z'))
                .collect();
            Ok(Word::from_letters(&letters))
        }
        Dictionary::Listed { words, .. } => words
            .iter()
            .choose(&mut rng)
            .cloned()
            .context("dictionary has no words of the configured length"),
    }
}

/// Run one interactive game of `secret` reading guesses from `input`
///
/// Commands start with `:` so they never shadow a word: `:quit` ends the
/// session, `:status` prints the status line, `:history` reprints the board.
///
/// # Errors
/// Fails on I/O errors or if the secret does not fit the game.
pub fn run_play<R: BufRead, W: Write>(
    game: &mut Game,
    secret: Word,
    mut input: R,
    out: &mut W,
) -> Result<PlaySummary> {
    game.start(secret.clone())?;

    let config = game.config();
    writeln!(
        out,
        "\n{} {} letters, {} tries, {} mode",
        "Word game:".bright_cyan().bold(),
        config.word_length,
        config.max_tries,
        game.mode()
    )?;
    writeln!(out, "Commands: ':quit' to exit, ':status', ':history'\n")?;

    let mut line = String::new();
    while !game.is_game_over() {
        write!(
            out,
            "Guess {}/{}: ",
            game.current_round() + 1,
            game.config().max_tries
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("failed to read guess")? == 0 {
            break;
        }
        let text = line.trim();

        match text {
            "" => continue,
            ":quit" | ":q" | ":exit" => break,
            ":status" => {
                writeln!(out, "{}", game.status_line())?;
                continue;
            }
            ":history" => {
                for entry in game.history() {
                    writeln!(out, "  {}", colored_guess(&entry.guess, &entry.pattern))?;
                }
                continue;
            }
            _ => {}
        }

        match game.make_guess_str(text) {
            Ok(pattern) => {
                let remaining = game
                    .remaining_words()
                    .map_or_else(|| "?".to_string(), |n| n.to_string());
                let guess = &game.history()[game.history().len() - 1].guess;
                writeln!(
                    out,
                    "  {}  {}  ({} tries left, {} words possible)",
                    colored_guess(guess, &pattern),
                    pattern,
                    game.remaining_tries(),
                    remaining
                )?;
            }
            Err(GameError::InvalidGuess(reason)) => {
                writeln!(out, "{} {reason}", "Not accepted:".yellow())?;
            }
            Err(e) => {
                warn!("unexpected game error: {e}");
                return Err(e.into());
            }
        }
    }

    let summary = PlaySummary {
        secret: secret.clone(),
        won: game.has_won(),
        rounds: game.current_round(),
        quit: !game.is_game_over(),
    };

    if summary.won {
        writeln!(
            out,
            "\n{}",
            format!("Solved in {} of {} tries!", summary.rounds, game.config().max_tries)
                .green()
                .bold()
        )?;
    } else {
        writeln!(
            out,
            "\n{} The word was {}",
            "Out of luck.".red().bold(),
            secret.text().to_uppercase().bright_yellow()
        )?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Config, GameMode};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn game(mode: GameMode) -> Game {
        let config = Config::with_words(5, 3, ["crane", "slate", "irate", "grate"]).unwrap();
        Game::new(config, mode).unwrap()
    }

    #[test]
    fn play_until_win() {
        let mut g = game(GameMode::Classic);
        let mut out: Vec<u8> = Vec::new();
        let summary = run_play(&mut g, word("grate"), "crane\ngrate\n".as_bytes(), &mut out).unwrap();

        assert!(summary.won);
        assert_eq!(summary.rounds, 2);
        assert!(!summary.quit);
    }

    #[test]
    fn invalid_guesses_are_retried() {
        let mut g = game(GameMode::Classic);
        let mut out: Vec<u8> = Vec::new();
        let input = "zzzzz\ncr4ne\n\n:status\ngrate\n";
        let summary = run_play(&mut g, word("grate"), input.as_bytes(), &mut out).unwrap();

        assert!(summary.won);
        assert_eq!(summary.rounds, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("PLAYING 0 4"));
    }

    #[test]
    fn running_out_of_tries_loses() {
        let mut g = game(GameMode::Classic);
        let mut out: Vec<u8> = Vec::new();
        let input = "crane\nslate\nirate\n";
        let summary = run_play(&mut g, word("grate"), input.as_bytes(), &mut out).unwrap();

        assert!(!summary.won);
        assert!(!summary.quit);
        assert_eq!(summary.rounds, 3);
    }

    #[test]
    fn quit_and_end_of_input() {
        let mut g = game(GameMode::Classic);
        let summary = run_play(&mut g, word("grate"), "crane\n:quit\n".as_bytes(), &mut Vec::<u8>::new()).unwrap();
        assert!(summary.quit);
        assert_eq!(summary.rounds, 1);

        let summary = run_play(&mut g, word("grate"), "".as_bytes(), &mut Vec::<u8>::new()).unwrap();
        assert!(summary.quit);
        assert_eq!(summary.rounds, 0);
    }

    #[test]
    fn command_spellings_are_playable_words() {
        let config = Config::with_words(4, 3, ["quit", "exit", "abcd"]).unwrap();
        let mut g = Game::new(config, GameMode::Classic).unwrap();
        let summary = run_play(&mut g, word("quit"), "exit\nquit\n".as_bytes(), &mut Vec::<u8>::new()).unwrap();

        assert!(summary.won);
        assert!(!summary.quit);
        assert_eq!(summary.rounds, 2);
    }

    #[test]
    fn single_letter_game_accepts_q() {
        let mut g = Game::new(Config::universe(1, 3).unwrap(), GameMode::Trivial).unwrap();
        let summary = run_play(&mut g, word("q"), "q\n".as_bytes(), &mut Vec::<u8>::new()).unwrap();
        assert!(summary.won);
        assert_eq!(summary.rounds, 1);
    }

    #[test]
    fn random_secret_from_list() {
        let g = game(GameMode::Classic);
        let secret = random_secret(g.dictionary()).unwrap();
        assert!(g.dictionary().contains(&secret));
    }

    #[test]
    fn random_secret_from_universe() {
        let dict = Dictionary::build(&Config::universe(7, 6).unwrap()).unwrap();
        assert_eq!(random_secret(&dict).unwrap().len(), 7);
    }

    #[test]
    fn random_secret_needs_words() {
        let config = Config::with_words(5, 6, ["abc"]).unwrap();
        let dict = Dictionary::build(&config).unwrap();
        assert!(random_secret(&dict).is_err());
    }
}
