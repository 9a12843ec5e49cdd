//! Wordle Engine
//!
//! A Wordle-style word game with three validity modes (trivial, classic and
//! hard) and a candidate-filtering solver that plays it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::Word;
//! use wordle_engine::game::{Config, Game, GameMode};
//! use wordle_engine::solver::{Solver, StrategyType};
//! use wordle_engine::commands::{SolveOutcome, solve};
//!
//! let config = Config::with_words(5, 6, ["crane", "grate", "irate"]).unwrap();
//! let mut game = Game::new(config.clone(), GameMode::Hard).unwrap();
//! let mut solver = Solver::new(StrategyType::Lexicographic, &config).unwrap();
//!
//! let result = solve(&mut game, &mut solver, Word::new("grate").unwrap()).unwrap();
//! assert_eq!(result.outcome, SolveOutcome::Won { guesses: 2 });
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
