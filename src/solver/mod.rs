//! Wordle solving
//!
//! A candidate-filtering solver with pluggable guess selection.

mod engine;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{LexicographicStrategy, RandomStrategy, Strategy, StrategyType};
