//! Game engine
//!
//! Configuration, dictionary building, validity policies and the round-based
//! state machine that hands out feedback.

mod config;
pub mod dictionary;
mod engine;
mod error;
mod mode;

pub use config::Config;
pub use dictionary::{Dictionary, DictionaryError, MAX_ENUMERABLE_LENGTH, all_words};
pub use engine::{Game, GameState};
pub use error::GameError;
pub use mode::GameMode;
