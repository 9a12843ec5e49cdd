//! Terminal output formatting
//!
//! Plain protocol transcripts plus coloured display for humans.

pub mod display;
pub mod formatters;
pub mod transcript;

pub use display::print_solve_result;
