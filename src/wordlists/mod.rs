//! Word lists
//!
//! Loading dictionary files for the command-line driver.

pub mod loader;

pub use loader::load_from_file;
