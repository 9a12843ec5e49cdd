//! Command implementations

pub mod batch;
pub mod play;
pub mod protocol;
pub mod solve;
pub mod test_all;

pub use batch::{BatchReport, run_batch};
pub use play::{PlaySummary, random_secret, run_play};
pub use protocol::{Request, parse_request, run_request};
pub use solve::{GuessStep, SolveEvent, SolveOutcome, SolveResult, solve};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
