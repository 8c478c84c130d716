//! Command implementations

pub mod benchmark;
pub mod scores;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use scores::{ScoreSurvey, survey_scores};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_code};
