//! Mastermind solving algorithms
//!
//! Candidate filtering, score enumeration and the guess selection strategies.

mod candidates;
mod engine;
pub mod minimax;
mod scores;
pub mod strategy;

pub use candidates::{CandidateSet, Iter, enumerate_candidates, is_consistent};
pub use engine::Solver;
pub use minimax::find_best_guess;
pub use scores::{enumerate_scores, observed_scores};
pub use strategy::{ConsistentStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
