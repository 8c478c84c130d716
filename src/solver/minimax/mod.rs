//! Knuth's minimax solver
//!
//! Implements worst-case minimization for Mastermind guess selection.

mod calculator;
mod selector;

pub use calculator::worst_case_exhaustive;
pub use selector::{Evaluation, find_best_guess, select_best_guess};
