//! Mastermind Solver
//!
//! Breaks Mastermind codes with Knuth's minimax strategy: every guess is the
//! code that minimizes the worst-case number of remaining possibilities.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_minimax::core::{Fact, Rules, Score};
//! use mastermind_minimax::solver::find_best_guess;
//!
//! let rules = Rules::new(4, 6).unwrap();
//! let secret = [2, 5, 2, 1];
//! let mut facts: Vec<Fact> = Vec::new();
//!
//! loop {
//!     let guess = find_best_guess(&rules, &facts).unwrap();
//!     let score = Score::calculate(&secret, guess.symbols()).unwrap();
//!     facts.push(Fact::new(guess, score));
//!     if score.is_solved(&rules) {
//!         break;
//!     }
//! }
//! assert!(facts.len() <= 5);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
