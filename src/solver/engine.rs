//! Main Mastermind solver interface

use super::candidates::{CandidateSet, enumerate_candidates};
use super::strategy::Strategy;
use crate::core::{Code, Fact, Rules, SolverError};

/// Main Mastermind solver
///
/// Coordinates the solving process for one rule set using a given strategy.
/// The fact history stays with the caller and is passed into every query.
pub struct Solver<S: Strategy> {
    strategy: S,
    rules: Rules,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy and rules
    pub const fn new(strategy: S, rules: Rules) -> Self {
        Self { strategy, rules }
    }

    /// Rules this solver plays under
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Get the next best guess given previous facts
    ///
    /// # Errors
    /// - [`SolverError::InvalidCode`] if a fact holds an invalid guess
    /// - [`SolverError::EmptyCandidateSet`] if the facts contradict each other
    pub fn next_guess(&self, facts: &[Fact]) -> Result<Code, SolverError> {
        let remaining = self.remaining(facts)?;
        self.select_from(&remaining)
    }

    /// Pick a guess from candidates the caller already enumerated
    ///
    /// # Errors
    /// - [`SolverError::RulesMismatch`] if `remaining` was built for other rules
    /// - [`SolverError::EmptyCandidateSet`] if `remaining` is empty
    pub fn select_from(&self, remaining: &CandidateSet) -> Result<Code, SolverError> {
        self.strategy.select_guess(&self.rules, remaining)
    }

    /// Codes consistent with `facts` as a bitset
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidCode`] if a fact holds an invalid guess.
    pub fn remaining(&self, facts: &[Fact]) -> Result<CandidateSet, SolverError> {
        enumerate_candidates(&self.rules, facts)
    }

    /// Count how many codes remain given the facts
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidCode`] if a fact holds an invalid guess.
    pub fn count_candidates(&self, facts: &[Fact]) -> Result<usize, SolverError> {
        self.remaining(facts).map(|set| set.len())
    }

    /// Decoded codes consistent with the facts, in index order
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidCode`] if a fact holds an invalid guess.
    pub fn candidates(&self, facts: &[Fact]) -> Result<Vec<Code>, SolverError> {
        self.remaining(facts)?.codes(&self.rules)
    }
}
