//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::{Code, Rules, SolverError};
use crate::solver::candidates::CandidateSet;

/// A strategy for picking the next guess from the current candidate set
pub trait Strategy {
    /// Select the next guess given the codes still consistent with the history
    ///
    /// # Errors
    /// Returns [`SolverError::EmptyCandidateSet`] if `remaining` is empty.
    fn select_guess(&self, rules: &Rules, remaining: &CandidateSet) -> Result<Code, SolverError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Knuth's minimax (default)
    Minimax(MinimaxStrategy),
    /// Lowest-index consistent candidate
    Consistent(ConsistentStrategy),
    /// Random consistent candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, rules: &Rules, remaining: &CandidateSet) -> Result<Code, SolverError> {
        match self {
            Self::Minimax(s) => s.select_guess(rules, remaining),
            Self::Consistent(s) => s.select_guess(rules, remaining),
            Self::Random(s) => s.select_guess(rules, remaining),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "knuth", "consistent", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "consistent" | "first" => Self::Consistent(ConsistentStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    /// Canonical name of the strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::Consistent(_) => "consistent",
            Self::Random(_) => "random",
        }
    }
}

/// Knuth's minimax strategy
///
/// Always selects the guess that minimizes worst-case remaining candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, rules: &Rules, remaining: &CandidateSet) -> Result<Code, SolverError> {
        super::minimax::select_best_guess(rules, remaining).map(|evaluation| evaluation.guess)
    }
}

/// Always plays the lowest-index code that is still possible
pub struct ConsistentStrategy;

impl Strategy for ConsistentStrategy {
    fn select_guess(&self, rules: &Rules, remaining: &CandidateSet) -> Result<Code, SolverError> {
        remaining.check_rules(rules)?;
        let first = remaining.first().ok_or(SolverError::EmptyCandidateSet)?;
        Code::decode(rules, first)
    }
}

/// Random strategy
///
/// Plays a uniformly random code among those still possible.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, rules: &Rules, remaining: &CandidateSet) -> Result<Code, SolverError> {
        use rand::Rng;

        remaining.check_rules(rules)?;
        if remaining.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        let pick = rand::rng().random_range(0..remaining.len());
        let index = remaining
            .iter()
            .nth(pick)
            .ok_or(SolverError::EmptyCandidateSet)?;
        Code::decode(rules, index)
    }
}
