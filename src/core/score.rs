//! Mastermind scoring
//!
//! A score counts exact matches (right symbol, right position) and partial
//! matches (right symbol, wrong position). Partial matches use a one-to-one
//! matching so that repeated symbols are never counted twice.

use super::rules::MAX_POSITIONS;
use super::{Rules, SolverError};
use std::fmt;

/// Outcome of scoring a guess against a code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Score {
    exact: u8,
    partial: u8,
}

impl Score {
    /// Create a score from its two counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// The score of a fully solved code under `rules`
    #[must_use]
    pub fn solved(rules: &Rules) -> Self {
        // positions <= MAX_POSITIONS, which fits a byte
        Self::new(rules.positions() as u8, 0)
    }

    /// Positions matching in value and place
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Additional value matches at other positions
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// True when every position matched exactly
    #[inline]
    #[must_use]
    pub fn is_solved(self, rules: &Rules) -> bool {
        usize::from(self.exact) == rules.positions()
    }

    /// Score `guess` against `code`
    ///
    /// # Algorithm
    /// 1. First pass: exact matches consume the position in both sequences
    /// 2. Second pass: every unconsumed code position takes the first unconsumed
    ///    guess position at a different index holding the same symbol
    ///
    /// # Errors
    /// Returns [`SolverError::LengthMismatch`] if the lengths differ, either side is
    /// empty, or the length exceeds the supported number of positions.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::Score;
    ///
    /// let score = Score::calculate(&[1, 2, 3, 4], &[1, 1, 2, 5]).unwrap();
    /// assert_eq!((score.exact(), score.partial()), (1, 1));
    ///
    /// assert!(Score::calculate(&[1, 2], &[1, 2, 3]).is_err());
    /// ```
    pub fn calculate(code: &[u8], guess: &[u8]) -> Result<Self, SolverError> {
        if code.is_empty() || code.len() != guess.len() || code.len() > MAX_POSITIONS {
            return Err(SolverError::LengthMismatch {
                code: code.len(),
                guess: guess.len(),
            });
        }

        Ok(Self::calculate_unchecked(code, guess))
    }

    /// Score two sequences already known to be non-empty, equal length and at
    /// most [`MAX_POSITIONS`] long
    pub(crate) fn calculate_unchecked(code: &[u8], guess: &[u8]) -> Self {
        let len = code.len();
        let mut code_used = [false; MAX_POSITIONS];
        let mut guess_used = [false; MAX_POSITIONS];
        let mut result = Self::default();

        for i in 0..len {
            if code[i] == guess[i] {
                code_used[i] = true;
                guess_used[i] = true;
                result.exact += 1;
            }
        }

        for i in 0..len {
            if code_used[i] {
                continue;
            }

            let matched = (0..len).find(|&j| j != i && !guess_used[j] && guess[j] == code[i]);
            if let Some(j) = matched {
                guess_used[j] = true;
                result.partial += 1;
            }
        }

        result
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.exact, self.partial)
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    /// Parse `"1,2"`, `"1 2"` or `"1/2"` as exact then partial
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [exact, partial] => match (exact.parse(), partial.parse()) {
                (Ok(exact), Ok(partial)) => Ok(Self::new(exact, partial)),
                _ => Err(format!("Invalid score string: {s}")),
            },
            _ => Err(format!("Invalid score string: {s}")),
        }
    }
}
