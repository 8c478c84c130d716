//! Observed (guess, score) pairs

use super::{Code, Score};
use std::fmt;

/// A guess together with the score the oracle returned for it
///
/// Every remaining candidate must reproduce `score` when scored against `guess`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    pub guess: Code,
    pub score: Score,
}

impl Fact {
    #[must_use]
    pub const fn new(guess: Code, score: Score) -> Self {
        Self { guess, score }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.guess, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pairs_guess_and_score() {
        let fact = Fact::new(Code::new([0, 0, 1, 1]), Score::new(1, 0));
        assert_eq!(fact.to_string(), "0011 -> 1/0");
    }
}
