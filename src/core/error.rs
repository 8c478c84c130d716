//! Error type shared by the codec, scorer and solver

use std::fmt;

/// Contract violations raised by the engine
///
/// None of these are retried internally. They signal that the caller passed
/// bad data (or, for [`SolverError::EmptyCandidateSet`], that the scoring
/// oracle contradicted itself).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Rule parameters are zero, too large, or overflow the combination space
    InvalidRules { positions: usize, symbols: usize },
    /// A code has the wrong length or a symbol outside `[0, symbols)`
    InvalidCode {
        code: Vec<u8>,
        positions: usize,
        symbols: usize,
    },
    /// Code and guess differ in length, or either is empty
    LengthMismatch { code: usize, guess: usize },
    /// Decode requested an index at or beyond `combinations`
    IndexOutOfRange { index: usize, combinations: usize },
    /// A candidate set was built for a different code space than the rules given
    RulesMismatch { capacity: usize, combinations: usize },
    /// The recorded facts admit no code at all
    EmptyCandidateSet,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRules { positions, symbols } => write!(
                f,
                "Invalid rules: {positions} positions and {symbols} symbols is not a supported game"
            ),
            Self::InvalidCode {
                code,
                positions,
                symbols,
            } => write!(
                f,
                "Invalid code {code:?}: expected {positions} symbols in range 0..{symbols}"
            ),
            Self::LengthMismatch { code, guess } => write!(
                f,
                "Code and guess must be non-empty and equal length, got {code} and {guess}"
            ),
            Self::IndexOutOfRange {
                index,
                combinations,
            } => write!(
                f,
                "Index {index} is out of range for {combinations} combinations"
            ),
            Self::RulesMismatch {
                capacity,
                combinations,
            } => write!(
                f,
                "Candidate set covers {capacity} codes but the rules describe {combinations}"
            ),
            Self::EmptyCandidateSet => {
                write!(f, "No code is consistent with the recorded scores")
            }
        }
    }
}

impl std::error::Error for SolverError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_values() {
        let err = SolverError::IndexOutOfRange {
            index: 1296,
            combinations: 1296,
        };
        assert_eq!(
            err.to_string(),
            "Index 1296 is out of range for 1296 combinations"
        );

        let err = SolverError::LengthMismatch { code: 4, guess: 3 };
        assert!(err.to_string().contains("4 and 3"));

        let err = SolverError::RulesMismatch {
            capacity: 1296,
            combinations: 256,
        };
        assert!(err.to_string().contains("1296 codes"));
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = SolverError::EmptyCandidateSet.into();
        assert_eq!(
            err.to_string(),
            "No code is consistent with the recorded scores"
        );
    }
}
