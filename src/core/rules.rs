//! Game parameters
//!
//! A [`Rules`] value fixes the number of positions and symbols for one game and
//! precomputes the size of the combination space.

use super::SolverError;
use std::fmt;

/// Most positions a code may have
///
/// Scoring keeps its bookkeeping in fixed stack arrays of this size.
pub const MAX_POSITIONS: usize = 32;

/// Most distinct symbols; symbol values are stored as bytes
pub const MAX_SYMBOLS: usize = 256;

/// Largest combination space the candidate bitset is allowed to cover
pub const MAX_COMBINATIONS: usize = 1 << 26;

/// Immutable parameters of a game instance
///
/// Invariant: `combinations == symbols.pow(positions)` with both parameters at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    positions: usize,
    symbols: usize,
    combinations: usize,
}

impl Rules {
    /// The reference configuration from Knuth's paper: 4 positions, 6 symbols
    pub const CLASSIC: Self = Self {
        positions: 4,
        symbols: 6,
        combinations: 1296,
    };

    /// Create rules for `positions` slots drawn from `symbols` values
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidRules`] if either parameter is zero, exceeds
    /// [`MAX_POSITIONS`] / [`MAX_SYMBOLS`], or the combination space exceeds
    /// [`MAX_COMBINATIONS`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::Rules;
    ///
    /// let rules = Rules::new(4, 6).unwrap();
    /// assert_eq!(rules.combinations(), 1296);
    ///
    /// assert!(Rules::new(0, 6).is_err());
    /// ```
    pub fn new(positions: usize, symbols: usize) -> Result<Self, SolverError> {
        let invalid = SolverError::InvalidRules { positions, symbols };

        if positions == 0 || symbols == 0 || positions > MAX_POSITIONS || symbols > MAX_SYMBOLS {
            return Err(invalid);
        }

        let exponent = u32::try_from(positions).map_err(|_| invalid.clone())?;
        let combinations = symbols
            .checked_pow(exponent)
            .filter(|&n| n <= MAX_COMBINATIONS)
            .ok_or(invalid)?;

        Ok(Self {
            positions,
            symbols,
            combinations,
        })
    }

    /// Number of slots in a code
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> usize {
        self.positions
    }

    /// Number of distinct symbol values
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> usize {
        self.symbols
    }

    /// Size of the code space, `symbols ^ positions`
    #[inline]
    #[must_use]
    pub const fn combinations(&self) -> usize {
        self.combinations
    }

    /// Check that `code` has `positions` symbols, each in `[0, symbols)`
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidCode`] otherwise.
    pub fn validate(&self, code: &[u8]) -> Result<(), SolverError> {
        let in_range = code.iter().all(|&symbol| usize::from(symbol) < self.symbols);

        if code.len() == self.positions && in_range {
            Ok(())
        } else {
            Err(SolverError::InvalidCode {
                code: code.to_vec(),
                positions: self.positions,
                symbols: self.symbols,
            })
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} positions x {} symbols ({} combinations)",
            self.positions, self.symbols, self.combinations
        )
    }
}
