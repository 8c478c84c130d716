//! Code representation and the index codec
//!
//! Every code of a game maps to a dense index in `[0, combinations)` by reading
//! its symbols as mixed-radix digits (radix = `symbols`), most significant digit
//! at position 0. The candidate bitset and the minimax search both work on
//! these indices.

use super::{Rules, SolverError};
use std::fmt;

/// An ordered sequence of symbol values
///
/// A `Code` is not tied to a [`Rules`] value; validation happens when it is
/// encoded or used in a fact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Vec<u8>);

impl Code {
    /// Wrap a symbol sequence
    #[must_use]
    pub fn new(symbols: impl Into<Vec<u8>>) -> Self {
        Self(symbols.into())
    }

    /// Symbols in position order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-length code
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Dense index of this code under `rules`
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidCode`] if the length differs from
    /// `rules.positions()` or a symbol is outside `[0, symbols)`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Rules};
    ///
    /// let rules = Rules::CLASSIC;
    /// assert_eq!(Code::new([0, 0, 1, 1]).encode(&rules).unwrap(), 7);
    /// assert_eq!(Code::new([5, 5, 5, 5]).encode(&rules).unwrap(), 1295);
    /// ```
    pub fn encode(&self, rules: &Rules) -> Result<usize, SolverError> {
        rules.validate(&self.0)?;

        Ok(self
            .0
            .iter()
            .fold(0, |index, &symbol| index * rules.symbols() + usize::from(symbol)))
    }

    /// Code stored at `index` under `rules`
    ///
    /// # Errors
    /// Returns [`SolverError::IndexOutOfRange`] if `index >= rules.combinations()`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Rules};
    ///
    /// let rules = Rules::new(4, 4).unwrap();
    /// assert_eq!(Code::decode(&rules, 255).unwrap().symbols(), &[3, 3, 3, 3]);
    /// assert!(Code::decode(&rules, 256).is_err());
    /// ```
    pub fn decode(rules: &Rules, index: usize) -> Result<Self, SolverError> {
        if index >= rules.combinations() {
            return Err(SolverError::IndexOutOfRange {
                index,
                combinations: rules.combinations(),
            });
        }

        let mut symbols = vec![0; rules.positions()];
        decode_into(rules, index, &mut symbols);
        Ok(Self(symbols))
    }
}

/// Write the digits of `index` into `buf`, least significant digit last
///
/// Callers guarantee `index < combinations` and `buf.len() == positions`.
pub(crate) fn decode_into(rules: &Rules, mut index: usize, buf: &mut [u8]) {
    let radix = rules.symbols();
    for slot in buf.iter_mut().rev() {
        // radix <= 256, so the remainder always fits a byte
        *slot = (index % radix) as u8;
        index /= radix;
    }
}

impl From<Vec<u8>> for Code {
    fn from(symbols: Vec<u8>) -> Self {
        Self(symbols)
    }
}

impl AsRef<[u8]> for Code {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|&symbol| symbol < 10) {
            for symbol in &self.0 {
                write!(f, "{symbol}")?;
            }
            Ok(())
        } else {
            let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
            write!(f, "{}", parts.join(","))
        }
    }
}

impl std::str::FromStr for Code {
    type Err = String;

    /// Parse `"2521"` (one digit per position) or `"2,5,2,1"` / `"10 3 7"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty code".to_string());
        }

        let separated = trimmed.contains(|c: char| c == ',' || c.is_whitespace());
        let symbols: Option<Vec<u8>> = if separated {
            trimmed
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .map(|part| part.parse::<u8>().ok())
                .collect()
        } else {
            trimmed
                .chars()
                .map(|c| c.to_digit(10).and_then(|d| u8::try_from(d).ok()))
                .collect()
        };

        symbols
            .map(Self)
            .ok_or_else(|| format!("Invalid code string: {s}"))
    }
}
