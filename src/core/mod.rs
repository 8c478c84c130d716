//! Core domain types for Mastermind
//!
//! Rules, codes, scores and facts. Everything here is pure and free of
//! solver policy.

mod code;
mod error;
mod fact;
pub(crate) mod rules;
mod score;

pub(crate) use code::decode_into;
pub use code::Code;
pub use error::SolverError;
pub use fact::Fact;
pub use rules::{MAX_COMBINATIONS, MAX_POSITIONS, MAX_SYMBOLS, Rules};
pub use score::Score;
