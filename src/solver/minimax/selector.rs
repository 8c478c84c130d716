//! Minimax-based guess selection
//!
//! Knuth's strategy: always play the guess that minimizes the worst-case
//! number of remaining candidates, searching the whole code space rather than
//! only the codes still consistent.

use super::calculator::calculate_max_remaining;
use crate::core::{Code, Fact, Rules, SolverError, decode_into};
use crate::solver::candidates::{CandidateSet, enumerate_candidates};
use rayon::prelude::*;

/// A chosen guess with its worst-case remaining candidate count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub guess: Code,
    pub index: usize,
    pub worst_case: usize,
}

/// Choose the next guess for `facts` under `rules`
///
/// With one or two candidates left, the first of them is returned. Otherwise
/// every code is tried as a guess and the one with the smallest worst case
/// wins; ties go to the lowest index.
///
/// # Errors
/// - [`SolverError::InvalidCode`] if a fact holds an invalid guess
/// - [`SolverError::EmptyCandidateSet`] if no code satisfies every fact
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{Code, Rules};
/// use mastermind_minimax::solver::minimax::find_best_guess;
///
/// let guess = find_best_guess(&Rules::CLASSIC, &[]).unwrap();
/// assert_eq!(guess, Code::new([0, 0, 1, 1]));
/// ```
pub fn find_best_guess(rules: &Rules, facts: &[Fact]) -> Result<Code, SolverError> {
    let remaining = enumerate_candidates(rules, facts)?;
    select_best_guess(rules, &remaining).map(|evaluation| evaluation.guess)
}

/// Choose the next guess given an already computed candidate set
///
/// # Errors
/// - [`SolverError::RulesMismatch`] if `remaining` was built for other rules
/// - [`SolverError::EmptyCandidateSet`] if `remaining` is empty
pub fn select_best_guess(
    rules: &Rules,
    remaining: &CandidateSet,
) -> Result<Evaluation, SolverError> {
    remaining.check_rules(rules)?;
    let first = remaining.first().ok_or(SolverError::EmptyCandidateSet)?;

    if remaining.len() <= 2 {
        log::debug!(
            "{} candidates left, playing candidate #{first}",
            remaining.len()
        );
        return Ok(Evaluation {
            guess: Code::decode(rules, first)?,
            index: first,
            worst_case: 1,
        });
    }

    let candidates = remaining.codes(rules)?;
    let candidate_refs: Vec<&[u8]> = candidates.iter().map(Code::symbols).collect();

    let (index, worst_case) = (0..rules.combinations())
        .into_par_iter()
        .map_init(
            || vec![0; rules.positions()],
            |guess, index| {
                decode_into(rules, index, guess);
                (index, calculate_max_remaining(guess.as_slice(), &candidate_refs))
            },
        )
        .min_by_key(|&(index, worst)| (worst, index))
        .ok_or(SolverError::EmptyCandidateSet)?;

    log::debug!(
        "best of {} guesses against {} candidates: #{index} (worst case {worst_case})",
        rules.combinations(),
        remaining.len()
    );

    Ok(Evaluation {
        guess: Code::decode(rules, index)?,
        index,
        worst_case,
    })
}
