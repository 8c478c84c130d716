//! The score space of a game
//!
//! Lists every `(exact, partial)` pair a guess can receive, which bounds the
//! hypotheses the minimax search has to consider.

use crate::core::{Rules, Score, decode_into};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// All scores a guess can receive under `rules`, in `(exact, partial)` order
///
/// Every pair with `exact + partial <= positions` is included except
/// `(positions - 1, 1)`: once all but one position match exactly, the single
/// leftover code symbol has no other unmatched guess position to pair with, so
/// it can never register as a partial match. With one position the excluded
/// pair is `(0, 1)`, which that game cannot produce anyway.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{Rules, Score};
/// use mastermind_minimax::solver::enumerate_scores;
///
/// let scores = enumerate_scores(&Rules::CLASSIC);
/// assert_eq!(scores.len(), 14);
/// assert!(!scores.contains(&Score::new(3, 1)));
/// ```
#[must_use]
pub fn enumerate_scores(rules: &Rules) -> Vec<Score> {
    let positions = rules.positions();
    let mut scores = Vec::with_capacity((positions + 1) * (positions + 2) / 2);

    for exact in 0..=positions {
        for partial in 0..=positions - exact {
            if exact + 1 == positions && partial == 1 {
                continue;
            }
            // positions <= MAX_POSITIONS, so both counts fit a byte
            scores.push(Score::new(exact as u8, partial as u8));
        }
    }

    scores
}

/// Scores actually produced by scoring every code against every guess
///
/// Quadratic in the combination space; intended for checking
/// [`enumerate_scores`] on small games.
#[must_use]
pub fn observed_scores(rules: &Rules) -> BTreeSet<Score> {
    (0..rules.combinations())
        .into_par_iter()
        .map(|code_index| {
            let mut code = vec![0; rules.positions()];
            let mut guess = vec![0; rules.positions()];
            decode_into(rules, code_index, &mut code);

            let mut seen = BTreeSet::new();
            for guess_index in 0..rules.combinations() {
                decode_into(rules, guess_index, &mut guess);
                seen.insert(Score::calculate_unchecked(&code, &guess));
            }
            seen
        })
        .reduce(BTreeSet::new, |mut acc, seen| {
            acc.extend(seen);
            acc
        })
}
