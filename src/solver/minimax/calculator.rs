//! Minimax worst-case calculation for Mastermind scores
//!
//! Given a guess and the remaining candidates, computes the largest number of
//! candidates that could survive any score the guess might receive.

use crate::core::{Code, Fact, Rules, Score, SolverError};
use crate::solver::candidates::enumerate_candidates;
use crate::solver::scores::enumerate_scores;
use rustc_hash::FxHashMap;

/// Worst-case remaining candidates after playing `guess`
///
/// # Strategy
/// For each score the guess could receive:
/// - Count how many candidates would produce that score
/// - Return the maximum count (worst case)
///
/// Every candidate lands in exactly one score bucket, so this equals the
/// per-hypothesis re-enumeration in [`worst_case_exhaustive`].
///
/// Candidates and guess must share one length of at most
/// [`MAX_POSITIONS`](crate::core::MAX_POSITIONS); callers decode both from the
/// same validated [`Rules`].
#[must_use]
pub(crate) fn calculate_max_remaining(guess: &[u8], candidates: &[&[u8]]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let score_counts = group_by_score(guess, candidates);
    score_counts.values().max().copied().unwrap_or(0)
}

/// Group candidates by the score they give the guess
fn group_by_score(guess: &[u8], candidates: &[&[u8]]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let score = Score::calculate_unchecked(candidate, guess);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}

/// Worst case of `guess` computed straight from the definition
///
/// Hypothesizes every score from [`enumerate_scores`], appends it as a fact and
/// re-enumerates the whole code space. Cubic in the space size; the selector
/// uses `calculate_max_remaining` and this stays as the reference it must
/// agree with.
///
/// # Errors
/// Returns [`SolverError::InvalidCode`] if `guess` or any fact is invalid under `rules`.
pub fn worst_case_exhaustive(
    rules: &Rules,
    facts: &[Fact],
    guess: &Code,
) -> Result<usize, SolverError> {
    rules.validate(guess.symbols())?;

    let mut hypothesis = facts.to_vec();
    let mut worst = 0;

    for score in enumerate_scores(rules) {
        hypothesis.push(Fact::new(guess.clone(), score));
        worst = worst.max(enumerate_candidates(rules, &hypothesis)?.len());
        hypothesis.pop();
    }

    Ok(worst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(rules: &Rules, facts: &[Fact]) -> Vec<Code> {
        enumerate_candidates(rules, facts)
            .unwrap()
            .codes(rules)
            .unwrap()
    }

    fn refs(codes: &[Code]) -> Vec<&[u8]> {
        codes.iter().map(Code::symbols).collect()
    }

    #[test]
    fn max_remaining_empty_candidates() {
        assert_eq!(calculate_max_remaining(&[0, 0, 1, 1], &[]), 0);
    }

    #[test]
    fn max_remaining_separates_two_position_codes() {
        let candidates: [&[u8]; 3] = [&[0, 1], &[1, 0], &[1, 1]];

        // [0, 1] tells all three apart
        assert_eq!(calculate_max_remaining(&[0, 1], &candidates), 1);
        // [2, 2] learns nothing
        assert_eq!(calculate_max_remaining(&[2, 2], &candidates), 3);
    }

    #[test]
    fn max_remaining_single_candidate() {
        let candidates: [&[u8]; 1] = [&[2, 5, 2, 1]];
        assert_eq!(calculate_max_remaining(&[0, 0, 1, 1], &candidates), 1);
    }

    #[test]
    fn knuth_opening_worst_cases() {
        // Worst cases of the five opening shapes from Knuth's paper
        let rules = Rules::CLASSIC;
        let all = codes(&rules, &[]);
        let all = refs(&all);

        assert_eq!(calculate_max_remaining(&[0, 0, 0, 0], &all), 625);
        assert_eq!(calculate_max_remaining(&[0, 0, 0, 1], &all), 317);
        assert_eq!(calculate_max_remaining(&[0, 0, 1, 1], &all), 256);
        assert_eq!(calculate_max_remaining(&[0, 0, 1, 2], &all), 276);
        assert_eq!(calculate_max_remaining(&[0, 1, 2, 3], &all), 312);
    }

    #[test]
    fn grouping_covers_every_candidate() {
        let rules = Rules::new(3, 3).unwrap();
        let all = codes(&rules, &[]);
        let all = refs(&all);

        let groups = group_by_score(&[0, 1, 2], &all);
        assert_eq!(groups.values().sum::<usize>(), rules.combinations());
        assert!(groups.len() <= enumerate_scores(&rules).len());
    }

    #[test]
    fn partition_agrees_with_exhaustive_definition() {
        let rules = Rules::new(3, 3).unwrap();
        let secret = [2, 0, 1];
        let first = Code::new([0, 0, 1]);
        let facts = vec![Fact::new(
            first.clone(),
            Score::calculate(&secret, first.symbols()).unwrap(),
        )];

        for history in [&facts[..0], &facts[..]] {
            let remaining = codes(&rules, history);
            let remaining = refs(&remaining);

            for index in 0..rules.combinations() {
                let guess = Code::decode(&rules, index).unwrap();
                assert_eq!(
                    calculate_max_remaining(guess.symbols(), &remaining),
                    worst_case_exhaustive(&rules, history, &guess).unwrap(),
                    "worst case differs for guess {guess}"
                );
            }
        }
    }

    #[test]
    fn exhaustive_rejects_invalid_guess() {
        let rules = Rules::CLASSIC;
        assert!(worst_case_exhaustive(&rules, &[], &Code::new([0, 0, 1])).is_err());
    }
}
