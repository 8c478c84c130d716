//! Score space survey
//!
//! Compares the listed score space with the scores actually produced by
//! scoring every code against every guess.

use crate::core::{Rules, Score};
use crate::solver::{enumerate_scores, observed_scores};
use anyhow::{Result, ensure};
use std::collections::BTreeSet;

/// Largest space the quadratic survey will scan
pub const SURVEY_LIMIT: usize = 1 << 14;

/// Listed and observed score spaces for one rule set
pub struct ScoreSurvey {
    pub rules: Rules,
    pub listed: Vec<Score>,
    pub observed: BTreeSet<Score>,
}

impl ScoreSurvey {
    /// Listed scores that no code/guess pair produced
    #[must_use]
    pub fn unreachable(&self) -> Vec<Score> {
        self.listed
            .iter()
            .filter(|score| !self.observed.contains(score))
            .copied()
            .collect()
    }

    /// Observed scores missing from the listing; always empty for a correct listing
    #[must_use]
    pub fn unlisted(&self) -> Vec<Score> {
        self.observed
            .iter()
            .filter(|score| !self.listed.contains(score))
            .copied()
            .collect()
    }
}

/// Survey the score space of `rules`
///
/// # Errors
///
/// Returns an error if the combination space exceeds [`SURVEY_LIMIT`].
pub fn survey_scores(rules: &Rules) -> Result<ScoreSurvey> {
    ensure!(
        rules.combinations() <= SURVEY_LIMIT,
        "{} combinations is too many for an exhaustive survey (limit {SURVEY_LIMIT})",
        rules.combinations()
    );

    Ok(ScoreSurvey {
        rules: *rules,
        listed: enumerate_scores(rules),
        observed: observed_scores(rules),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_survey_is_complete() {
        let survey = survey_scores(&Rules::CLASSIC).unwrap();

        assert_eq!(survey.listed.len(), 14);
        assert!(survey.unreachable().is_empty());
        assert!(survey.unlisted().is_empty());
    }

    #[test]
    fn two_symbols_leave_unreachable_scores() {
        let survey = survey_scores(&Rules::new(4, 2).unwrap()).unwrap();

        // No exact match forces the guess to be the complement of the code, which
        // always yields an even number of partial matches
        assert!(survey.unlisted().is_empty());
        assert!(survey.unreachable().contains(&Score::new(0, 3)));
    }

    #[test]
    fn large_spaces_are_refused() {
        assert!(survey_scores(&Rules::new(8, 4).unwrap()).is_err());
    }
}
