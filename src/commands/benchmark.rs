//! Benchmark command
//!
//! Plays every secret (or the first few) and collects guess statistics.

use crate::core::{Code, Fact, Score};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Games abandoned after this many guesses count as failures
pub const GUESS_LIMIT: usize = 10;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub worst_codes: Vec<Code>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Run the solver against each secret in `secrets`
///
/// A progress bar is drawn on stderr when `show_progress` is set.
///
/// # Errors
///
/// Returns an error if a secret is invalid for the solver's rules or the solver
/// fails to produce a guess.
///
/// # Panics
///
/// Panics if the hard-coded progress bar template is malformed.
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    secrets: &[Code],
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let rules = solver.rules();
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(secrets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("valid progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut worst_codes = Vec::new();

    for secret in secrets {
        rules
            .validate(secret.symbols())
            .with_context(|| format!("Invalid secret {secret}"))?;

        let mut facts: Vec<Fact> = Vec::new();
        let mut success = false;

        while facts.len() < GUESS_LIMIT {
            let guess = solver
                .next_guess(&facts)
                .with_context(|| format!("Solver gave up on {secret}"))?;
            let score = Score::calculate(secret.symbols(), guess.symbols())?;
            facts.push(Fact::new(guess, score));

            if score.is_solved(rules) {
                success = true;
                break;
            }
        }

        let guesses = facts.len();
        if success {
            solved += 1;
        }
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        if guesses > max_guesses {
            max_guesses = guesses;
            worst_codes.clear();
        }
        if guesses == max_guesses {
            worst_codes.push(secret.clone());
        }
        *distribution.entry(guesses).or_insert(0) += 1;

        pb.set_message(format!("{secret} in {guesses}"));
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_codes = secrets.len();
    log::info!("benchmarked {total_codes} codes in {:.2}s", duration.as_secs_f64());

    Ok(BenchmarkResult {
        total_codes,
        solved,
        total_guesses,
        average_guesses: total_guesses as f64 / total_codes.max(1) as f64,
        min_guesses: if total_codes == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        worst_codes,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::{ConsistentStrategy, MinimaxStrategy};

    fn all_codes(rules: &Rules) -> Vec<Code> {
        (0..rules.combinations())
            .map(|index| Code::decode(rules, index).unwrap())
            .collect()
    }

    #[test]
    fn benchmark_runs() {
        let rules = Rules::new(3, 3).unwrap();
        let solver = Solver::new(MinimaxStrategy, rules);
        let result = run_benchmark(&solver, &all_codes(&rules), false).unwrap();

        assert_eq!(result.total_codes, 27);
        assert_eq!(result.solved, 27);
        assert!(result.average_guesses >= 1.0);
        assert_eq!(result.min_guesses, 1);
        assert!(result.max_guesses < GUESS_LIMIT);
        assert!(!result.worst_codes.is_empty());
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let rules = Rules::new(3, 4).unwrap();
        let solver = Solver::new(ConsistentStrategy, rules);
        let result = run_benchmark(&solver, &all_codes(&rules), false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_codes);

        let weighted: usize = result.distribution.iter().map(|(g, n)| g * n).sum();
        assert_eq!(weighted, result.total_guesses);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let rules = Rules::new(2, 4).unwrap();
        let solver = Solver::new(MinimaxStrategy, rules);
        let result = run_benchmark(&solver, &all_codes(&rules), false).unwrap();

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        for code in &result.worst_codes {
            assert!(code.encode(&rules).is_ok());
        }
    }

    #[test]
    fn benchmark_empty_code_list() {
        let solver = Solver::new(MinimaxStrategy, Rules::CLASSIC);
        let result = run_benchmark(&solver, &[], false).unwrap();

        assert_eq!(result.total_codes, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_rejects_invalid_secret() {
        let solver = Solver::new(MinimaxStrategy, Rules::CLASSIC);
        assert!(run_benchmark(&solver, &[Code::new([7, 7, 7, 7])], false).is_err());
    }
}
