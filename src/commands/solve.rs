//! Code solving command
//!
//! Plays a full game against a known secret and records the solution path.

use crate::core::{Code, Fact, Score};
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result, bail};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: Code,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            max_guesses: 10,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `config.secret` using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret is not a valid code for the solver's rules
/// - The solver cannot provide a guess (contradictory history)
pub fn solve_code<S: Strategy>(config: SolveConfig, solver: &Solver<S>) -> Result<SolveResult> {
    let rules = solver.rules();
    rules
        .validate(config.secret.symbols())
        .with_context(|| format!("Invalid secret {}", config.secret))?;

    let mut facts: Vec<Fact> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for turn in 1..=config.max_guesses {
        let remaining = solver.remaining(&facts)?;
        let candidates_before = remaining.len();

        let guess = solver.select_from(&remaining)?;
        let score = Score::calculate(config.secret.symbols(), guess.symbols())?;
        log::info!("turn {turn}: {guess} scored {score} ({candidates_before} candidates)");

        let fact = Fact::new(guess.clone(), score);
        let candidates_after = remaining.refine(rules, &fact)?.len();
        facts.push(fact);

        guesses.push(GuessStep {
            guess,
            score,
            candidates_before,
            candidates_after,
        });

        if score.is_solved(rules) {
            return Ok(SolveResult {
                success: true,
                guesses,
                secret: config.secret,
            });
        }

        if candidates_after == 0 {
            bail!("No candidates remaining after {turn} guesses");
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        secret: config.secret,
    })
}
