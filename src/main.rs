//! Mastermind Solver - CLI
//!
//! Breaks Mastermind codes with Knuth's minimax strategy.
//! Classic game (4 positions, 6 symbols): every code in at most 5 guesses.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_minimax::{
    commands::{SolveConfig, run_benchmark, run_simple, solve_code, survey_scores},
    core::{Code, Rules},
    output::{print_benchmark_result, print_score_survey, print_solve_result},
    solver::{Solver, Strategy, StrategyType},
};

#[derive(Parser)]
#[command(
    name = "mastermind_minimax",
    about = "Mastermind code breaker using Knuth's minimax strategy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default), consistent, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Number of positions in a code
    #[arg(short, long, global = true, default_value = "4")]
    positions: usize,

    /// Number of distinct symbols (colours)
    #[arg(short = 'c', long, global = true, default_value = "6")]
    symbols: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you hold the secret and enter the scores (default)
    Simple,

    /// Solve a specific secret code
    Solve {
        /// The secret, e.g. 2521 or 2,5,2,1
        secret: String,

        /// Show candidate counts for every turn
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short, long, default_value = "10")]
        max_guesses: usize,
    },

    /// Solve every possible secret and report statistics
    Benchmark {
        /// Only test the first N secrets in index order
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Compare the listed score space with exhaustively observed scores
    Scores,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let rules = Rules::new(cli.positions, cli.symbols)?;
    let strategy = StrategyType::from_name(&cli.strategy);
    log::info!("playing {rules} with the {} strategy", strategy.name());

    let solver = Solver::new(strategy, rules);

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&solver),
        Commands::Solve {
            secret,
            verbose,
            max_guesses,
        } => run_solve_command(&solver, &secret, verbose, max_guesses),
        Commands::Benchmark { limit } => run_benchmark_command(&solver, limit),
        Commands::Scores => {
            let survey = survey_scores(&rules)?;
            print_score_survey(&survey);
            Ok(())
        }
    }
}

fn run_solve_command<S: Strategy>(
    solver: &Solver<S>,
    secret: &str,
    verbose: bool,
    max_guesses: usize,
) -> Result<()> {
    let secret: Code = secret
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))
        .context("Could not read the secret")?;

    let mut config = SolveConfig::new(secret);
    config.max_guesses = max_guesses;

    let result = solve_code(config, solver)?;
    print_solve_result(&result, solver.rules().positions(), verbose);
    Ok(())
}

fn run_benchmark_command<S: Strategy>(solver: &Solver<S>, limit: Option<usize>) -> Result<()> {
    let rules = solver.rules();
    let count = limit.map_or(rules.combinations(), |n| n.min(rules.combinations()));

    println!("\n{}", "═".repeat(70));
    println!(" Mastermind Solver Benchmark ");
    println!("{}", "═".repeat(70));
    println!("\nRules: {rules}");
    println!("Testing {count} secrets\n");

    let secrets = (0..count)
        .map(|index| Code::decode(rules, index))
        .collect::<Result<Vec<_>, _>>()?;

    let result = run_benchmark(solver, &secrets, true)?;
    print_benchmark_result(&result);
    Ok(())
}
