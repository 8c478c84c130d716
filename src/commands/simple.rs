//! Simple interactive CLI mode
//!
//! The user holds the secret; the solver suggests guesses and the user types
//! back the score for each one.

use crate::core::{Fact, Score};
use crate::output::print_candidates;
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the user asked for after seeing a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Score(Score),
    Undo,
    NewGame,
    Quit,
    Invalid,
}

/// Interpret one line of user input
///
/// `win` is shorthand for the solved score.
#[must_use]
pub fn parse_reply(input: &str, solved: Score) -> Reply {
    match input.trim().to_lowercase().as_str() {
        "quit" | "q" | "exit" => Reply::Quit,
        "new" | "n" => Reply::NewGame,
        "undo" | "u" => Reply::Undo,
        "win" | "correct" | "solved" => Reply::Score(solved),
        other => other.parse().map_or(Reply::Invalid, Reply::Score),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: Strategy>(solver: &Solver<S>) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(solver, &mut stdin.lock())
}

/// Run the interactive loop reading replies from `input`
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading `input` or flushing stdout fails.
pub fn run_simple_with<S: Strategy, R: BufRead>(solver: &Solver<S>, input: &mut R) -> Result<()> {
    let rules = *solver.rules();
    let solved = Score::solved(&rules);

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Mastermind Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Think of a code: {rules}.");
    println!("After each guess, enter the score as 'exact,partial' (e.g. 1,2)");
    println!("or type 'win' if the guess was right.\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    let mut facts: Vec<Fact> = Vec::new();

    loop {
        let remaining = solver.remaining(&facts)?;

        if remaining.is_empty() {
            println!("\n❌ No code matches those scores! One of them may be wrong.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");
        }

        let guess = if remaining.is_empty() {
            None
        } else {
            Some(solver.select_from(&remaining)?)
        };

        if let Some(guess) = &guess {
            println!("────────────────────────────────────────────────────────────");
            println!(
                "Turn {}: {} candidates remaining",
                facts.len() + 1,
                remaining.len()
            );
            println!("────────────────────────────────────────────────────────────");
            println!("\n📊 Suggested guess: {}\n", guess.to_string().bright_white().bold());

            if remaining.len() <= 10 {
                print_candidates(&remaining.codes(&rules)?);
            }
        }

        let Some(line) = prompt(input, "Score (exact,partial), 'win', or command")? else {
            return Ok(());
        };

        match (parse_reply(&line, solved), guess) {
            (Reply::Quit, _) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            (Reply::NewGame, _) => {
                facts.clear();
                println!("\n🔄 New game started!\n");
            }
            (Reply::Undo, _) => {
                if facts.pop().is_some() {
                    println!("✓ Undone! Back to turn {}\n", facts.len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            (Reply::Score(score), Some(guess)) => {
                if usize::from(score.exact()) + usize::from(score.partial()) > rules.positions() {
                    println!("❌ A score cannot exceed {} pegs\n", rules.positions());
                    continue;
                }

                facts.push(Fact::new(guess, score));

                if score.is_solved(&rules) {
                    println!(
                        "\n{}",
                        format!("🎉 Solved in {} guesses!", facts.len())
                            .bright_green()
                            .bold()
                    );
                    for (i, fact) in facts.iter().enumerate() {
                        println!("    {}. {fact}", i + 1);
                    }
                    println!();
                    facts.clear();
                    println!("🔄 New game started!\n");
                }
            }
            (Reply::Score(_), None) | (Reply::Invalid, _) => {
                println!("❌ Invalid input! Use 'exact,partial', 'win', 'undo', 'new' or 'quit'\n");
            }
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, message: &str) -> Result<Option<String>> {
    print!("{message}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
