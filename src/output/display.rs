//! Display functions for command results

use super::formatters::{create_progress_bar, score_pegs};
use crate::commands::{BenchmarkResult, ScoreSurvey, SolveResult};
use crate::core::Code;
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, positions: usize, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {} ({})",
            i + 1,
            step.guess.to_string().bright_white().bold(),
            score_pegs(step.score, positions),
            step.score
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();

    for (guesses, count) in counts {
        let pct = (count as f64 / result.total_codes as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    if !result.worst_codes.is_empty() {
        let shown: Vec<String> = result
            .worst_codes
            .iter()
            .take(10)
            .map(ToString::to_string)
            .collect();
        println!(
            "\n🐢 Hardest codes ({} guesses): {}",
            result.max_guesses,
            shown.join(" ")
        );
    }
}

/// Print the listed and observed score spaces
pub fn print_score_survey(survey: &ScoreSurvey) {
    let positions = survey.rules.positions();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE SPACE:".bright_cyan().bold(),
        survey.rules.to_string().bright_yellow()
    );
    println!("{}", "═".repeat(60).cyan());

    for score in &survey.listed {
        let mark = if survey.observed.contains(score) {
            "✓".green()
        } else {
            "unreachable".yellow()
        };
        println!(
            "   {:>5}  {}  {mark}",
            score.to_string(),
            score_pegs(*score, positions)
        );
    }

    println!(
        "\n   Listed: {}   Observed: {}",
        survey.listed.len(),
        survey.observed.len()
    );

    let unlisted = survey.unlisted();
    if unlisted.is_empty() {
        println!("   {}", "Every observed score is listed".green());
    } else {
        let shown: Vec<String> = unlisted.iter().map(ToString::to_string).collect();
        println!(
            "   {} {}",
            "Observed but not listed:".red().bold(),
            shown.join(" ")
        );
    }
}

/// Print a short list of remaining candidate codes
pub fn print_candidates(codes: &[Code]) {
    println!("Remaining candidates:");
    for code in codes.iter().take(10) {
        println!("  • {code}");
    }
    println!();
}
