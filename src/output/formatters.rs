//! Formatting utilities for terminal output

use crate::core::Score;

/// Render a score as key pegs: `●` per exact match, `○` per partial match,
/// `·` for each remaining position
#[must_use]
pub fn score_pegs(score: Score, positions: usize) -> String {
    let exact = usize::from(score.exact());
    let partial = usize::from(score.partial());
    let empty = positions.saturating_sub(exact + partial);

    format!("{}{}{}", "●".repeat(exact), "○".repeat(partial), "·".repeat(empty))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_for_mixed_score() {
        assert_eq!(score_pegs(Score::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn pegs_for_solved_score() {
        assert_eq!(score_pegs(Score::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn pegs_for_empty_score() {
        assert_eq!(score_pegs(Score::new(0, 0), 3), "···");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
