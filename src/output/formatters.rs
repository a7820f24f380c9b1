//! Formatting utilities for terminal output

use crate::core::Row;

/// Format a row's colors as an emoji string
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.cells().iter().map(|cell| cell.color.emoji()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a suggestion score relative to the best score in its list
#[must_use]
pub fn score_bar(score: f64, best: f64, width: usize) -> String {
    create_progress_bar(score, best, width)
}

/// Highest score in a list, or zero for an empty list
#[must_use]
pub fn best_score<'a>(scores: impl IntoIterator<Item = &'a f64>) -> f64 {
    scores.into_iter().copied().fold(0.0, f64::max)
}

/// Heading for the solutions list, e.g. "Possible Solutions (3 found)"
#[must_use]
pub fn solutions_heading(count: usize) -> String {
    if count == 0 {
        "Possible Solutions".to_string()
    } else {
        format!("Possible Solutions ({count} found)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_to_emoji_mixed() {
        let row = Row::parse("grays:GGY-.").unwrap();
        assert_eq!(row_to_emoji(&row), "🟩🟩🟨⬜▫");
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

    #[test]
    fn best_score_of_list() {
        assert!((best_score(&[1.5, 4.0, 2.0]) - 4.0).abs() < f64::EPSILON);
        assert!(best_score(&[] as &[f64]).abs() < f64::EPSILON);
    }

    #[test]
    fn heading_includes_count() {
        assert_eq!(solutions_heading(0), "Possible Solutions");
        assert_eq!(solutions_heading(3), "Possible Solutions (3 found)");
    }
}
