//! Guess history extraction

use super::grid::Grid;

/// Words of every fully-lettered row, in row order
///
/// Rows with any empty cell are skipped. Colors are ignored and repeated words
/// are kept.
///
/// # Examples
/// ```
/// use wordle_helper::core::{Grid, Row, extract_guesses};
///
/// let grid = Grid::from_rows(vec![
///     Row::parse("crane:-Y--G").unwrap(),
///     Row::parse("sh.re").unwrap(),
/// ]);
/// assert_eq!(extract_guesses(&grid), vec!["crane"]);
/// ```
#[must_use]
pub fn extract_guesses(grid: &Grid) -> Vec<String> {
    grid.rows()
        .iter()
        .filter_map(|row| {
            row.cells()
                .iter()
                .map(|cell| cell.letter.filter(char::is_ascii_alphabetic))
                .collect::<Option<String>>()
        })
        .collect()
}
