//! Grid → constraint structure encoding
//!
//! Compresses the colored grid into the three-part structure the solver
//! service consumes:
//! - `green`: one 5-character pattern per row with at least one green letter
//! - `yellow`: one 5-character pattern per row with at least one yellow letter
//! - `gray`: letters that must be absent from the answer
//!
//! Pattern positions without a constraint hold [`PLACEHOLDER`].

use super::cell::{Cell, Color};
use super::grid::{Grid, ROW_WIDTH};
use rustc_hash::FxHashSet;

/// Marks an unconstrained position in a pattern
pub const PLACEHOLDER: char = '_';

/// Constraint structure derived from a grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraints {
    pub green: Vec<String>,
    pub yellow: Vec<String>,
    /// Deduplicated, in first-seen order
    pub gray: Vec<char>,
}

impl Constraints {
    /// Encode a grid
    ///
    /// # Algorithm
    /// 1. Collect every letter colored green or yellow anywhere in the grid.
    /// 2. For each row build a green and a yellow pattern. Gray letters are
    ///    excluded globally only when they were not collected in step 1, since
    ///    a repeated letter can be gray in one position and green/yellow in
    ///    another.
    ///
    /// All-placeholder patterns are dropped.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Constraints, Grid, Row};
    ///
    /// let grid = Grid::from_rows(vec![Row::parse("grays:GGY-.").unwrap()]);
    /// let constraints = Constraints::from_grid(&grid);
    ///
    /// assert_eq!(constraints.green, vec!["gr___"]);
    /// assert_eq!(constraints.yellow, vec!["__a__"]);
    /// assert_eq!(constraints.gray, vec!['y']);
    /// ```
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let present = present_letters(grid);

        let mut constraints = Self::default();
        let mut gray_seen: FxHashSet<char> = FxHashSet::default();

        for row in grid.rows() {
            let mut green = [PLACEHOLDER; ROW_WIDTH];
            let mut yellow = [PLACEHOLDER; ROW_WIDTH];

            for (i, cell) in row.cells().iter().enumerate() {
                match *cell {
                    Cell {
                        color: Color::Green,
                        letter,
                    } => green[i] = letter.unwrap_or(PLACEHOLDER),
                    Cell {
                        color: Color::Yellow,
                        letter,
                    } => yellow[i] = letter.unwrap_or(PLACEHOLDER),
                    Cell {
                        color: Color::Gray,
                        letter: Some(letter),
                    } => {
                        if !present.contains(&letter) && gray_seen.insert(letter) {
                            constraints.gray.push(letter);
                        }
                    }
                    _ => {}
                }
            }

            if let Some(pattern) = informative(&green) {
                constraints.green.push(pattern);
            }
            if let Some(pattern) = informative(&yellow) {
                constraints.yellow.push(pattern);
            }
        }

        constraints
    }

    /// True when the structure constrains nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green.is_empty() && self.yellow.is_empty() && self.gray.is_empty()
    }

    /// Gray letters as single-character strings
    #[must_use]
    pub fn gray_strings(&self) -> Vec<String> {
        self.gray.iter().map(char::to_string).collect()
    }
}

/// Letters colored green or yellow anywhere in the grid
fn present_letters(grid: &Grid) -> FxHashSet<char> {
    grid.rows()
        .iter()
        .flat_map(|row| row.cells().iter())
        .filter(|cell| matches!(cell.color, Color::Green | Color::Yellow))
        .filter_map(|cell| cell.letter)
        .collect()
}

fn informative(pattern: &[char; ROW_WIDTH]) -> Option<String> {
    pattern
        .iter()
        .any(|&c| c != PLACEHOLDER)
        .then(|| pattern.iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Row;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| Row::parse(r).unwrap()).collect())
    }

    #[test]
    fn single_row_mixed_feedback() {
        let constraints = Constraints::from_grid(&grid(&["grays:GGY-."]));

        assert_eq!(constraints.green, vec!["gr___".to_string()]);
        assert_eq!(constraints.yellow, vec!["__a__".to_string()]);
        assert_eq!(constraints.gray, vec!['y']);
    }

    #[test]
    fn gray_letter_green_elsewhere_is_not_excluded() {
        // Row 1: 'e' gray at position 0; row 2: 'e' green at position 2
        let constraints = Constraints::from_grid(&grid(&["e....:-....", "..e..:..G.."]));

        assert!(!constraints.gray.contains(&'e'));
        assert_eq!(constraints.green, vec!["__e__".to_string()]);
        assert!(constraints.yellow.is_empty());
    }

    #[test]
    fn gray_letter_yellow_elsewhere_is_not_excluded() {
        let constraints = Constraints::from_grid(&grid(&["speed:--Y-.", "crane:----G"]));

        // 'e' is yellow in row 1 and gray in row 2
        assert!(!constraints.gray.contains(&'e'));
        assert_eq!(constraints.gray, vec!['s', 'p', 'c', 'r', 'a', 'n']);
        assert_eq!(constraints.yellow, vec!["__e__".to_string()]);
        assert_eq!(constraints.green, vec!["____e".to_string()]);
    }

    #[test]
    fn gray_and_green_in_same_row() {
        // The global rule also covers repeats within one row
        let constraints = Constraints::from_grid(&grid(&["geese:-G-G-"]));

        assert_eq!(constraints.green, vec!["_e_s_".to_string()]);
        assert_eq!(constraints.gray, vec!['g']);
    }

    #[test]
    fn blank_row_contributes_nothing() {
        let constraints = Constraints::from_grid(&Grid::new());
        assert!(constraints.is_empty());

        let constraints = Constraints::from_grid(&grid(&["crane:GG---", "....."]));
        assert_eq!(constraints.green.len(), 1);
        assert!(constraints.yellow.is_empty());
    }

    #[test]
    fn uncolored_letters_contribute_nothing() {
        let constraints = Constraints::from_grid(&grid(&["crane"]));
        assert!(constraints.is_empty());
    }

    #[test]
    fn colored_cells_without_letters() {
        // Green/yellow with no letter keep the placeholder; gray with no
        // letter adds nothing
        let constraints = Constraints::from_grid(&grid(&[".....:GY-.."]));
        assert!(constraints.is_empty());
    }

    #[test]
    fn gray_set_is_deduplicated() {
        let constraints = Constraints::from_grid(&grid(&["tttxx:-----", "xtqqq:-----"]));
        assert_eq!(constraints.gray, vec!['t', 'x', 'q']);
        assert_eq!(
            constraints.gray_strings(),
            vec!["t".to_string(), "x".to_string(), "q".to_string()]
        );
    }

    #[test]
    fn one_pattern_per_informative_row() {
        let constraints = Constraints::from_grid(&grid(&[
            "crane:-Y--G",
            "shore:--GY.",
            "wordy:-----",
        ]));

        assert_eq!(
            constraints.green,
            vec!["____e".to_string(), "__o__".to_string()]
        );
        assert_eq!(
            constraints.yellow,
            vec!["_r___".to_string(), "___r_".to_string()]
        );
        // 'r' and 'o' are present elsewhere
        assert_eq!(constraints.gray, vec!['c', 'a', 'n', 's', 'h', 'w', 'd', 'y']);
    }

    #[test]
    fn encoding_is_deterministic() {
        let g = grid(&["crane:-Y--G", "mouse:-G-Y-"]);
        assert_eq!(Constraints::from_grid(&g), Constraints::from_grid(&g));
    }
}
