//! Guess grid representation
//!
//! A grid is a growable list of fixed-width rows. It always holds at least one
//! row; removing the last remaining row is a no-op.

use super::cell::{Cell, Color, normalize_letter};
use std::fmt;
use thiserror::Error;

/// Number of cells in every row
pub const ROW_WIDTH: usize = 5;

/// A fixed-width row of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row([Cell; ROW_WIDTH]);

/// Error type for row notation parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("Row must have exactly 5 letters, got {0}")]
    LetterCount(usize),
    #[error("Row must have exactly 5 colors, got {0}")]
    ColorCount(usize),
    #[error("Invalid letter '{0}' (use a-z, or '.' for an empty cell)")]
    InvalidLetter(char),
    #[error("Invalid color '{0}' (use G, Y, -, or '.')")]
    InvalidColor(char),
}

impl Row {
    /// A row of blank cells
    pub const BLANK: Self = Self([Cell::BLANK; ROW_WIDTH]);

    #[must_use]
    pub const fn new(cells: [Cell; ROW_WIDTH]) -> Self {
        Self(cells)
    }

    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; ROW_WIDTH] {
        &self.0
    }

    /// True when no cell holds a letter or a color
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|cell| *cell == Cell::BLANK)
    }

    /// The row's letters, with `placeholder` for empty cells
    #[must_use]
    pub fn letters(&self, placeholder: char) -> String {
        self.0
            .iter()
            .map(|cell| cell.letter.unwrap_or(placeholder))
            .collect()
    }

    /// Parse a row from `letters[:colors]` notation
    ///
    /// The letter part uses `.` for an empty cell. The color part uses the
    /// symbols accepted by [`Color::from_symbol`]; when omitted, every cell is
    /// blank.
    ///
    /// # Errors
    /// Returns `RowParseError` when either part has the wrong length or holds
    /// an unrecognised character.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Color, Row};
    ///
    /// let row = Row::parse("gr.ys:GGY-.").unwrap();
    /// assert_eq!(row.cells()[0].letter, Some('g'));
    /// assert_eq!(row.cells()[2].letter, None);
    /// assert_eq!(row.cells()[2].color, Color::Yellow);
    /// ```
    pub fn parse(notation: &str) -> Result<Self, RowParseError> {
        let (word, colors) = match notation.split_once(':') {
            Some((word, colors)) => (word, Some(colors)),
            None => (notation, None),
        };

        let letters: Vec<char> = word.trim().chars().collect();
        if letters.len() != ROW_WIDTH {
            return Err(RowParseError::LetterCount(letters.len()));
        }

        let mut row = Self::BLANK;
        for (cell, &ch) in row.0.iter_mut().zip(&letters) {
            cell.letter = match ch {
                '.' => None,
                c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
                c => return Err(RowParseError::InvalidLetter(c)),
            };
        }

        if let Some(colors) = colors {
            let symbols: Vec<char> = colors.chars().collect();
            if symbols.len() != ROW_WIDTH {
                return Err(RowParseError::ColorCount(symbols.len()));
            }
            for (cell, &symbol) in row.0.iter_mut().zip(&symbols) {
                cell.color =
                    Color::from_symbol(symbol).ok_or(RowParseError::InvalidColor(symbol))?;
            }
        }

        Ok(row)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colors: String = self.0.iter().map(|cell| cell.color.symbol()).collect();
        write!(f, "{}:{colors}", self.letters('.'))
    }
}

/// The guess grid
///
/// Rows are addressed by index from the top; columns by index `0..ROW_WIDTH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// A grid with a single blank row
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: vec![Row::BLANK],
        }
    }

    /// Build a grid from rows; an empty list yields a single blank row
    #[must_use]
    pub fn from_rows(rows: Vec<Row>) -> Self {
        if rows.is_empty() {
            Self::new()
        } else {
            Self { rows }
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows (always at least one)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up a cell, if it exists
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.0.get(col))
    }

    /// Append a blank row
    pub fn append_row(&mut self) {
        self.rows.push(Row::BLANK);
    }

    /// Append a prepared row
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Remove the last row unless it is the only one
    ///
    /// Returns true when a row was removed.
    pub fn remove_last_row(&mut self) -> bool {
        if self.rows.len() > 1 {
            self.rows.pop();
            true
        } else {
            false
        }
    }

    /// Set a cell's letter from raw input, keeping its color
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    pub fn set_letter(&mut self, row: usize, col: usize, raw: &str) {
        self.rows[row].0[col].letter = normalize_letter(raw);
    }

    /// Advance a cell's color to the next in the cycle, keeping its letter
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    pub fn cycle_color(&mut self, row: usize, col: usize) -> Color {
        let cell = &mut self.rows[row].0[col];
        cell.color = cell.color.next();
        cell.color
    }

    /// Set a cell's color directly
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of range.
    pub fn set_color(&mut self, row: usize, col: usize, color: Color) {
        self.rows[row].0[col].color = color;
    }

    /// Replace an existing row
    ///
    /// # Panics
    /// Panics if `row` is out of range.
    pub fn replace_row(&mut self, row: usize, replacement: Row) {
        self.rows[row] = replacement;
    }

    /// Reset to a single blank row
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
