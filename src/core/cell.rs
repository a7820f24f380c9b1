//! Grid cells and the feedback color cycle
//!
//! A cell holds at most one lowercase letter and a color tag. Colors advance
//! through a fixed cycle: blank → gray → yellow → green → blank.

use std::fmt;

/// Feedback color of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Blank,
    Gray,
    Yellow,
    Green,
}

impl Color {
    /// All colors in cycle order
    pub const ALL: [Self; 4] = [Self::Blank, Self::Gray, Self::Yellow, Self::Green];

    /// Position of this color in [`Color::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Blank => 0,
            Self::Gray => 1,
            Self::Yellow => 2,
            Self::Green => 3,
        }
    }

    /// The next color in the cycle
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Color;
    ///
    /// assert_eq!(Color::Blank.next(), Color::Gray);
    /// assert_eq!(Color::Green.next(), Color::Blank);
    /// ```
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Parse a feedback symbol
    ///
    /// Accepts:
    /// - '.'/' ' for blank
    /// - '-'/'_'/'x'/⬜/⬛ for gray
    /// - 'Y'/'y'/🟨 for yellow
    /// - 'G'/'g'/🟩 for green
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | ' ' => Some(Self::Blank),
            '-' | '_' | 'x' | 'X' | '⬜' | '⬛' => Some(Self::Gray),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'G' | 'g' | '🟩' => Some(Self::Green),
            _ => None,
        }
    }

    /// Single-character symbol accepted by [`Color::from_symbol`]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Blank => '.',
            Self::Gray => '-',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Emoji square for this color
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Blank => '▫',
            Self::Gray => '⬜',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }

    /// Lowercase name used in messages and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Gray => "gray",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize raw user input into a cell letter
///
/// Non-alphabetic characters are stripped, case is folded, and only the first
/// remaining letter is kept. Returns `None` when nothing is left.
///
/// # Examples
/// ```
/// use wordle_helper::core::normalize_letter;
///
/// assert_eq!(normalize_letter("Q"), Some('q'));
/// assert_eq!(normalize_letter("3b!c"), Some('b'));
/// assert_eq!(normalize_letter("42"), None);
/// ```
#[must_use]
pub fn normalize_letter(raw: &str) -> Option<char> {
    raw.chars()
        .find(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
}

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub color: Color,
}

impl Cell {
    /// An empty, blank cell
    pub const BLANK: Self = Self {
        letter: None,
        color: Color::Blank,
    };

    /// Build a cell from raw input and a color
    #[must_use]
    pub fn new(raw: &str, color: Color) -> Self {
        Self {
            letter: normalize_letter(raw),
            color,
        }
    }

    #[inline]
    #[must_use]
    pub const fn has_letter(&self) -> bool {
        self.letter.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_cycle_order() {
        assert_eq!(Color::Blank.next(), Color::Gray);
        assert_eq!(Color::Gray.next(), Color::Yellow);
        assert_eq!(Color::Yellow.next(), Color::Green);
        assert_eq!(Color::Green.next(), Color::Blank);
    }

    #[test]
    fn color_cycle_has_order_four() {
        for color in Color::ALL {
            let cycled = color.next().next().next().next();
            assert_eq!(cycled, color);
            // No shorter cycle
            assert_ne!(color.next(), color);
            assert_ne!(color.next().next(), color);
            assert_ne!(color.next().next().next(), color);
        }
    }

    #[test]
    fn color_symbols_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_symbol(color.symbol()), Some(color));
        }
        assert_eq!(Color::from_symbol('🟩'), Some(Color::Green));
        assert_eq!(Color::from_symbol('y'), Some(Color::Yellow));
        assert_eq!(Color::from_symbol('⬜'), Some(Color::Gray));
        assert_eq!(Color::from_symbol('?'), None);
    }

    #[test]
    fn normalize_strips_and_folds() {
        assert_eq!(normalize_letter("a"), Some('a'));
        assert_eq!(normalize_letter("Z"), Some('z'));
        assert_eq!(normalize_letter(" 1-k"), Some('k'));
        assert_eq!(normalize_letter("xyz"), Some('x'));
        assert_eq!(normalize_letter(""), None);
        assert_eq!(normalize_letter("7?!"), None);
    }

    #[test]
    fn normalize_rejects_non_ascii_letters() {
        assert_eq!(normalize_letter("é"), None);
        assert_eq!(normalize_letter("éb"), Some('b'));
    }

    #[test]
    fn cell_default_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell, Cell::BLANK);
        assert!(!cell.has_letter());
    }

    #[test]
    fn cell_new_normalizes() {
        let cell = Cell::new("R", Color::Green);
        assert_eq!(cell.letter, Some('r'));
        assert_eq!(cell.color, Color::Green);
    }
}
