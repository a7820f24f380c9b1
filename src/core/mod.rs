//! Core domain types for the helper
//!
//! The grid model, the color cycle, and the two pure derivations the solver
//! service needs: the constraint structure and the guess history. Nothing here
//! performs I/O.

mod cell;
mod feedback;
mod grid;
mod guesses;

pub use cell::{Cell, Color, normalize_letter};
pub use feedback::{Constraints, PLACEHOLDER};
pub use grid::{Grid, ROW_WIDTH, Row, RowParseError};
pub use guesses::extract_guesses;
