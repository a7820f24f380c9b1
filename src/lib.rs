//! Wordle Helper
//!
//! Record Wordle guesses and their tile colors, derive the letter constraints
//! they imply, and ask an external solver service for the remaining answers
//! and the best next guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{Constraints, Grid, Row, extract_guesses};
//!
//! // "grays" with g, r green, a yellow, y gray, s not colored yet
//! let grid = Grid::from_rows(vec![Row::parse("grays:GGY-.").unwrap()]);
//!
//! let constraints = Constraints::from_grid(&grid);
//! assert_eq!(constraints.green, vec!["gr___"]);
//! assert_eq!(constraints.yellow, vec!["__a__"]);
//! assert_eq!(constraints.gray, vec!['y']);
//! assert_eq!(extract_guesses(&grid), vec!["grays"]);
//! ```

// Core domain types
pub mod core;

// Solver service contract and HTTP client
pub mod service;

// Editing session and result state
pub mod session;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
