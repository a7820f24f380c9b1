//! Terminal output formatting
//!
//! Display utilities for the line-oriented commands.

pub mod display;
pub mod formatters;

pub use display::{print_constraints, print_grid, print_results, print_solutions, print_suggestions};
