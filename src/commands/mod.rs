//! Command implementations

pub mod simple;
pub mod solve;

pub use simple::{run_request, run_session, run_simple};
pub use solve::{SolveConfig, best_opening, build_grid, request_json, solve_rows};
