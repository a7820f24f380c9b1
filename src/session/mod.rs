//! Session state shared by the TUI and the line-oriented commands
//!
//! A session owns the grid, the latest service results, and an undo stack of
//! grid snapshots. Every grid edit goes through [`Session::edit`], so each edit
//! is atomic and undoable.

mod results;

pub use results::{ResultMode, ResultState};

use crate::core::{Grid, Row};
use crate::service::{Outcome, Request, SolveRequest};

/// Snapshots kept for undo; the oldest is dropped past this
pub const UNDO_LIMIT: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub grid: Grid,
    pub results: ResultState,
    pub undo_stack: Vec<Grid>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a prepared grid
    #[must_use]
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// Apply an edit, recording a snapshot when it changed the grid
    ///
    /// Returns true when the grid changed.
    pub fn edit(&mut self, f: impl FnOnce(&mut Grid)) -> bool {
        let snapshot = self.grid.clone();
        f(&mut self.grid);
        if self.grid == snapshot {
            false
        } else {
            if self.undo_stack.len() == UNDO_LIMIT {
                self.undo_stack.remove(0);
            }
            self.undo_stack.push(snapshot);
            true
        }
    }

    pub fn append_row(&mut self) -> bool {
        self.edit(Grid::append_row)
    }

    pub fn remove_last_row(&mut self) -> bool {
        self.edit(|grid| {
            grid.remove_last_row();
        })
    }

    /// # Panics
    /// Panics if `row` or `col` is out of range.
    pub fn set_letter(&mut self, row: usize, col: usize, raw: &str) -> bool {
        self.edit(|grid| grid.set_letter(row, col, raw))
    }

    /// # Panics
    /// Panics if `row` or `col` is out of range.
    pub fn cycle_color(&mut self, row: usize, col: usize) -> bool {
        self.edit(|grid| {
            grid.cycle_color(row, col);
        })
    }

    /// Overwrite row `index`, or append when `index` is one past the end
    ///
    /// # Panics
    /// Panics if `index` is more than one past the end.
    pub fn set_row(&mut self, index: usize, row: Row) -> bool {
        self.edit(|grid| {
            if index == grid.len() {
                grid.push_row(row);
            } else {
                grid.replace_row(index, row);
            }
        })
    }

    /// Reset the grid to one blank row
    pub fn reset(&mut self) -> bool {
        self.edit(Grid::clear)
    }

    /// Restore the grid before the last edit
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo_stack.pop() {
            Some(previous) => {
                self.grid = previous;
                true
            }
            None => false,
        }
    }

    /// Begin a solve request for the current grid
    ///
    /// Returns `None` while another request is outstanding.
    pub fn prepare_solve(&mut self) -> Option<Request> {
        if !self.results.begin(ResultMode::NextBestGuess) {
            return None;
        }
        let body = SolveRequest::from_grid(&self.grid);
        tracing::info!(
            green = body.green.len(),
            yellow = body.yellow.len(),
            gray = body.gray.len(),
            guesses = body.previous_guesses.len(),
            "solve request"
        );
        Some(Request::Solve(body))
    }

    /// Begin an opening-words request; grid constraints are not sent
    ///
    /// Returns `None` while another request is outstanding.
    pub fn prepare_opening(&mut self) -> Option<Request> {
        if !self.results.begin(ResultMode::BestOpening) {
            return None;
        }
        tracing::info!("best opening request");
        Some(Request::BestOpening)
    }

    /// Record the outcome of the outstanding request
    pub fn finish(&mut self, outcome: Outcome) {
        if let Ok(response) = &outcome {
            tracing::info!(?response, "request finished");
        }
        self.results.finish(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color;
    use crate::service::{Response, ServiceError, SolveResponse};
    use pretty_assertions::assert_eq;

    #[test]
    fn edits_are_undoable() {
        let mut session = Session::new();
        assert!(session.set_letter(0, 0, "c"));
        assert!(session.cycle_color(0, 0));
        assert!(session.append_row());

        assert!(session.undo());
        assert_eq!(session.grid.len(), 1);
        assert!(session.undo());
        assert_eq!(session.grid.cell(0, 0).unwrap().color, Color::Blank);
        assert!(session.undo());
        assert_eq!(session.grid, Grid::new());
        assert!(!session.undo());
    }

    #[test]
    fn no_op_edits_leave_no_snapshot() {
        let mut session = Session::new();
        assert!(!session.remove_last_row());
        assert!(!session.set_letter(0, 0, "7"));
        assert!(session.undo_stack.is_empty());
    }

    #[test]
    fn undo_stack_is_capped() {
        let mut session = Session::new();
        for _ in 0..UNDO_LIMIT + 2 {
            assert!(session.cycle_color(0, 0));
        }
        assert_eq!(session.undo_stack.len(), UNDO_LIMIT);

        while session.undo() {}
        // The two oldest snapshots were dropped, so undo bottoms out two cycles in
        assert_eq!(session.grid.cell(0, 0).unwrap().color, Color::Yellow);
        assert!(session.undo_stack.is_empty());
    }

    #[test]
    fn set_row_replaces_or_appends() {
        let mut session = Session::new();
        session.set_row(0, Row::parse("crane:-Y--G").unwrap());
        session.set_row(1, Row::parse("shore").unwrap());

        assert_eq!(session.grid.len(), 2);
        assert_eq!(session.grid.rows()[0].letters('_'), "crane");
        assert_eq!(session.grid.rows()[1].letters('_'), "shore");
    }

    #[test]
    fn reset_is_undoable() {
        let mut session = Session::new();
        session.set_row(0, Row::parse("crane:-Y--G").unwrap());
        let before = session.grid.clone();

        assert!(session.reset());
        assert_eq!(session.grid, Grid::new());
        assert!(session.undo());
        assert_eq!(session.grid, before);
    }

    #[test]
    fn prepare_solve_carries_grid_data() {
        let mut session = Session::with_grid(Grid::from_rows(vec![
            Row::parse("grays:GGY-.").unwrap(),
        ]));

        let Some(Request::Solve(body)) = session.prepare_solve() else {
            panic!("expected a solve request");
        };
        assert_eq!(body.green, vec!["gr___"]);
        assert_eq!(body.yellow, vec!["__a__"]);
        assert_eq!(body.gray, vec!["y"]);
        assert_eq!(body.previous_guesses, vec!["grays"]);
        assert!(session.results.in_flight);
    }

    #[test]
    fn second_submission_is_gated() {
        let mut session = Session::new();
        assert!(session.prepare_solve().is_some());
        assert!(session.prepare_solve().is_none());
        assert!(session.prepare_opening().is_none());

        session.finish(Ok(Response::Solve(SolveResponse::default())));
        assert_eq!(session.prepare_opening(), Some(Request::BestOpening));
    }

    #[test]
    fn failure_keeps_grid_intact() {
        let mut session = Session::with_grid(Grid::from_rows(vec![
            Row::parse("crane:-Y--G").unwrap(),
        ]));
        let grid = session.grid.clone();

        session.prepare_solve();
        session.finish(Err(ServiceError::application(500, None)));

        assert_eq!(session.grid, grid);
        assert_eq!(session.results.error.as_deref(), Some("Unknown error"));
        assert!(!session.results.in_flight);
    }
}
