//! One-shot solve command
//!
//! Builds a grid from row notation, then either prints the request body or
//! asks the service and returns the resulting session.

use crate::core::{Grid, Row, RowParseError};
use crate::service::{SolveRequest, SolverService};
use crate::session::Session;

/// Configuration for a one-shot solve
pub struct SolveConfig {
    /// Rows in `letters[:colors]` notation, top to bottom
    pub rows: Vec<String>,
    pub dry_run: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(rows: Vec<String>) -> Self {
        Self {
            rows,
            dry_run: false,
        }
    }
}

/// Build a grid from row notation
///
/// # Errors
///
/// Returns the first row's parse error, prefixed with its 1-based number.
pub fn build_grid(rows: &[String]) -> Result<Grid, String> {
    rows.iter()
        .enumerate()
        .map(|(i, notation)| {
            Row::parse(notation).map_err(|e: RowParseError| format!("Row {}: {e}", i + 1))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Grid::from_rows)
}

/// The request body a solve of `grid` would send, as pretty JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn request_json(grid: &Grid) -> Result<String, String> {
    serde_json::to_string_pretty(&SolveRequest::from_grid(grid)).map_err(|e| e.to_string())
}

/// Solve the grid described by `config`
///
/// The returned session holds the grid and the service outcome; service
/// failures are recorded in its results rather than returned.
///
/// # Errors
///
/// Returns an error if a row cannot be parsed.
pub fn solve_rows(config: &SolveConfig, service: &dyn SolverService) -> Result<Session, String> {
    let mut session = Session::with_grid(build_grid(&config.rows)?);

    if let Some(request) = session.prepare_solve() {
        let outcome = service.dispatch(&request);
        session.finish(outcome);
    }

    Ok(session)
}

/// Ask the service for its best opening words
#[must_use]
pub fn best_opening(service: &dyn SolverService) -> Session {
    let mut session = Session::new();
    if let Some(request) = session.prepare_opening() {
        let outcome = service.dispatch(&request);
        session.finish(outcome);
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{OpeningResponse, ServiceError, SolveResponse};
    use crate::session::ResultMode;
    use pretty_assertions::assert_eq;

    struct Unreachable;

    impl SolverService for Unreachable {
        fn solve(&self, _: &SolveRequest) -> Result<SolveResponse, ServiceError> {
            Err(ServiceError::transport(std::io::Error::other("refused")))
        }

        fn best_opening(&self) -> Result<OpeningResponse, ServiceError> {
            Err(ServiceError::transport(std::io::Error::other("refused")))
        }
    }

    struct Echo;

    impl SolverService for Echo {
        fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, ServiceError> {
            Ok(SolveResponse {
                solutions: request.green.clone(),
                ..SolveResponse::default()
            })
        }

        fn best_opening(&self) -> Result<OpeningResponse, ServiceError> {
            Ok(OpeningResponse::default())
        }
    }

    #[test]
    fn build_grid_reports_bad_row() {
        let rows = vec!["crane:-Y--G".to_string(), "sh0re".to_string()];
        let err = build_grid(&rows).unwrap_err();
        assert!(err.starts_with("Row 2:"), "{err}");
    }

    #[test]
    fn build_grid_without_rows_is_blank() {
        assert_eq!(build_grid(&[]).unwrap(), Grid::new());
    }

    #[test]
    fn request_json_is_the_wire_body() {
        let grid = build_grid(&["grays:GGY-.".to_string()]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&request_json(&grid).unwrap()).unwrap();
        assert_eq!(json["green"], serde_json::json!(["gr___"]));
        assert_eq!(json["gray"], serde_json::json!(["y"]));
    }

    #[test]
    fn solve_rows_records_results() {
        let config = SolveConfig::new(vec!["crane:GG---".into(), "slate:---G.".into()]);
        let session = solve_rows(&config, &Echo).unwrap();

        assert_eq!(session.results.solutions, vec!["cr___", "___t_"]);
        assert!(!session.results.in_flight);
    }

    #[test]
    fn solve_rows_keeps_transport_failure_in_results() {
        let config = SolveConfig::new(vec!["crane:GG---".into()]);
        let session = solve_rows(&config, &Unreachable).unwrap();

        assert_eq!(
            session.results.error.as_deref(),
            Some("Failed to connect to backend.")
        );
        assert_eq!(session.grid.len(), 1);
    }

    #[test]
    fn best_opening_sets_mode() {
        let session = best_opening(&Echo);
        assert_eq!(session.results.mode, ResultMode::BestOpening);
        assert!(session.results.is_empty_result());
    }
}
