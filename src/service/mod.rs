//! Solver service interface
//!
//! The solving and ranking logic lives in an external service. This module
//! holds its wire contract, the error kinds a call can end in, and an HTTP
//! client. Each call ends in exactly one of: a decoded response, an
//! application error, or a transport failure.

mod client;
mod error;
mod types;

pub use client::HttpSolverService;
pub use error::{CONNECT_FAILURE_MESSAGE, ServiceError, UNKNOWN_ERROR_MESSAGE};
pub use types::{OpeningResponse, Request, Response, SolveRequest, SolveResponse, Suggestion};

use std::sync::{Arc, mpsc};
use std::thread;

/// Terminal outcome of one service call
pub type Outcome = Result<Response, ServiceError>;

/// The external solver
pub trait SolverService: Send + Sync {
    /// Candidate solutions and ranked next guesses for a constraint set
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Transport` when no usable reply arrives and
    /// `ServiceError::Application` when the service reports a failure.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, ServiceError>;

    /// Ranked opening words for an unconstrained puzzle
    ///
    /// # Errors
    ///
    /// Same as [`SolverService::solve`].
    fn best_opening(&self) -> Result<OpeningResponse, ServiceError>;

    /// Run any request
    ///
    /// # Errors
    ///
    /// Same as [`SolverService::solve`].
    fn dispatch(&self, request: &Request) -> Outcome {
        match request {
            Request::Solve(body) => self.solve(body).map(Response::Solve),
            Request::BestOpening => self.best_opening().map(Response::BestOpening),
        }
    }
}

/// Run one request on a worker thread
///
/// The returned receiver yields exactly one outcome.
pub fn spawn_request(service: Arc<dyn SolverService>, request: Request) -> mpsc::Receiver<Outcome> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let outcome = service.dispatch(&request);
        // The receiver may be gone if the app quit mid-request
        let _ = tx.send(outcome);
    });

    rx
}
