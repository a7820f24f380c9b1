//! HTTP client for the solver service

use super::error::ServiceError;
use super::types::{OpeningResponse, SolveRequest, SolveResponse};
use super::SolverService;
use crate::config::Config;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Solver service reached over HTTP
///
/// Calls block the current thread and have no timeout; the TUI runs them on
/// a worker thread via [`super::spawn_request`].
#[derive(Debug, Clone)]
pub struct HttpSolverService {
    client: Client,
    solve_url: String,
    opening_url: String,
}

impl HttpSolverService {
    /// Create a client for the endpoints in `config`
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be initialised.
    pub fn new(config: &Config) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(ServiceError::transport)?;

        Ok(Self {
            client,
            solve_url: config.solve_url(),
            opening_url: config.opening_url(),
        })
    }
}

impl SolverService for HttpSolverService {
    fn solve(&self, request: &SolveRequest) -> Result<SolveResponse, ServiceError> {
        tracing::debug!(url = %self.solve_url, ?request, "POST solve");
        let response = self
            .client
            .post(&self.solve_url)
            .json(request)
            .send()
            .map_err(ServiceError::transport)?;
        read_json(response)
    }

    fn best_opening(&self) -> Result<OpeningResponse, ServiceError> {
        tracing::debug!(url = %self.opening_url, "GET best opening");
        let response = self
            .client
            .get(&self.opening_url)
            .send()
            .map_err(ServiceError::transport)?;
        read_json(response)
    }
}

/// Decode a response body, separating application errors from unreadable replies
fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();

    let body: Value = match response.json() {
        Ok(body) => body,
        Err(err) if status.is_success() => return Err(ServiceError::transport(err)),
        Err(_) => return Err(ServiceError::application(status.as_u16(), None)),
    };

    let error = body.get("error").and_then(Value::as_str).map(str::to_owned);
    if !status.is_success() || error.is_some() {
        return Err(ServiceError::application(status.as_u16(), error));
    }

    serde_json::from_value(body).map_err(ServiceError::transport)
}
