//! Result state for service responses
//!
//! Lists are kept exactly as received: no sorting, filtering, or
//! deduplication happens here.

use crate::service::{Outcome, Response, Suggestion};

/// Which request produced the current results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultMode {
    #[default]
    NextBestGuess,
    BestOpening,
}

impl ResultMode {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NextBestGuess => "Next Best Guesses",
            Self::BestOpening => "Best Opening Words",
        }
    }
}

/// The most recent solutions, suggestions, and request status
#[derive(Debug, Clone, Default)]
pub struct ResultState {
    pub solutions: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub solutions_count: Option<usize>,
    pub mode: ResultMode,
    pub error: Option<String>,
    pub in_flight: bool,
    /// Set once any request has completed successfully
    pub has_response: bool,
}

impl ResultState {
    /// Start a request
    ///
    /// Clears both lists and any previous error. Returns false, changing
    /// nothing, while another request is outstanding.
    pub fn begin(&mut self, mode: ResultMode) -> bool {
        if self.in_flight {
            return false;
        }
        self.solutions.clear();
        self.suggestions.clear();
        self.solutions_count = None;
        self.error = None;
        self.has_response = false;
        self.mode = mode;
        self.in_flight = true;
        true
    }

    /// Record the outcome of the outstanding request
    pub fn finish(&mut self, outcome: Outcome) {
        self.in_flight = false;

        match outcome {
            Ok(Response::Solve(response)) => {
                self.mode = ResultMode::NextBestGuess;
                self.solutions = response.solutions;
                self.suggestions = response.next_best_guesses;
                self.solutions_count = response.solutions_count;
                self.has_response = true;
            }
            Ok(Response::BestOpening(response)) => {
                self.mode = ResultMode::BestOpening;
                self.solutions = Vec::new();
                self.suggestions = response.best_opening_words;
                self.solutions_count = None;
                self.has_response = true;
            }
            Err(err) => {
                tracing::warn!(transport = err.is_transport(), error = %err, "request failed");
                self.error = Some(err.user_message());
            }
        }
    }

    /// Number of solutions, preferring the service's own count
    #[must_use]
    pub fn count(&self) -> usize {
        self.solutions_count.unwrap_or(self.solutions.len())
    }

    /// A successful response that carried nothing to show
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.has_response && self.solutions.is_empty() && self.suggestions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{OpeningResponse, ServiceError, SolveResponse};
    use pretty_assertions::assert_eq;

    fn suggestion(word: &str, score: f64) -> Suggestion {
        Suggestion {
            word: word.to_string(),
            score,
            information_gain: 0.0,
            strategic_score: score,
            is_possible_solution: false,
        }
    }

    fn words(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.word.as_str()).collect()
    }

    #[test]
    fn begin_clears_previous_results() {
        let mut state = ResultState::default();
        assert!(state.begin(ResultMode::NextBestGuess));
        state.finish(Ok(Response::Solve(SolveResponse {
            solutions: vec!["cigar".into()],
            next_best_guesses: vec![suggestion("cigar", 1.0)],
            solutions_count: Some(1),
        })));

        assert!(state.begin(ResultMode::NextBestGuess));
        assert!(state.solutions.is_empty());
        assert!(state.suggestions.is_empty());
        assert_eq!(state.solutions_count, None);
        assert!(state.in_flight);
    }

    #[test]
    fn begin_refuses_while_in_flight() {
        let mut state = ResultState::default();
        assert!(state.begin(ResultMode::NextBestGuess));
        assert!(!state.begin(ResultMode::BestOpening));
        assert_eq!(state.mode, ResultMode::NextBestGuess);
    }

    #[test]
    fn received_order_is_kept() {
        let mut state = ResultState::default();
        state.begin(ResultMode::NextBestGuess);
        state.finish(Ok(Response::Solve(SolveResponse {
            solutions: vec!["bravo".into(), "alpha".into(), "charm".into()],
            next_best_guesses: vec![
                suggestion("bravo", 1.0),
                suggestion("alpha", 3.0),
                suggestion("charm", 2.0),
            ],
            solutions_count: None,
        })));

        assert_eq!(state.solutions, vec!["bravo", "alpha", "charm"]);
        assert_eq!(words(&state.suggestions), vec!["bravo", "alpha", "charm"]);
        assert_eq!(state.count(), 3);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut state = ResultState::default();
        state.begin(ResultMode::BestOpening);
        state.finish(Ok(Response::BestOpening(OpeningResponse {
            best_opening_words: vec![suggestion("raise", 1.0), suggestion("raise", 1.0)],
        })));

        assert_eq!(state.mode, ResultMode::BestOpening);
        assert_eq!(words(&state.suggestions), vec!["raise", "raise"]);
        assert!(state.solutions.is_empty());
    }

    #[test]
    fn service_count_wins_over_list_length() {
        let mut state = ResultState::default();
        state.begin(ResultMode::NextBestGuess);
        state.finish(Ok(Response::Solve(SolveResponse {
            solutions: vec!["cigar".into()],
            next_best_guesses: vec![],
            solutions_count: Some(40),
        })));
        assert_eq!(state.count(), 40);
    }

    #[test]
    fn error_is_recorded_and_clears_in_flight() {
        let mut state = ResultState::default();
        state.begin(ResultMode::NextBestGuess);
        state.finish(Err(ServiceError::application(500, Some("boom".into()))));

        assert!(!state.in_flight);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.is_empty_result());
        assert!(state.begin(ResultMode::NextBestGuess));
        assert_eq!(state.error, None);
    }

    #[test]
    fn empty_success_is_not_an_error() {
        let mut state = ResultState::default();
        assert!(!state.is_empty_result());

        state.begin(ResultMode::NextBestGuess);
        state.finish(Ok(Response::Solve(SolveResponse::default())));

        assert!(state.is_empty_result());
        assert_eq!(state.error, None);
        assert_eq!(state.count(), 0);
    }
}
