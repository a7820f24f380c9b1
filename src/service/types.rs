//! Wire types for the solver service

use crate::core::{Constraints, Grid, extract_guesses};
use serde::{Deserialize, Serialize};

/// Body of a `POST /solve` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SolveRequest {
    pub green: Vec<String>,
    pub yellow: Vec<String>,
    pub gray: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_guesses: Vec<String>,
}

impl SolveRequest {
    /// Build a request from the current grid
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let constraints = Constraints::from_grid(grid);
        Self {
            gray: constraints.gray_strings(),
            green: constraints.green,
            yellow: constraints.yellow,
            previous_guesses: extract_guesses(grid),
        }
    }
}

/// A ranked guess suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub score: f64,
    pub information_gain: f64,
    pub strategic_score: f64,
    pub is_possible_solution: bool,
}

/// Successful `POST /solve` response
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct SolveResponse {
    pub solutions: Vec<String>,
    #[serde(default)]
    pub next_best_guesses: Vec<Suggestion>,
    #[serde(default)]
    pub solutions_count: Option<usize>,
}

/// Successful `GET /best_opening` response
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct OpeningResponse {
    pub best_opening_words: Vec<Suggestion>,
}

/// A request the session can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Solve(SolveRequest),
    BestOpening,
}

/// Payload of a successful call
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Solve(SolveResponse),
    BestOpening(OpeningResponse),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Row;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request_from_grid() {
        let grid = Grid::from_rows(vec![
            Row::parse("crane:-Y--G").unwrap(),
            Row::parse("sh.re:--GY.").unwrap(),
        ]);
        let request = SolveRequest::from_grid(&grid);

        assert_eq!(
            request,
            SolveRequest {
                green: vec!["____e".into()],
                yellow: vec!["_r___".into(), "___r_".into()],
                gray: vec!["c".into(), "a".into(), "n".into(), "s".into(), "h".into()],
                previous_guesses: vec!["crane".into()],
            }
        );
    }

    #[test]
    fn request_json_shape() {
        let grid = Grid::from_rows(vec![Row::parse("grays:GGY-.").unwrap()]);
        let value = serde_json::to_value(SolveRequest::from_grid(&grid)).unwrap();

        assert_eq!(
            value,
            json!({
                "green": ["gr___"],
                "yellow": ["__a__"],
                "gray": ["y"],
                "previous_guesses": ["grays"],
            })
        );
    }

    #[test]
    fn request_omits_empty_previous_guesses() {
        let value = serde_json::to_value(SolveRequest::from_grid(&Grid::new())).unwrap();
        assert_eq!(value, json!({ "green": [], "yellow": [], "gray": [] }));
    }

    #[test]
    fn solve_response_minimal() {
        let response: SolveResponse =
            serde_json::from_value(json!({ "solutions": ["cigar", "rebut"] })).unwrap();

        assert_eq!(response.solutions, vec!["cigar", "rebut"]);
        assert!(response.next_best_guesses.is_empty());
        assert_eq!(response.solutions_count, None);
    }

    #[test]
    fn solve_response_full_ignores_unknown_fields() {
        let response: SolveResponse = serde_json::from_value(json!({
            "solutions": ["cigar"],
            "solutions_count": 1,
            "next_best_guesses": [{
                "word": "cigar",
                "score": 3.5,
                "information_gain": 0.0,
                "strategic_score": 2.5,
                "is_possible_solution": true
            }],
            "cpp_solutions": [],
            "status": "success"
        }))
        .unwrap();

        assert_eq!(response.solutions_count, Some(1));
        assert_eq!(response.next_best_guesses.len(), 1);
        assert!(response.next_best_guesses[0].is_possible_solution);
        assert!((response.next_best_guesses[0].score - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn opening_response() {
        let response: OpeningResponse = serde_json::from_value(json!({
            "best_opening_words": [
                { "word": "raise", "score": 2.1, "information_gain": 0, "strategic_score": 2.1, "is_possible_solution": true },
                { "word": "arose", "score": 2.0, "information_gain": 0, "strategic_score": 2.0, "is_possible_solution": false }
            ],
            "status": "success"
        }))
        .unwrap();

        let words: Vec<&str> = response
            .best_opening_words
            .iter()
            .map(|s| s.word.as_str())
            .collect();
        assert_eq!(words, vec!["raise", "arose"]);
    }
}
