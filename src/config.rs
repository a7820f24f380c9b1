//! Runtime configuration
//!
//! Built from command-line flags (with environment fallbacks handled by clap).

use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Default solver service address
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Resolved settings for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Service base URL without a trailing slash
    pub service_url: String,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_SERVICE_URL)
    }
}

impl Config {
    /// Config pointing at `base_url`, logging disabled
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            service_url: base_url.trim().trim_end_matches('/').to_string(),
            log_file: None,
            log_level: LevelFilter::INFO,
        }
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    #[must_use]
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Endpoint for solve requests
    #[must_use]
    pub fn solve_url(&self) -> String {
        format!("{}/solve", self.service_url)
    }

    /// Endpoint for opening-word requests
    #[must_use]
    pub fn opening_url(&self) -> String {
        format!("{}/best_opening", self.service_url)
    }
}

/// Parse a log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`)
///
/// # Errors
///
/// Returns a message naming the accepted values when `s` is not one of them.
pub fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    s.parse::<LevelFilter>()
        .map_err(|_| format!("Invalid log level '{s}' (use off, error, warn, info, debug, trace)"))
}
