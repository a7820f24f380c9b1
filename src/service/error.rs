//! Solver service error kinds

use thiserror::Error;

/// Message shown when no usable response was received
pub const CONNECT_FAILURE_MESSAGE: &str = "Failed to connect to backend.";

/// Message shown when an error response carries no message of its own
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Failure of a single service call
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The service could not be reached or its reply could not be read
    #[error("Failed to connect to backend.")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service replied but signalled failure
    #[error("{message}")]
    Application { status: u16, message: String },
}

impl ServiceError {
    pub(crate) fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(err))
    }

    /// Build an application error from an optional service-supplied message
    #[must_use]
    pub fn application(status: u16, message: Option<String>) -> Self {
        Self::Application {
            status,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        }
    }

    /// The message to show the user
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
