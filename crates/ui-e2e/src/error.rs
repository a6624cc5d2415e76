// Error types for ui-e2e

use thiserror::Error;

/// Result type alias for page-object, fixture and assertion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to a test body.
///
/// Nothing here is recovered from: a step that fails aborts the rest of the
/// test and the runner reports it.
#[derive(Debug, Error)]
pub enum Error {
    /// An interaction or query failed inside the automation library
    ///
    /// Typically an element that never became actionable within the action
    /// timeout, a navigation failure, or a closed page.
    #[error("Playwright error: {0}")]
    Playwright(#[from] playwright_rs::Error),

    /// Assertion did not hold before its timeout elapsed
    #[error("Assertion timeout: {0}")]
    AssertionTimeout(String),

    /// Load state was not reached within the action timeout
    #[error("Timed out after {duration_ms}ms waiting for load state '{state}'")]
    LoadStateTimeout { state: String, duration_ms: u64 },

    /// History navigation never committed a different document
    #[error("Timed out after {duration_ms}ms going back from '{from}'")]
    HistoryTimeout { from: String, duration_ms: u64 },

    /// Settings could not be built from the environment
    #[error("Invalid configuration for {key}: {message}")]
    Config { key: String, message: String },

    /// A pattern handed to an assertion was not a valid regex
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Settings could not be serialized for the launch log
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    pub(crate) fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Config {
            key: key.into(),
            message: message.into(),
        }
    }
}
