//! crates/svclog/src/error.rs
//! Error values produced by the logger.

use thiserror::Error;

/// Error returned by the error-level entry points.
///
/// The logger builds this value from the message text whether or not the
/// console threshold let the line through, so callers can log and return in
/// one step. Its display form is the message text verbatim.
///
/// ```
/// use svclog::{Context, Level, Logger};
///
/// let logger = Logger::builder().console_level(Level::Off).build();
/// let error = logger.error(&Context::background(), &[&"boom"]);
/// assert_eq!(error.to_string(), "boom\n");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct LoggedError {
    message: String,
}

impl LoggedError {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    /// The message text carried by the error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns its message text.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Error returned when parsing a [`Level`](crate::Level) from an unknown name.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised log level name `{token}`")]
pub struct ParseLevelError {
    token: String,
}

impl ParseLevelError {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }

    /// The name that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}
