//! Error handling module for the User App client.
//!
//! Every request failure collapses into a single [`ApiError`] carrying the
//! human-readable message shown to the user.

use reqwest::StatusCode;
use thiserror::Error;

/// Message used when a success response that must carry a user has no body.
pub const NO_CONTENT_MESSAGE: &str = "Server returned no content";

/// A failed request against the backend.
///
/// Transport failures, HTTP error statuses and undecodable bodies all end up
/// here. `Display` yields the message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    status: Option<StatusCode>,
}

impl ApiError {
    /// Create an error that did not come from an HTTP status.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Create an error from a non-2xx response.
    ///
    /// The body text wins when non-empty, otherwise the status reason phrase.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = if body.is_empty() {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string())
        } else {
            body.to_string()
        };

        Self {
            message,
            status: Some(status),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Request error: {:?}", err);
        Self {
            message: err.to_string(),
            status: err.status(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ApiError::new(format!("JSON error: {}", err))
    }
}

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// A terminal command that could not be turned into an intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),
    #[error("Invalid user id: {0}")]
    InvalidId(String),
    #[error("No user with id {0} is listed")]
    NotListed(i64),
    #[error("Cannot submit: name needs at least 2 characters and email needs an @")]
    SubmitDisabled,
    #[error("Nothing to cancel")]
    NotEditing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefers_body() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "Boom");
        assert_eq!(err.to_string(), "Boom");
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_status_error_falls_back_to_reason_phrase() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "");
        assert_eq!(err.message(), "Not Found");
    }

    #[test]
    fn test_status_error_without_reason_uses_code() {
        let status = StatusCode::from_u16(599).unwrap();
        let err = ApiError::from_status(status, "");
        assert_eq!(err.message(), "599");
    }
}
