//! Error types for the DB-Forge client.
//!
//! Every failed call produces exactly one [`DbForgeError`]. Transport-level
//! failures (the request never yielded a status code) are classified first,
//! then unparseable bodies, then HTTP status codes with an optional
//! `{"error": {"message", "code"}}` envelope.

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::models::ErrorEnvelope;

/// Result type for all DB-Forge client operations.
pub type Result<T> = std::result::Result<T, DbForgeError>;

/// Errors returned by the DB-Forge client.
///
/// HTTP-derived variants carry the originating status code and the optional
/// machine error code from the gateway's error envelope. Transport variants
/// report status code 0.
#[derive(Debug, Clone, Error)]
pub enum DbForgeError {
    /// The request was rejected as invalid (HTTP 400).
    #[error("invalid request ({status_code}): {message}")]
    InvalidRequest {
        status_code: u16,
        message: String,
        code: Option<String>,
    },

    /// Authentication failed (HTTP 401).
    #[error("authentication failed ({status_code}): {message}")]
    AuthenticationError {
        status_code: u16,
        message: String,
        code: Option<String>,
    },

    /// The database instance does not exist (HTTP 404).
    #[error("database not found ({status_code}): {message}")]
    DatabaseNotFound {
        status_code: u16,
        message: String,
        code: Option<String>,
    },

    /// The gateway failed internally (HTTP 5xx).
    #[error("server error ({status_code}): {message}")]
    ServerError {
        status_code: u16,
        message: String,
        code: Option<String>,
    },

    /// The gateway could not be reached.
    #[error("connection error: {message}")]
    ConnectionError { message: String },

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {message}")]
    TimeoutError { message: String },

    /// Any other failure: unexpected 4xx statuses, unparseable response
    /// bodies, or transport errors that are neither timeouts nor connection
    /// failures.
    #[error("{message}")]
    GenericError {
        status_code: u16,
        message: String,
        code: Option<String>,
    },
}

impl DbForgeError {
    /// The HTTP status code this error was derived from, or 0 for failures
    /// that happened before any status code was obtained.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest { status_code, .. }
            | Self::AuthenticationError { status_code, .. }
            | Self::DatabaseNotFound { status_code, .. }
            | Self::ServerError { status_code, .. }
            | Self::GenericError { status_code, .. } => *status_code,
            Self::ConnectionError { .. } | Self::TimeoutError { .. } => 0,
        }
    }

    /// The machine error code from the gateway's error envelope, if any.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::InvalidRequest { code, .. }
            | Self::AuthenticationError { code, .. }
            | Self::DatabaseNotFound { code, .. }
            | Self::ServerError { code, .. }
            | Self::GenericError { code, .. } => code.as_deref(),
            Self::ConnectionError { .. } | Self::TimeoutError { .. } => None,
        }
    }

    /// Classify a response with status >= 400.
    ///
    /// Reads the optional `{"error": {"message", "code"}}` envelope from the
    /// parsed body; when the envelope or its message is absent, synthesizes
    /// `"HTTP <status>"` with no code.
    pub(crate) fn from_status(status_code: u16, body: &JsonValue) -> Self {
        let detail = serde_json::from_value::<ErrorEnvelope>(body.clone())
            .unwrap_or_default()
            .error
            .unwrap_or_default();
        let message = detail
            .message
            .unwrap_or_else(|| format!("HTTP {}", status_code));
        let code = detail.code;

        match status_code {
            400 => Self::InvalidRequest {
                status_code,
                message,
                code,
            },
            401 => Self::AuthenticationError {
                status_code,
                message,
                code,
            },
            404 => Self::DatabaseNotFound {
                status_code,
                message,
                code,
            },
            500.. => Self::ServerError {
                status_code,
                message,
                code,
            },
            _ => Self::GenericError {
                status_code,
                message,
                code,
            },
        }
    }

    /// Classify a response body that failed to parse as JSON. The status
    /// code, if one was obtained, is preserved.
    pub(crate) fn parse_failure(status_code: u16, err: &serde_json::Error) -> Self {
        Self::GenericError {
            status_code,
            message: format!("failed to parse response body: {}", err),
            code: None,
        }
    }
}

impl From<reqwest::Error> for DbForgeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TimeoutError {
                message: format!("request timed out: {}", err),
            }
        } else if err.is_connect() {
            Self::ConnectionError {
                message: format!("failed to connect to DB-Forge gateway: {}", err),
            }
        } else {
            Self::GenericError {
                status_code: 0,
                message: format!("request failed: {}", err),
                code: None,
            }
        }
    }
}
