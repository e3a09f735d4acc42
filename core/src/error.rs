//! Error types for the poll API client.
//!
//! # Design
//! One closed enum for the whole client, so callers pattern-match on the
//! failure kind instead of catching broad error classes. Validation failures
//! are raised by `build_*` methods before any request exists, which is how
//! the "no network round trip on bad arguments" guarantee is enforced.
//! Recognized server statuses (404, 401, the two endpoint-specific 400s) get
//! dedicated variants; every other non-2xx lands in `Server` with the status
//! code and message as separate fields.

use std::fmt;

/// Errors returned by `PollClient` methods.
#[derive(Debug)]
pub enum ApiError {
    /// A caller-supplied argument violated a precondition. No request was
    /// built and no network activity took place.
    Validation(String),

    /// The server returned 404 — the poll (or option) does not exist.
    NotFound,

    /// The server returned 401 — the access token is missing, invalid, or
    /// expired.
    Unauthorized,

    /// Registration failed with 400 — the username is already taken.
    Conflict,

    /// Login failed with 400 — incorrect username or password.
    InvalidCredentials,

    /// The request never completed: connection failure, timeout, or the
    /// response body could not be read.
    Transport(String),

    /// The server returned an unrecognized non-2xx status. `detail` is the
    /// server's `detail` message when the error body carries one, otherwise
    /// the raw body.
    Server { status: u16, detail: String },

    /// A 2xx response body did not match the expected schema.
    MalformedResponse(String),

    /// The request payload could not be serialized.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg) => write!(f, "invalid argument: {msg}"),
            ApiError::NotFound => write!(f, "poll or option not found"),
            ApiError::Unauthorized => {
                write!(f, "unauthorized: invalid or expired access token")
            }
            ApiError::Conflict => write!(f, "username already registered"),
            ApiError::InvalidCredentials => write!(f, "incorrect username or password"),
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::Server { status, detail } => write!(f, "HTTP {status}: {detail}"),
            ApiError::MalformedResponse(msg) => {
                write!(f, "malformed response body: {msg}")
            }
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Build a `Server` error from an unrecognized status, pulling the
    /// message out of a FastAPI-style `{"detail": "..."}` body when present.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail")?.as_str().map(String::from))
            .unwrap_or_else(|| body.to_string());
        ApiError::Server { status, detail }
    }
}
