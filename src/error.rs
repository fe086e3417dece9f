//! Error types.
//!
//! Two kinds of failure, two types. [`ApiError`] is request-scoped and maps
//! to a status code plus a plain-text body; handlers return
//! `Result<Response, ApiError>` and let `?` do the plumbing. [`ServeError`]
//! surfaces infrastructure failures: binding to a port or accepting a
//! connection.

use std::fmt;

use http::StatusCode;

use crate::response::{IntoResponse, Response};

// ── ApiError ─────────────────────────────────────────────────────────────────

/// A terminal, request-scoped failure.
#[derive(Debug)]
pub enum ApiError {
    /// The path is routable, just not with this verb.
    MethodNotAllowed,
    /// The body failed to decode, or a required field is blank or zero.
    InvalidInput(String),
    /// The `{id}` path segment is not an unsigned base-10 integer.
    InvalidId,
    /// No movie with the requested ID.
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidInput(_) | Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MethodNotAllowed => f.write_str("method not allowed"),
            Self::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            Self::InvalidId => f.write_str("invalid movie id"),
            Self::NotFound => f.write_str("movie not found"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Response::text(self.status(), self.to_string())
    }
}

// ── ServeError ───────────────────────────────────────────────────────────────

/// The error type returned by [`Server::serve`](crate::Server::serve).
///
/// Application-level errors (400, 404, etc.) are [`ApiError`]s, not this.
#[derive(Debug)]
pub struct ServeError(std::io::Error);

impl fmt::Display for ServeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "io: {}", self.0)
    }
}

impl std::error::Error for ServeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<std::io::Error> for ServeError {
    fn from(e: std::io::Error) -> Self {
        Self(e)
    }
}
