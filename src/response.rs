//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Three constructors cover everything this service sends: JSON, plain
//! text, and a bare status. Build one in your handler and return it.

use bytes::Bytes;
use http::{header, StatusCode};
use http_body_util::Full;
use serde::Serialize;

use crate::error::ApiError;

// ── Response ─────────────────────────────────────────────────────────────────

/// An outgoing HTTP response.
///
/// ```rust
/// use http::StatusCode;
/// use marquee::Response;
///
/// Response::json(&vec![1, 2, 3]);
/// Response::text(StatusCode::NOT_FOUND, "not found");
/// Response::status(StatusCode::NO_CONTENT);
/// ```
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Bytes,
}

impl Response {
    /// `200 OK` with `value` serialized as `application/json`.
    pub fn json<T: Serialize>(value: &T) -> Self {
        Self::json_with(StatusCode::OK, value)
    }

    /// JSON body with an explicit status (`201 Created` on the create path).
    pub fn json_with<T: Serialize>(status: StatusCode, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self {
                status,
                content_type: Some("application/json"),
                body: Bytes::from(body),
            },
            // Unreachable for the plain structs this service serializes,
            // but a total match beats an unwrap on the response path.
            Err(_) => Self::text(StatusCode::INTERNAL_SERVER_ERROR, "serialization failed"),
        }
    }

    /// Plain-text body (`text/plain; charset=utf-8`).
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8"),
            body: Bytes::from(body.into().into_bytes()),
        }
    }

    /// Response with no body (`204 No Content` on the delete path).
    pub fn status(status: StatusCode) -> Self {
        Self { status, content_type: None, body: Bytes::new() }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        if let Some(ct) = self.content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder
            .body(Full::new(self.body))
            .expect("static response parts are valid")
    }
}

// ── IntoResponse ──────────────────────────────────────────────────────────────

/// Conversion into an HTTP [`Response`].
///
/// Handlers may return any implementor. The one that matters here is
/// `Result<Response, ApiError>`: the happy path stays a plain `Response`,
/// and every `?`-propagated [`ApiError`] becomes its status + plain-text
/// rendering.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl<T: IntoResponse> IntoResponse for Result<T, ApiError> {
    fn into_response(self) -> Response {
        match self {
            Ok(value) => value.into_response(),
            Err(e) => e.into_response(),
        }
    }
}
