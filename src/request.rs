//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::{HeaderMap, Method};

use crate::error::ApiError;

/// An incoming request, seen by a handler after the body has been buffered
/// and the route matched. Handlers never touch hyper's streaming types.
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        headers: HeaderMap,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        Self { method, path, headers, body, params }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/movies/{id}`, `req.param("id")` on `/movies/42`
    /// returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// The `{id}` path parameter, parsed as an unsigned integer.
    ///
    /// A segment that is not a base-10 unsigned integer is a client error
    /// ([`ApiError::InvalidId`]), not a missing record.
    pub fn id_param(&self) -> Result<u64, ApiError> {
        self.param("id")
            .ok_or(ApiError::InvalidId)?
            .parse()
            .map_err(|_| ApiError::InvalidId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_id(segment: &str) -> Request {
        let mut params = HashMap::new();
        params.insert("id".to_owned(), segment.to_owned());
        Request::new(
            Method::GET,
            format!("/movies/{segment}"),
            HeaderMap::new(),
            Bytes::new(),
            params,
        )
    }

    #[test]
    fn id_param_parses_digits() {
        assert_eq!(with_id("42").id_param().unwrap(), 42);
        assert_eq!(with_id("0").id_param().unwrap(), 0);
    }

    #[test]
    fn id_param_rejects_non_integers() {
        for segment in ["abc", "-1", "1.5", "1x", ""] {
            assert!(
                matches!(with_id(segment).id_param(), Err(ApiError::InvalidId)),
                "accepted: {segment:?}"
            );
        }
    }
}
