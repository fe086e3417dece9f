//! Explicit route table.
//!
//! One radix tree per HTTP method, O(path-length) lookup via [`matchit`].
//! You register a (method, pattern) pair, you get a handler. Lookup tells
//! the dispatcher whether a miss was "no such path" or "known path, wrong
//! verb", which is the difference between a 404 and a 405 on the wire.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as PathTree;

use crate::handler::{BoxedHandler, Handler};

/// Outcome of a route lookup.
pub(crate) enum RouteMatch {
    Found(BoxedHandler, HashMap<String, String>),
    MethodNotAllowed,
    NotFound,
}

/// The application route table.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each registration returns `self` so they chain:
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use marquee::{MovieStore, Request, Response, Router};
/// # use http::StatusCode;
/// # async fn list(_: Request, _: Arc<MovieStore>) -> Response { Response::status(StatusCode::OK) }
/// # async fn fetch(_: Request, _: Arc<MovieStore>) -> Response { Response::status(StatusCode::OK) }
/// Router::new()
///     .get("/movies", list)
///     .get("/movies/{id}", fetch);
/// ```
pub struct Router {
    routes: HashMap<Method, PathTree<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pattern. Patterns use `{name}`
    /// parameters; `req.param("name")` retrieves them.
    ///
    /// # Panics
    ///
    /// Panics on a malformed or conflicting pattern. Routes are registered
    /// once at startup, so this is a programming error, not a runtime one.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::GET, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::POST, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::PUT, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::DELETE, path, handler)
    }

    pub(crate) fn lookup(&self, method: &Method, path: &str) -> RouteMatch {
        if let Some(tree) = self.routes.get(method) {
            if let Ok(matched) = tree.at(path) {
                let params = matched
                    .params
                    .iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned()))
                    .collect();
                return RouteMatch::Found(Arc::clone(matched.value), params);
            }
        }
        // This verb missed. Does any other verb know the path?
        let known = self
            .routes
            .iter()
            .any(|(m, tree)| m != method && tree.at(path).is_ok());
        if known {
            RouteMatch::MethodNotAllowed
        } else {
            RouteMatch::NotFound
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    use crate::request::Request;
    use crate::response::Response;
    use crate::store::MovieStore;

    async fn noop(_req: Request, _store: Arc<MovieStore>) -> Response {
        Response::status(StatusCode::OK)
    }

    fn table() -> Router {
        Router::new()
            .get("/movies", noop)
            .post("/movies", noop)
            .get("/movies/{id}", noop)
            .put("/movies/{id}", noop)
            .delete("/movies/{id}", noop)
    }

    #[test]
    fn known_path_and_verb_matches() {
        let router = table();
        assert!(matches!(
            router.lookup(&Method::GET, "/movies"),
            RouteMatch::Found(..)
        ));
        assert!(matches!(
            router.lookup(&Method::DELETE, "/movies/7"),
            RouteMatch::Found(..)
        ));
    }

    #[test]
    fn wrong_verb_on_known_path_is_method_not_allowed() {
        let router = table();
        assert!(matches!(
            router.lookup(&Method::DELETE, "/movies"),
            RouteMatch::MethodNotAllowed
        ));
        assert!(matches!(
            router.lookup(&Method::POST, "/movies/7"),
            RouteMatch::MethodNotAllowed
        ));
    }

    #[test]
    fn unknown_path_is_not_found() {
        let router = table();
        assert!(matches!(
            router.lookup(&Method::GET, "/series"),
            RouteMatch::NotFound
        ));
        // Trailing slash with an empty id segment never routes.
        assert!(matches!(
            router.lookup(&Method::GET, "/movies/"),
            RouteMatch::NotFound
        ));
    }

    #[test]
    fn id_parameter_is_extracted() {
        let router = table();
        match router.lookup(&Method::GET, "/movies/42") {
            RouteMatch::Found(_, params) => {
                assert_eq!(params.get("id").map(String::as_str), Some("42"));
            }
            _ => panic!("expected a match"),
        }
    }
}
