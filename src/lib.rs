//! # marquee
//!
//! An in-memory movie catalog over HTTP. One resource, five endpoints,
//! nothing persisted: restart the process and the catalog is empty again.
//!
//! ## The wire contract
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/movies` | 200 — JSON array, insertion order |
//! | POST | `/movies` | 201 — created movie with server-assigned `id` |
//! | GET | `/movies/{id}` | 200 — one movie |
//! | PUT | `/movies/{id}` | 200 — updated movie, `id` preserved |
//! | DELETE | `/movies/{id}` | 204 — empty body |
//!
//! Failures are plain text: 400 for an unparsable `{id}` segment or an
//! invalid body, 404 for a missing record, 405 for a wrong verb on a known
//! path. IDs are assigned by the server, start at 1, only increase, and are
//! never reused.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use marquee::{api, MovieStore, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(MovieStore::new());
//!
//!     let app = Router::new()
//!         .get("/movies", api::list_movies)
//!         .post("/movies", api::create_movie)
//!         .get("/movies/{id}", api::get_movie);
//!
//!     Server::bind("0.0.0.0:8080").serve(app, store).await.unwrap();
//! }
//! ```

mod error;
mod handler;
mod movie;
mod request;
mod response;
mod router;
mod server;
mod store;

pub mod api;
pub mod health;

pub use error::{ApiError, ServeError};
pub use handler::Handler;
pub use movie::{Movie, MovieDraft};
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use store::MovieStore;
