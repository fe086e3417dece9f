//! Composition root: build the store, register the routes, serve.

use std::sync::Arc;

use marquee::{api, health, MovieStore, Router, Server};

/// Fixed listen address. Verbosity is the only runtime knob (`RUST_LOG`).
const BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // The store lives as long as the server; handlers borrow it by handle.
    let store = Arc::new(MovieStore::new());

    let app = Router::new()
        .get("/movies", api::list_movies)
        .post("/movies", api::create_movie)
        .get("/movies/{id}", api::get_movie)
        .put("/movies/{id}", api::update_movie)
        .delete("/movies/{id}", api::delete_movie)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness);

    Server::bind(BIND_ADDR)
        .serve(app, store)
        .await
        .expect("server error");
}
