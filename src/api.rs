//! Movie CRUD handlers.
//!
//! Each handler is an `async fn(Request, Arc<MovieStore>)` returning
//! `Result<Response, ApiError>`: parse and validate first, touch the store
//! second, serialize last. A handler that errors has not mutated anything.

use std::sync::Arc;

use http::StatusCode;
use tracing::debug;

use crate::error::ApiError;
use crate::movie::MovieDraft;
use crate::request::Request;
use crate::response::Response;
use crate::store::MovieStore;

/// `GET /movies` — the whole collection, insertion order, `[]` when empty.
pub async fn list_movies(_req: Request, store: Arc<MovieStore>) -> Result<Response, ApiError> {
    Ok(Response::json(&store.list()))
}

/// `POST /movies` — decode, validate, assign the next ID, append.
pub async fn create_movie(req: Request, store: Arc<MovieStore>) -> Result<Response, ApiError> {
    let draft = MovieDraft::from_json(req.body())?;
    let movie = store.create(draft);
    debug!(id = movie.id, title = %movie.title, "movie created");
    Ok(Response::json_with(StatusCode::CREATED, &movie))
}

/// `GET /movies/{id}`
pub async fn get_movie(req: Request, store: Arc<MovieStore>) -> Result<Response, ApiError> {
    let id = req.id_param()?;
    let movie = store.get(id).ok_or(ApiError::NotFound)?;
    Ok(Response::json(&movie))
}

/// `PUT /movies/{id}` — full replacement of the mutable fields, ID preserved.
///
/// Validation runs before the store is consulted, so a 400 never leaves a
/// half-written record behind.
pub async fn update_movie(req: Request, store: Arc<MovieStore>) -> Result<Response, ApiError> {
    let id = req.id_param()?;
    let draft = MovieDraft::from_json(req.body())?;
    let movie = store.update(id, draft).ok_or(ApiError::NotFound)?;
    debug!(id = movie.id, "movie updated");
    Ok(Response::json(&movie))
}

/// `DELETE /movies/{id}` — 204 with an empty body on success.
pub async fn delete_movie(req: Request, store: Arc<MovieStore>) -> Result<Response, ApiError> {
    let id = req.id_param()?;
    if !store.remove(id) {
        return Err(ApiError::NotFound);
    }
    debug!(id, "movie deleted");
    Ok(Response::status(StatusCode::NO_CONTENT))
}
