//! Liveness and readiness probe handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? |
//! | **Readiness** | `/readyz` | Can it serve traffic? |

use std::sync::Arc;

use http::StatusCode;

use crate::request::Request;
use crate::response::Response;
use crate::store::MovieStore;

/// Liveness probe. If the process can answer HTTP at all, it is alive.
pub async fn liveness(_req: Request, _store: Arc<MovieStore>) -> Response {
    Response::text(StatusCode::OK, "ok")
}

/// Readiness probe. The store lives in memory, so it is ready the moment
/// it exists; there are no dependencies to warm up.
pub async fn readiness(_req: Request, _store: Arc<MovieStore>) -> Response {
    Response::text(StatusCode::OK, "ready")
}
