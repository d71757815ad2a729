use axum::routing::{get, put};
use axum::Router;

use crate::handlers::turfs;
use crate::state::AppState;

/// Routes mounted at `/turfs`.
///
/// ```text
/// GET  /              -> list_turfs
/// POST /              -> create_turf
/// PUT  /{id}/status   -> update_turf_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(turfs::list_turfs).post(turfs::create_turf))
        .route("/{id}/status", put(turfs::update_turf_status))
}
