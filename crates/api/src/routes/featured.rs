//! Route definitions for featured turfs.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::featured;
use crate::state::AppState;

/// Routes mounted at `/featured`.
///
/// ```text
/// GET    /                     -> list_featured
/// POST   /                     -> add_featured
/// GET    /available            -> list_available
/// PUT    /{turf_id}/toggle     -> toggle_featured
/// PUT    /{turf_id}/priority   -> change_priority
/// DELETE /{turf_id}            -> remove_featured
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(featured::list_featured).post(featured::add_featured))
        .route("/available", get(featured::list_available))
        .route("/{turf_id}/toggle", put(featured::toggle_featured))
        .route("/{turf_id}/priority", put(featured::change_priority))
        .route("/{turf_id}", delete(featured::remove_featured))
}
