//! Route definitions for turf owners.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::owners;
use crate::state::AppState;

/// Routes mounted at `/owners`.
///
/// ```text
/// GET    /                -> list_owners
/// POST   /                -> create_owner
/// POST   /credentials     -> generate_credentials
/// PUT    /{id}/status     -> update_owner_status
/// DELETE /{id}            -> delete_owner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(owners::list_owners).post(owners::create_owner))
        .route("/credentials", post(owners::generate_credentials))
        .route("/{id}/status", put(owners::update_owner_status))
        .route("/{id}", delete(owners::delete_owner))
}
