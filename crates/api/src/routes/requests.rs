//! Route definitions for owner registration requests.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// Routes mounted at `/owner-requests`.
///
/// ```text
/// GET  /               -> list_requests
/// POST /{id}/approve   -> approve_request
/// POST /{id}/reject    -> reject_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(requests::list_requests))
        .route("/{id}/approve", post(requests::approve_request))
        .route("/{id}/reject", post(requests::reject_request))
}
