use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /              -> list_events
/// POST   /              -> create_event
/// PUT    /{id}/status   -> update_event_status
/// DELETE /{id}          -> delete_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route("/{id}/status", put(events::update_event_status))
        .route("/{id}", delete(events::delete_event))
}
