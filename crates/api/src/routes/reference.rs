use axum::routing::get;
use axum::Router;

use crate::handlers::reference;
use crate::state::AppState;

/// Routes mounted at `/reference`.
///
/// ```text
/// GET /sports                -> list_sports
/// GET /amenities             -> list_amenities
/// GET /states                -> list_states
/// GET /states/{id}/cities    -> list_cities
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sports", get(reference::list_sports))
        .route("/amenities", get(reference::list_amenities))
        .route("/states", get(reference::list_states))
        .route("/states/{id}/cities", get(reference::list_cities))
}
