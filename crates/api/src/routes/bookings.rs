use axum::routing::{get, put};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET /               -> list_bookings
/// PUT /{id}/status    -> update_booking_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bookings::list_bookings))
        .route("/{id}/status", put(bookings::update_booking_status))
}
