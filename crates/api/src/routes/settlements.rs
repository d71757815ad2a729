//! Route definitions for weekly settlements.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::settlements;
use crate::state::AppState;

/// Routes mounted at `/settlements`. Every route takes an optional
/// `?week_start=` selecting the week.
///
/// ```text
/// GET  /                    -> list_settlements
/// POST /recompute           -> recompute_settlements
/// POST /{turf_id}/urgent    -> urgent_settlement
/// POST /{turf_id}/settle    -> settle_week
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(settlements::list_settlements))
        .route("/recompute", post(settlements::recompute_settlements))
        .route("/{turf_id}/urgent", post(settlements::urgent_settlement))
        .route("/{turf_id}/settle", post(settlements::settle_week))
}
