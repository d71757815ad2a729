use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/turfs", get(analytics::turf_analytics))
        .route("/turfs/export", get(analytics::export_turf_analytics))
}
