use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET  /templates   -> list_templates
/// GET  /logs        -> list_logs
/// POST /send        -> send_notification
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(notifications::list_templates))
        .route("/logs", get(notifications::list_logs))
        .route("/send", post(notifications::send_notification))
}
