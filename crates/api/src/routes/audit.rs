//! Route definitions for the audit log.

use axum::routing::get;
use axum::Router;

use crate::handlers::audit;
use crate::state::AppState;

/// Audit routes mounted at `/audit-logs`.
///
/// ```text
/// GET /          -> list_audit_logs
/// GET /export    -> export_audit_logs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(audit::list_audit_logs))
        .route("/export", get(audit::export_audit_logs))
}
