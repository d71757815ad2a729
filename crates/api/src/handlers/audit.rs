//! Handlers for the audit log page.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use turfdesk_core::audit::{self, ActionTone, AuditEntry};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::query::ExportParams;
use crate::response::{csv_attachment, DataResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AuditSearchParams {
    pub search: Option<String>,
}

/// An audit entry with its display tone.
#[derive(Debug, Serialize)]
pub struct AuditRow {
    #[serde(flatten)]
    pub entry: AuditEntry,
    pub tone: ActionTone,
}

#[derive(Debug, Serialize)]
pub struct AuditView {
    pub entries: Vec<AuditRow>,
    pub total: usize,
    /// Entries recorded today (UTC), across the whole log.
    pub today: usize,
}

/// GET /api/v1/audit-logs?search=
pub async fn list_audit_logs(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<AuditSearchParams>,
) -> AppResult<Json<DataResponse<AuditView>>> {
    let store = state.store.read().await;
    let entries: Vec<AuditRow> = store
        .audit
        .search(params.search.as_deref())
        .into_iter()
        .map(|entry| AuditRow {
            tone: entry.tone(),
            entry,
        })
        .collect();

    Ok(Json(DataResponse {
        data: AuditView {
            total: entries.len(),
            today: store.audit.count_on(Utc::now().date_naive()),
            entries,
        },
    }))
}

/// GET /api/v1/audit-logs/export?format=csv|json
pub async fn export_audit_logs(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<ExportParams>,
) -> AppResult<Response> {
    let entries: Vec<_> = state.store.read().await.audit.entries().iter().cloned().collect();

    match params.format.as_deref().unwrap_or("json") {
        "csv" => Ok(csv_attachment("audit-logs.csv", audit::to_csv(&entries))),
        "json" => Ok(Json(DataResponse { data: entries }).into_response()),
        other => Err(AppError::BadRequest(format!(
            "Unknown export format '{other}'. Expected: csv, json"
        ))),
    }
}
