//! Seven-day per-turf analytics and its export.

use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use turfdesk_core::analytics::{self, turf_metrics, window_start, TurfMetrics};
use turfdesk_core::types::Rupees;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::query::ExportParams;
use crate::response::{csv_attachment, DataResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyticsParams {
    /// Last day of the window (default: today).
    pub as_of: Option<NaiveDate>,
}

impl AnalyticsParams {
    fn as_of(&self) -> NaiveDate {
        self.as_of.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyticsView {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub turfs: Vec<TurfMetrics>,
    pub total_bookings: usize,
    pub total_revenue: Rupees,
    pub total_settlement: Rupees,
}

async fn metrics(state: &AppState, as_of: NaiveDate) -> Vec<TurfMetrics> {
    let store = state.store.read().await;
    turf_metrics(&store.turfs, &store.owners, &store.bookings, as_of)
}

/// GET /api/v1/analytics/turfs?as_of=
pub async fn turf_analytics(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<AnalyticsParams>,
) -> AppResult<Json<DataResponse<AnalyticsView>>> {
    let as_of = params.as_of();
    let turfs = metrics(&state, as_of).await;

    Ok(Json(DataResponse {
        data: AnalyticsView {
            from: window_start(as_of),
            to: as_of,
            total_bookings: turfs.iter().map(|m| m.total_bookings).sum(),
            total_revenue: turfs.iter().map(|m| m.total_revenue).sum(),
            total_settlement: turfs.iter().map(|m| m.settlement_amount).sum(),
            turfs,
        },
    }))
}

/// GET /api/v1/analytics/turfs/export?format=csv&as_of=
///
/// CSV only; PDF generation is not offered.
pub async fn export_turf_analytics(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(export): Query<ExportParams>,
    Query(params): Query<AnalyticsParams>,
) -> AppResult<Response> {
    match export.format.as_deref().unwrap_or("csv") {
        "csv" => {
            let as_of = params.as_of();
            let rows = metrics(&state, as_of).await;
            Ok(csv_attachment(
                &format!("turf-analytics-{as_of}.csv"),
                analytics::to_csv(&rows),
            ))
        }
        "pdf" => Err(AppError::BadRequest("PDF export is not supported".into())),
        other => Err(AppError::BadRequest(format!(
            "Unknown export format '{other}'. Expected: csv"
        ))),
    }
}
