//! Handlers for weekly settlements and urgent payouts.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use turfdesk_core::audit::actions;
use turfdesk_core::settlement::{
    self, rebuild_week, week_start_of, SettlementSummary, TurfRef, WeeklySettlement,
};
use turfdesk_core::types::Rupees;

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::store::ConsoleStore;

/// `?week_start=YYYY-MM-DD`; any day of the week works, the current week is
/// the default.
#[derive(Debug, Deserialize)]
pub struct WeekParams {
    pub week_start: Option<NaiveDate>,
}

impl WeekParams {
    fn week(&self) -> NaiveDate {
        week_start_of(self.week_start.unwrap_or_else(|| Utc::now().date_naive()))
    }
}

#[derive(Debug, Deserialize)]
pub struct UrgentRequest {
    pub amount: Rupees,
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WeekView {
    pub week_start: NaiveDate,
    pub settlements: Vec<WeeklySettlement>,
    pub summary: SettlementSummary,
}

fn week_view(store: &ConsoleStore, week: NaiveDate) -> WeekView {
    let settlements: Vec<WeeklySettlement> = store
        .settlements
        .iter()
        .filter(|s| s.week_start == week)
        .cloned()
        .collect();
    WeekView {
        week_start: week,
        summary: settlement::summarize(&settlements),
        settlements,
    }
}

/// GET /api/v1/settlements?week_start=
pub async fn list_settlements(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<WeekParams>,
) -> AppResult<Json<DataResponse<WeekView>>> {
    let store = state.store.read().await;
    Ok(Json(DataResponse {
        data: week_view(&store, params.week()),
    }))
}

/// POST /api/v1/settlements/recompute?week_start=
///
/// Rebuild the week from confirmed booking revenue, one row per turf.
pub async fn recompute_settlements(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Query(params): Query<WeekParams>,
) -> AppResult<Json<DataResponse<WeekView>>> {
    let week = params.week();

    let mut guard = state.store.write().await;
    let store = &mut *guard;
    let turfs: Vec<TurfRef<'_>> = store
        .turfs
        .iter()
        .map(|t| TurfRef {
            id: &t.id,
            name: &t.name,
            owner_id: &t.owner_id,
        })
        .collect();
    rebuild_week(&mut store.settlements, &turfs, &store.bookings, week);

    let view = week_view(store, week);
    store.record(
        actions::RECOMPUTE_SETTLEMENTS,
        format!(
            "Recomputed settlements for week of {week}: {} turfs, revenue {}",
            view.summary.turfs, view.summary.total_revenue
        ),
        &admin.ip_address,
    );

    Ok(Json(DataResponse { data: view }))
}

/// POST /api/v1/settlements/{turf_id}/urgent?week_start=
pub async fn urgent_settlement(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(turf_id): Path<String>,
    Query(params): Query<WeekParams>,
    Json(input): Json<UrgentRequest>,
) -> AppResult<Json<DataResponse<WeeklySettlement>>> {
    let mut store = state.store.write().await;
    let row = settlement::find_mut(&mut store.settlements, &turf_id, params.week())?;
    row.record_urgent(input.amount, input.note, Utc::now())?;
    let details = row.urgent_audit_details(input.amount);
    let row = row.clone();
    store.record(actions::URGENT_SETTLEMENT, details, &admin.ip_address);

    Ok(Json(DataResponse { data: row }))
}

/// POST /api/v1/settlements/{turf_id}/settle?week_start=
pub async fn settle_week(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(turf_id): Path<String>,
    Query(params): Query<WeekParams>,
) -> AppResult<Json<DataResponse<WeeklySettlement>>> {
    let mut store = state.store.write().await;
    let row = settlement::find_mut(&mut store.settlements, &turf_id, params.week())?;
    let payout = row.settle(Utc::now())?;
    let details = row.settle_audit_details(payout);
    let row = row.clone();
    store.record(actions::SETTLE_WEEK, details, &admin.ip_address);

    Ok(Json(DataResponse { data: row }))
}
