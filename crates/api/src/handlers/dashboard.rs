//! Dashboard KPIs, recent bookings and top turfs.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use turfdesk_client::dto::{DashboardData, DashboardMetric};
use turfdesk_core::dashboard::{
    self, KpiCard, LocalKpis, ACTIVE_TURFS, PANEL_ROWS, PENDING_SETTLEMENTS, REVENUE_TODAY,
    TODAYS_BOOKINGS,
};
use turfdesk_core::money::{format_inr, to_rupees};

use crate::error::AppResult;
use crate::handlers::fallback_warning;
use crate::middleware::auth::AuthAdmin;
use crate::response::{DataResponse, Source};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecentBookingRow {
    pub booking_id: String,
    pub customer_name: String,
    pub turf_name: String,
    pub amount: f64,
    pub time_slot: String,
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct TopTurfRow {
    pub turf_id: String,
    pub turf_name: String,
    pub total_bookings: i64,
    pub revenue: f64,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub kpis: Vec<KpiCard>,
    pub recent_bookings: Vec<RecentBookingRow>,
    pub top_turfs: Vec<TopTurfRow>,
}

fn metric_card(name: &'static str, metric: &DashboardMetric, value: String) -> KpiCard {
    KpiCard::new(name, value).with_change(metric.percentage_change, metric.comparison_period.clone())
}

fn upstream_view(data: DashboardData) -> DashboardView {
    let kpis = vec![
        metric_card(
            TODAYS_BOOKINGS,
            &data.todays_bookings,
            (data.todays_bookings.value.round() as i64).to_string(),
        ),
        metric_card(
            REVENUE_TODAY,
            &data.revenue_today,
            format_inr(to_rupees(data.revenue_today.value)),
        ),
        metric_card(
            ACTIVE_TURFS,
            &data.active_turfs,
            (data.active_turfs.value.round() as i64).to_string(),
        ),
        metric_card(
            PENDING_SETTLEMENTS,
            &data.pending_settlements,
            format_inr(to_rupees(data.pending_settlements.value)),
        ),
    ];

    let recent_bookings = data
        .recent_bookings
        .into_iter()
        .take(PANEL_ROWS)
        .map(|b| RecentBookingRow {
            booking_id: b.booking_id.to_string(),
            customer_name: b.customer_name,
            turf_name: b.turf_name,
            amount: b.amount,
            time_slot: b.time_slot,
            date: b.booking_date,
        })
        .collect();

    let top_turfs = data
        .top_performing_turfs
        .into_iter()
        .take(PANEL_ROWS)
        .map(|t| TopTurfRow {
            turf_id: format!("{}{}", turfdesk_client::dto::TURF_ID_PREFIX, t.turf_id),
            turf_name: t.turf_name,
            total_bookings: t.total_bookings,
            revenue: t.total_revenue,
        })
        .collect();

    DashboardView {
        source: Source::Upstream,
        warning: None,
        kpis,
        recent_bookings,
        top_turfs,
    }
}

/// GET /api/v1/dashboard
///
/// Upstream metrics when reachable, otherwise KPIs derived from the local
/// working sets.
pub async fn get_dashboard(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<DashboardView>>> {
    let err = match state.upstream.dashboard().await {
        Ok(data) => return Ok(Json(DataResponse { data: upstream_view(data) })),
        Err(err) => err,
    };
    let warning = fallback_warning("dashboard", &err);

    let store = state.store.read().await;
    let kpis = LocalKpis::derive(&store.bookings, &store.turfs, &store.owners).cards();

    let recent_bookings = store
        .bookings
        .iter()
        .take(PANEL_ROWS)
        .map(|b| RecentBookingRow {
            booking_id: b.id.clone(),
            customer_name: b.user_name.clone(),
            turf_name: b.turf_name.clone(),
            amount: b.amount,
            time_slot: b.time.clone(),
            date: b.date.to_string(),
        })
        .collect();

    let top_turfs = dashboard::top_turfs(&store.turfs, PANEL_ROWS)
        .into_iter()
        .map(|t| TopTurfRow {
            turf_id: t.id,
            turf_name: t.name,
            total_bookings: t.total_bookings_30d,
            revenue: t.revenue_30d as f64,
        })
        .collect();

    Ok(Json(DataResponse {
        data: DashboardView {
            source: Source::Local,
            warning: Some(warning),
            kpis,
            recent_bookings,
            top_turfs,
        },
    }))
}
