//! Handlers for owner registration requests (enquiries).
//!
//! Decisions go upstream first; the local copy and the counters change only
//! after the marketplace API accepted the decision.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use turfdesk_core::audit::actions;
use turfdesk_core::error::CoreError;
use turfdesk_core::requests::{apply_decision, filter_requests, OwnerRequest, RejectRequest, RequestStats};
use turfdesk_core::status::RequestStatus;

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::query::ListParams;
use crate::response::{DataResponse, ListView, Source};
use crate::state::AppState;

/// Admin id sent with upstream approvals.
const UPSTREAM_ADMIN_ID: i64 = 1;

/// GET /api/v1/owner-requests?search=&status=
///
/// Requests and counters come from upstream only; a failed fetch is a 502.
pub async fn list_requests(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<ListView<OwnerRequest, RequestStats>>>> {
    let page = state.upstream.owner_requests().await?;

    let mut store = state.store.write().await;
    store.request_stats = page.stats();
    store.requests = page.requests.into_iter().map(Into::into).collect();

    let items = filter_requests(&store.requests, params.search(), params.status());
    Ok(Json(DataResponse {
        data: ListView::new(items, Source::Upstream, None).with_summary(store.request_stats),
    }))
}

/// Fail unless the request is known locally and still pending.
async fn ensure_pending(state: &AppState, request_id: i64) -> Result<String, CoreError> {
    let store = state.store.read().await;
    let request = store
        .requests
        .iter()
        .find(|r| r.request_id == request_id)
        .ok_or_else(|| CoreError::not_found(OwnerRequest::ENTITY, request_id.to_string()))?;
    if request.status != RequestStatus::Pending {
        return Err(CoreError::Conflict(format!(
            "Request {request_id} is already {}",
            request.status
        )));
    }
    Ok(request.owner_name.clone())
}

async fn decide(
    state: &AppState,
    request_id: i64,
    decision: RequestStatus,
) -> Result<(OwnerRequest, RequestStats), CoreError> {
    let now = Utc::now().to_rfc3339();
    let mut store = state.store.write().await;
    let store = &mut *store;
    let request = apply_decision(
        &mut store.requests,
        &mut store.request_stats,
        request_id,
        decision,
        &now,
    )?;
    Ok((request, store.request_stats))
}

/// Decided request plus the updated counters.
#[derive(Debug, serde::Serialize)]
pub struct DecisionView {
    pub request: OwnerRequest,
    pub stats: RequestStats,
}

/// POST /api/v1/owner-requests/{id}/approve
pub async fn approve_request(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(request_id): Path<i64>,
) -> AppResult<Json<DataResponse<DecisionView>>> {
    let owner_name = ensure_pending(&state, request_id).await?;

    state
        .upstream
        .approve_owner_request(request_id, UPSTREAM_ADMIN_ID)
        .await?;

    let (request, stats) = decide(&state, request_id, RequestStatus::Approved).await?;
    state.store.write().await.record(
        actions::APPROVE_REQUEST,
        format!("Approved registration request #{request_id} from {owner_name}"),
        &admin.ip_address,
    );

    Ok(Json(DataResponse {
        data: DecisionView { request, stats },
    }))
}

/// POST /api/v1/owner-requests/{id}/reject
pub async fn reject_request(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(request_id): Path<i64>,
    Json(input): Json<RejectRequest>,
) -> AppResult<Json<DataResponse<DecisionView>>> {
    let reason = input.trimmed_reason()?;
    let owner_name = ensure_pending(&state, request_id).await?;

    state
        .upstream
        .reject_owner_request(request_id, reason)
        .await?;

    let (request, stats) = decide(&state, request_id, RequestStatus::Rejected).await?;
    state.store.write().await.record(
        actions::REJECT_REQUEST,
        format!("Rejected registration request #{request_id} from {owner_name}: {reason}"),
        &admin.ip_address,
    );

    Ok(Json(DataResponse {
        data: DecisionView { request, stats },
    }))
}
