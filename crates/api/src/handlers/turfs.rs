//! Handlers for the turfs page.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use turfdesk_client::dto::{
    created_turf_id, upstream_id, CreateTurfDto, OWNER_ID_PREFIX, TURF_ID_PREFIX,
};
use turfdesk_core::audit::actions;
use turfdesk_core::error::CoreError;
use turfdesk_core::search::{filter_records, matches_status};
use turfdesk_core::status::{self, TurfStatus};
use turfdesk_core::turfs::{next_local_turf_id, owner_display_name, NewTurf, Turf};
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::{fallback_warning, StatusBody};
use crate::middleware::auth::AuthAdmin;
use crate::response::{DataResponse, ListView, Source};
use crate::state::AppState;

/// Query parameters for the turf list (`?search=&status=&city=`).
#[derive(Debug, Deserialize)]
pub struct TurfListParams {
    pub search: Option<String>,
    pub status: Option<String>,
    pub city: Option<String>,
}

/// GET /api/v1/turfs?search=&status=&city=
///
/// Owner names missing upstream are resolved from the owner working set.
pub async fn list_turfs(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<TurfListParams>,
) -> AppResult<Json<DataResponse<ListView<Turf>>>> {
    let fetched = state.upstream.turfs().await;

    let mut store = state.store.write().await;
    let (source, warning) = match fetched {
        Ok(turfs) => {
            store.turfs = turfs.into_iter().map(Into::into).collect();
            (Source::Upstream, None)
        }
        Err(err) => (Source::Local, Some(fallback_warning("turfs", &err))),
    };

    let resolved: Vec<Turf> = store
        .turfs
        .iter()
        .map(|t| Turf {
            owner_name: Some(owner_display_name(t, &store.owners).to_string()),
            ..t.clone()
        })
        .collect();

    let items = filter_records(&resolved, params.search.as_deref(), params.status.as_deref())
        .into_iter()
        .filter(|t| matches_status(params.city.as_deref(), &t.city))
        .collect();

    Ok(Json(DataResponse {
        data: ListView::new(items, source, warning),
    }))
}

/// POST /api/v1/turfs
///
/// Turfs of upstream owners are created upstream first and take the
/// `turf_<n>` id upstream assigned; the local copy is inserted at the top of
/// the list only after that succeeds. Turfs of console owners get the next
/// `TURF###` id, which upstream never sees.
pub async fn create_turf(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<NewTurf>,
) -> AppResult<(StatusCode, Json<DataResponse<Turf>>)> {
    input.validate()?;

    let owner_name = {
        let store = state.store.read().await;
        store
            .owners
            .iter()
            .find(|o| o.id == input.owner_id)
            .map(|o| o.name.clone())
    };

    let upstream_turf = if let Some(owner) = upstream_id(&input.owner_id, OWNER_ID_PREFIX) {
        let created = state
            .upstream
            .create_turf(&owner.to_string(), &CreateTurfDto::from(&input))
            .await?;
        let turf_id = created_turf_id(&created);
        if turf_id.is_none() {
            tracing::warn!(owner, response = %created, "Upstream turf response has no id, keeping a console id");
        }
        turf_id
    } else if owner_name.is_none() {
        return Err(CoreError::not_found("Turf owner", input.owner_id).into());
    } else {
        None
    };

    let mut store = state.store.write().await;
    let id = match upstream_turf {
        Some(turf_id) => format!("{TURF_ID_PREFIX}{turf_id}"),
        None => next_local_turf_id(&store.turfs),
    };
    let turf = Turf::from_new(input, id, owner_name);

    store.turfs.retain(|t| t.id != turf.id);
    store.turfs.insert(0, turf.clone());
    store.record(
        actions::ADD_NEW_TURF,
        format!("Added new turf {} in {}", turf.name, turf.city),
        &admin.ip_address,
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: turf })))
}

/// PUT /api/v1/turfs/{id}/status
pub async fn update_turf_status(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<String>,
    Json(input): Json<StatusBody<TurfStatus>>,
) -> AppResult<Json<DataResponse<Turf>>> {
    let mut store = state.store.write().await;
    let turf = status::transition(&mut store.turfs, &id, input.status)?.clone();
    store.record(
        actions::UPDATE_TURF_STATUS,
        format!("Changed turf {} ({}) status to {}", turf.name, turf.id, turf.status),
        &admin.ip_address,
    );

    Ok(Json(DataResponse { data: turf }))
}
