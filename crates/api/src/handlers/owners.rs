//! Handlers for the turf owners page.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use turfdesk_core::audit::actions;
use turfdesk_core::error::CoreError;
use turfdesk_core::owners::{
    credentials_audit_details, generate_password, next_owner_id, CredentialRequest, NewOwner,
    Owner, OwnerCredentials,
};
use turfdesk_core::search::filter_records;
use turfdesk_core::status::{self, Channel, OwnerStatus};
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::{fallback_warning, StatusBody};
use crate::middleware::auth::AuthAdmin;
use crate::query::ListParams;
use crate::response::{DataResponse, ListView, Source};
use crate::state::AppState;

/// GET /api/v1/owners?search=&status=
///
/// Refresh the owner list from upstream; fall back to the working set.
pub async fn list_owners(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<ListView<Owner>>>> {
    let fetched = state.upstream.turf_owners().await;

    let mut store = state.store.write().await;
    let (source, warning) = match fetched {
        Ok(owners) => {
            store.owners = owners.into_iter().map(Into::into).collect();
            (Source::Upstream, None)
        }
        Err(err) => (Source::Local, Some(fallback_warning("owners", &err))),
    };

    let items = filter_records(&store.owners, params.search(), params.status());
    Ok(Json(DataResponse {
        data: ListView::new(items, source, warning),
    }))
}

/// POST /api/v1/owners
///
/// Add an owner locally with the next `OWN###` id.
pub async fn create_owner(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<NewOwner>,
) -> AppResult<(StatusCode, Json<DataResponse<Owner>>)> {
    input.validate()?;

    let mut store = state.store.write().await;
    let owner = Owner::from_new(input, next_owner_id(store.owners.len()), Utc::now());
    store.owners.push(owner.clone());
    store.record(
        actions::ADD_TURF_OWNER,
        format!("Added turf owner {} ({})", owner.name, owner.id),
        &admin.ip_address,
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: owner })))
}

/// POST /api/v1/owners/credentials
///
/// Generate a login for a prospective owner. Only email and SMS delivery are
/// offered.
pub async fn generate_credentials(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<CredentialRequest>,
) -> AppResult<Json<DataResponse<OwnerCredentials>>> {
    input.validate()?;
    if input.send_via == Some(Channel::Whatsapp) {
        return Err(CoreError::Validation("send_via: must be email or sms".into()).into());
    }

    let password = generate_password(&mut rand::rng());

    let mut store = state.store.write().await;
    let credentials = OwnerCredentials {
        user_id: next_owner_id(store.owners.len()),
        password,
    };
    store.record(
        actions::GENERATE_CREDENTIALS,
        credentials_audit_details(input.name.trim(), input.send_via),
        &admin.ip_address,
    );

    Ok(Json(DataResponse { data: credentials }))
}

/// PUT /api/v1/owners/{id}/status
pub async fn update_owner_status(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<String>,
    Json(input): Json<StatusBody<OwnerStatus>>,
) -> AppResult<Json<DataResponse<Owner>>> {
    let mut store = state.store.write().await;
    let owner = status::transition(&mut store.owners, &id, input.status)?.clone();
    store.record(
        actions::UPDATE_STATUS,
        format!("Changed owner {} ({}) status to {}", owner.name, owner.id, owner.status),
        &admin.ip_address,
    );

    Ok(Json(DataResponse { data: owner }))
}

/// DELETE /api/v1/owners/{id}
pub async fn delete_owner(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let mut store = state.store.write().await;
    let owner = status::remove(&mut store.owners, &id)?;
    store.record(
        actions::DELETE_OWNER,
        format!("Deleted owner {} ({})", owner.name, owner.id),
        &admin.ip_address,
    );

    Ok(StatusCode::NO_CONTENT)
}
