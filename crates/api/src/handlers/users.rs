//! Handlers for the end users page.

use axum::extract::{Path, Query, State};
use axum::Json;
use turfdesk_core::audit::actions;
use turfdesk_core::search::filter_records;
use turfdesk_core::status;
use turfdesk_core::users::{upstream_user_id, User, UserStatusChange};

use crate::error::AppResult;
use crate::handlers::fallback_warning;
use crate::middleware::auth::AuthAdmin;
use crate::query::ListParams;
use crate::response::{DataResponse, ListView, Source};
use crate::state::AppState;

/// GET /api/v1/users?search=&status=
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<ListView<User>>>> {
    let fetched = state.upstream.users().await;

    let mut store = state.store.write().await;
    let (source, warning) = match fetched {
        Ok(users) => {
            store.users = users.into_iter().map(Into::into).collect();
            (Source::Upstream, None)
        }
        Err(err) => (Source::Local, Some(fallback_warning("users", &err))),
    };

    let items = filter_records(&store.users, params.search(), params.status());
    Ok(Json(DataResponse {
        data: ListView::new(items, source, warning),
    }))
}

/// PUT /api/v1/users/{id}/status
///
/// Upstream users get their `isActive` flag set first; suspended and blocked
/// both map to inactive.
pub async fn update_user_status(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<String>,
    Json(input): Json<UserStatusChange>,
) -> AppResult<Json<DataResponse<User>>> {
    status::find(&state.store.read().await.users, &id)?;

    if let Some(upstream_id) = upstream_user_id(&id) {
        state
            .upstream
            .update_user_status(upstream_id, input.is_active())
            .await?;
    }

    let mut store = state.store.write().await;
    let user = status::transition(&mut store.users, &id, input.status)?.clone();
    store.record(
        actions::UPDATE_USER_STATUS,
        input.audit_details(&user.id),
        &admin.ip_address,
    );

    Ok(Json(DataResponse { data: user }))
}
