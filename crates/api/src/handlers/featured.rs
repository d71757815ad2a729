//! Handlers for featured-listing promotions.
//!
//! Mutations are planned on a scratch copy of the featured list so the
//! upstream priority records can be built and sent before the working set
//! changes. Moves and removals renumber the list, so every record whose
//! position shifted is sent too. Only turfs that came from the marketplace
//! API are synced upstream.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use turfdesk_client::dto::FeaturedTurfPriority;
use turfdesk_core::audit::actions;
use turfdesk_core::featured::{self, FeaturedTurf, NewFeatured};
use turfdesk_core::turfs::{owner_display_name, Turf};
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::store::ConsoleStore;

/// A featured record with its turf and owner resolved.
#[derive(Debug, Serialize)]
pub struct FeaturedView {
    #[serde(flatten)]
    pub featured: FeaturedTurf,
    pub turf_name: String,
    pub city: String,
    pub owner_name: String,
    /// Active and today falls inside the promotion window.
    pub running: bool,
}

impl FeaturedView {
    fn resolve(featured: FeaturedTurf, store: &ConsoleStore) -> Self {
        let today = Utc::now().date_naive();
        let turf = store.turfs.iter().find(|t| t.id == featured.turf_id);
        Self {
            turf_name: turf.map_or_else(|| featured.turf_id.clone(), |t| t.name.clone()),
            city: turf.map(|t| t.city.clone()).unwrap_or_default(),
            owner_name: turf
                .map(|t| owner_display_name(t, &store.owners).to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            running: featured.is_running_on(today),
            featured,
        }
    }
}

/// Body of `PUT /featured/{turf_id}/priority`.
#[derive(Debug, Deserialize)]
pub struct PriorityChange {
    pub position: u32,
}

async fn sync_upstream(state: &AppState, record: &FeaturedTurf, create: bool) -> AppResult<()> {
    let Some(payload) = FeaturedTurfPriority::for_record(record) else {
        return Ok(());
    };
    if create {
        state.upstream.create_featured(&payload).await?;
    } else {
        state.upstream.update_featured(&payload).await?;
    }
    Ok(())
}

/// Update upstream every record whose position changed between `before` and
/// `after`, except `skip`, which the caller has already synced.
async fn sync_repositioned(
    state: &AppState,
    before: &[FeaturedTurf],
    after: &[FeaturedTurf],
    skip: &str,
) -> AppResult<()> {
    for record in featured::repositioned(before, after) {
        if record.turf_id != skip {
            sync_upstream(state, record, false).await?;
        }
    }
    Ok(())
}

/// GET /api/v1/featured
pub async fn list_featured(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<Vec<FeaturedView>>>> {
    let store = state.store.read().await;
    let mut records = store.featured.clone();
    records.sort_by_key(|f| f.position);
    let views = records
        .into_iter()
        .map(|f| FeaturedView::resolve(f, &store))
        .collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /api/v1/featured/available
pub async fn list_available(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<Vec<Turf>>>> {
    let store = state.store.read().await;
    let turfs = featured::available_turfs(&store.turfs, &store.featured)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DataResponse { data: turfs }))
}

/// POST /api/v1/featured
pub async fn add_featured(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<NewFeatured>,
) -> AppResult<(StatusCode, Json<DataResponse<FeaturedView>>)> {
    input.validate()?;

    let planned = {
        let store = state.store.read().await;
        let mut scratch = store.featured.clone();
        featured::add(&mut scratch, &store.turfs, input.clone())?
    };
    sync_upstream(&state, &planned, true).await?;

    let mut guard = state.store.write().await;
    let store = &mut *guard;
    let record = featured::add(&mut store.featured, &store.turfs, input)?;
    let view = FeaturedView::resolve(record, store);
    store.record(
        actions::ADD_FEATURED_TURF,
        format!(
            "Featured {} at position {} with badge {}",
            view.turf_name, view.featured.position, view.featured.badge
        ),
        &admin.ip_address,
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// PUT /api/v1/featured/{turf_id}/toggle
pub async fn toggle_featured(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(turf_id): Path<String>,
) -> AppResult<Json<DataResponse<FeaturedView>>> {
    let planned = {
        let store = state.store.read().await;
        let mut scratch = store.featured.clone();
        featured::toggle(&mut scratch, &turf_id)?
    };
    sync_upstream(&state, &planned, false).await?;

    let mut store = state.store.write().await;
    let record = featured::toggle(&mut store.featured, &turf_id)?;
    let view = FeaturedView::resolve(record, &store);
    store.record(
        actions::TOGGLE_FEATURED_STATUS,
        featured::toggle_audit_details(&view.turf_name, view.featured.active),
        &admin.ip_address,
    );

    Ok(Json(DataResponse { data: view }))
}

/// PUT /api/v1/featured/{turf_id}/priority
pub async fn change_priority(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(turf_id): Path<String>,
    Json(input): Json<PriorityChange>,
) -> AppResult<Json<DataResponse<Vec<FeaturedView>>>> {
    let (planned, before, after) = {
        let store = state.store.read().await;
        let before = store.featured.clone();
        let mut after = before.clone();
        let planned = featured::move_to(&mut after, &turf_id, input.position)?;
        (planned, before, after)
    };
    sync_upstream(&state, &planned, false).await?;
    sync_repositioned(&state, &before, &after, &planned.turf_id).await?;

    let mut store = state.store.write().await;
    let record = featured::move_to(&mut store.featured, &turf_id, input.position)?;
    let turf_name = store
        .turf_name(&record.turf_id)
        .unwrap_or(&record.turf_id)
        .to_string();
    store.record(
        actions::CHANGE_FEATURED_PRIORITY,
        format!("Moved {turf_name} to position {}", record.position),
        &admin.ip_address,
    );

    let views = store
        .featured
        .iter()
        .cloned()
        .map(|f| FeaturedView::resolve(f, &store))
        .collect();
    Ok(Json(DataResponse { data: views }))
}

/// DELETE /api/v1/featured/{turf_id}
///
/// Upstream has no delete call; the records that move up to close the gap
/// are updated there before the local removal.
pub async fn remove_featured(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(turf_id): Path<String>,
) -> AppResult<StatusCode> {
    let (before, after) = {
        let store = state.store.read().await;
        let before = store.featured.clone();
        let mut after = before.clone();
        featured::remove(&mut after, &turf_id)?;
        (before, after)
    };
    sync_repositioned(&state, &before, &after, &turf_id).await?;

    let mut store = state.store.write().await;
    let removed = featured::remove(&mut store.featured, &turf_id)?;
    let turf_name = store
        .turf_name(&removed.turf_id)
        .unwrap_or(&removed.turf_id)
        .to_string();
    store.record(
        actions::REMOVE_FEATURED_TURF,
        format!("Removed {turf_name} from featured turfs"),
        &admin.ip_address,
    );

    Ok(StatusCode::NO_CONTENT)
}
