//! Reference data for the add-turf form: sports, amenities and locations.

use axum::extract::{Path, State};
use axum::Json;
use turfdesk_client::dto::{fallback_amenities, fallback_sports, Amenity, City, Sport, State as Region};

use crate::error::AppResult;
use crate::handlers::fallback_warning;
use crate::middleware::auth::AuthAdmin;
use crate::response::{DataResponse, ListView, Source};
use crate::state::AppState;

/// GET /api/v1/reference/sports
pub async fn list_sports(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<ListView<Sport>>>> {
    let view = match state.upstream.sports().await {
        Ok(sports) => ListView::new(sports, Source::Upstream, None),
        Err(err) => ListView::new(
            fallback_sports(),
            Source::Local,
            Some(fallback_warning("sports", &err)),
        ),
    };
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/reference/amenities
pub async fn list_amenities(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<ListView<Amenity>>>> {
    let view = match state.upstream.amenities().await {
        Ok(amenities) => ListView::new(amenities, Source::Upstream, None),
        Err(err) => ListView::new(
            fallback_amenities(),
            Source::Local,
            Some(fallback_warning("amenities", &err)),
        ),
    };
    Ok(Json(DataResponse { data: view }))
}

/// GET /api/v1/reference/states
pub async fn list_states(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<Vec<Region>>>> {
    let states = state.upstream.states().await?;
    Ok(Json(DataResponse { data: states }))
}

/// GET /api/v1/reference/states/{id}/cities
pub async fn list_cities(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(state_id): Path<i64>,
) -> AppResult<Json<DataResponse<Vec<City>>>> {
    let cities = state.upstream.cities(state_id).await?;
    Ok(Json(DataResponse { data: cities }))
}
