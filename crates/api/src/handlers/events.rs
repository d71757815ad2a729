//! Handlers for the events page.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use turfdesk_core::audit::actions;
use turfdesk_core::events::{event_id, Event, NewEvent};
use turfdesk_core::status::{self, EventStatus};
use validator::Validate;

use crate::error::AppResult;
use crate::handlers::StatusBody;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::store::ConsoleStore;

/// Turf shown for events whose turf is not in the working set.
const UNKNOWN_TURF: &str = "Unknown Turf";

/// An event with its venue resolved.
#[derive(Debug, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub turf_name: String,
    pub city: Option<String>,
    pub fill_percent: u32,
    pub seats_left: u32,
}

impl EventView {
    fn resolve(event: Event, store: &ConsoleStore) -> Self {
        let turf = store.turfs.iter().find(|t| t.id == event.turf_id);
        Self {
            turf_name: turf.map_or(UNKNOWN_TURF.to_string(), |t| t.name.clone()),
            city: turf.map(|t| t.city.clone()),
            fill_percent: event.fill_percent(),
            seats_left: event.seats_left(),
            event,
        }
    }
}

/// GET /api/v1/events
pub async fn list_events(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<Vec<EventView>>>> {
    let store = state.store.read().await;
    let events = store
        .events
        .iter()
        .cloned()
        .map(|e| EventView::resolve(e, &store))
        .collect();
    Ok(Json(DataResponse { data: events }))
}

/// POST /api/v1/events
pub async fn create_event(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<NewEvent>,
) -> AppResult<(StatusCode, Json<DataResponse<EventView>>)> {
    input.validate()?;

    let event = Event::from_new(input, event_id(Utc::now().timestamp_millis()));

    let mut store = state.store.write().await;
    store.events.insert(0, event.clone());
    let view = EventView::resolve(event, &store);
    store.record(
        actions::ADD_EVENT,
        format!("Created event {} at {} on {}", view.event.name, view.turf_name, view.event.date),
        &admin.ip_address,
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: view })))
}

/// DELETE /api/v1/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let mut store = state.store.write().await;
    let event = status::remove(&mut store.events, &id)?;
    store.record(
        actions::DELETE_EVENT,
        format!("Deleted event {} ({})", event.name, event.id),
        &admin.ip_address,
    );

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/events/{id}/status
pub async fn update_event_status(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<String>,
    Json(input): Json<StatusBody<EventStatus>>,
) -> AppResult<Json<DataResponse<EventView>>> {
    let mut store = state.store.write().await;
    let event = status::transition(&mut store.events, &id, input.status)?.clone();
    store.record(
        actions::UPDATE_EVENT_STATUS,
        format!("Changed event {} status to {}", event.name, event.status),
        &admin.ip_address,
    );

    let view = EventView::resolve(event, &store);
    Ok(Json(DataResponse { data: view }))
}
