//! Handlers for the bookings page.

use axum::extract::{Path, Query, State};
use axum::Json;
use turfdesk_core::audit::actions;
use turfdesk_core::bookings::{self, Booking, BookingSummary};
use turfdesk_core::search::filter_records;
use turfdesk_core::status::{self, BookingStatus};

use crate::error::AppResult;
use crate::handlers::{fallback_warning, StatusBody};
use crate::middleware::auth::AuthAdmin;
use crate::query::ListParams;
use crate::response::{DataResponse, ListView, Source};
use crate::state::AppState;

/// GET /api/v1/bookings?search=&status=
///
/// The summary covers the whole working set, not just the filtered rows.
pub async fn list_bookings(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<ListView<Booking, BookingSummary>>>> {
    let fetched = state.upstream.bookings().await;

    let mut store = state.store.write().await;
    let (source, warning) = match fetched {
        Ok(bookings) => {
            store.bookings = bookings.into_iter().map(Into::into).collect();
            (Source::Upstream, None)
        }
        Err(err) => (Source::Local, Some(fallback_warning("bookings", &err))),
    };

    let items = filter_records(&store.bookings, params.search(), params.status());
    let summary = bookings::summarize(&store.bookings);
    Ok(Json(DataResponse {
        data: ListView::new(items, source, warning).with_summary(summary),
    }))
}

/// PUT /api/v1/bookings/{id}/status
pub async fn update_booking_status(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<String>,
    Json(input): Json<StatusBody<BookingStatus>>,
) -> AppResult<Json<DataResponse<Booking>>> {
    let mut store = state.store.write().await;
    let booking = status::transition(&mut store.bookings, &id, input.status)?.clone();
    store.record(
        actions::UPDATE_BOOKING_STATUS,
        format!("Changed booking {} status to {}", booking.id, booking.status),
        &admin.ip_address,
    );

    Ok(Json(DataResponse { data: booking }))
}
