pub mod analytics;
pub mod audit;
pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod events;
pub mod featured;
pub mod health;
pub mod notifications;
pub mod owners;
pub mod reference;
pub mod requests;
pub mod settlements;
pub mod turfs;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Everything except `/auth/login` requires a console session token
/// (enforced by handler extractors).
///
/// ```text
/// /auth/login, /auth/logout                       session
/// /dashboard                                      KPIs and panels
/// /owners, /owners/credentials, /owners/{id}...   turf owners
/// /owner-requests, /owner-requests/{id}/...       registration requests
/// /turfs, /turfs/{id}/status                      turfs
/// /reference/...                                  sports, amenities, locations
/// /bookings, /bookings/{id}/status                bookings
/// /events, /events/{id}...                        events
/// /featured, /featured/{turf_id}/...              featured turfs
/// /users, /users/{id}/status                      end users
/// /notifications/...                              templates, logs, send
/// /settlements, /settlements/{turf_id}/...        weekly settlements
/// /analytics/turfs, /analytics/turfs/export       7-day analytics
/// /audit-logs, /audit-logs/export                 audit trail
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dashboard", dashboard::router())
        .nest("/owners", owners::router())
        .nest("/owner-requests", requests::router())
        .nest("/turfs", turfs::router())
        .nest("/reference", reference::router())
        .nest("/bookings", bookings::router())
        .nest("/events", events::router())
        .nest("/featured", featured::router())
        .nest("/users", users::router())
        .nest("/notifications", notifications::router())
        .nest("/settlements", settlements::router())
        .nest("/analytics", analytics::router())
        .nest("/audit-logs", audit::router())
}
