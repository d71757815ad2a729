//! HTTP handlers, one module per console page.

pub mod analytics;
pub mod audit;
pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod events;
pub mod featured;
pub mod notifications;
pub mod owners;
pub mod reference;
pub mod requests;
pub mod settlements;
pub mod turfs;
pub mod users;

use turfdesk_client::MarketplaceError;

/// Log a failed upstream fetch and return the warning shown on the page
/// that fell back to its local working set.
pub(crate) fn fallback_warning(page: &'static str, err: &MarketplaceError) -> String {
    tracing::warn!(page, error = %err, "Upstream fetch failed, serving local data");
    format!("Could not reach the marketplace API, showing cached data: {err}")
}

/// Body of every `PUT /{resource}/{id}/status` action.
#[derive(Debug, serde::Deserialize)]
pub struct StatusBody<S> {
    pub status: S,
}
