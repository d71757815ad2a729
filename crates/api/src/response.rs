//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })`.

use axum::body::Body;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Where a page's records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Fresh from the marketplace API.
    Upstream,
    /// The console's own working set (upstream unreachable or not consulted).
    Local,
}

/// A list page: the filtered records plus where they came from.
///
/// `warning` carries the upstream error text when the page fell back to the
/// local working set.
#[derive(Debug, Serialize)]
pub struct ListView<T: Serialize, S: Serialize = ()> {
    pub items: Vec<T>,
    pub total: usize,
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<S>,
}

impl<T: Serialize, S: Serialize> ListView<T, S> {
    pub fn new(items: Vec<T>, source: Source, warning: Option<String>) -> Self {
        Self {
            total: items.len(),
            items,
            source,
            warning,
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: S) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// A CSV download with the given file name.
pub fn csv_attachment(filename: &str, body: String) -> Response {
    (
        [
            (CONTENT_TYPE, "text/csv".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Body::from(body),
    )
        .into_response()
}
