//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Search text plus status filter (`?search=&status=`), used by every list
/// page. `status=all` disables the status filter.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl ListParams {
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

/// Export format selector (`?format=`).
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}
