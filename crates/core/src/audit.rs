//! Console audit trail: action names, display tone, and the newest-first log.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::export::csv_row;
use crate::search::matches_query;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Action name constants
// ---------------------------------------------------------------------------

/// Action names recorded by console operations.
pub mod actions {
    pub const LOGIN: &str = "Login";
    pub const LOGOUT: &str = "Logout";
    pub const ADD_TURF_OWNER: &str = "Add Turf Owner";
    pub const GENERATE_CREDENTIALS: &str = "Generate Credentials";
    pub const UPDATE_STATUS: &str = "Update Status";
    pub const DELETE_OWNER: &str = "Delete Owner";
    pub const APPROVE_REQUEST: &str = "Approve Request";
    pub const REJECT_REQUEST: &str = "Reject Request";
    pub const ADD_NEW_TURF: &str = "Add New Turf";
    pub const UPDATE_TURF_STATUS: &str = "Update Turf Status";
    pub const UPDATE_BOOKING_STATUS: &str = "Update Booking Status";
    pub const ADD_EVENT: &str = "Add Event";
    pub const DELETE_EVENT: &str = "Delete Event";
    pub const UPDATE_EVENT_STATUS: &str = "Update Event Status";
    pub const ADD_FEATURED_TURF: &str = "Add Featured Turf";
    pub const REMOVE_FEATURED_TURF: &str = "Remove Featured Turf";
    pub const TOGGLE_FEATURED_STATUS: &str = "Toggle Featured Status";
    pub const CHANGE_FEATURED_PRIORITY: &str = "Change Featured Priority";
    pub const UPDATE_USER_STATUS: &str = "Update User Status";
    pub const SEND_NOTIFICATION: &str = "Send Notification";
    pub const URGENT_SETTLEMENT: &str = "Urgent Settlement";
    pub const SETTLE_WEEK: &str = "Settle Week";
    pub const RECOMPUTE_SETTLEMENTS: &str = "Recompute Settlements";
}

/// Admin id stamped on every entry; the console has a single admin.
pub const DEFAULT_ADMIN_ID: &str = "ADMIN001";

/// Display tone of an audit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionTone {
    Destructive,
    Success,
    Warning,
    Primary,
}

impl ActionTone {
    /// Classify an action by keyword, checked in order: Delete/Block,
    /// Add/Generate, Update/Change.
    pub fn of(action: &str) -> Self {
        let has = |words: &[&str]| words.iter().any(|w| action.contains(w));
        if has(&["Delete", "Block"]) {
            Self::Destructive
        } else if has(&["Add", "Generate"]) {
            Self::Success
        } else if has(&["Update", "Change"]) {
            Self::Warning
        } else {
            Self::Primary
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: String,
    pub admin_id: String,
    pub action: String,
    pub timestamp: Timestamp,
    pub details: String,
    pub ip_address: String,
}

impl AuditEntry {
    pub fn tone(&self) -> ActionTone {
        ActionTone::of(&self.action)
    }

    fn matches(&self, query: &str) -> bool {
        matches_query(query, &[self.action.as_str(), self.details.as_str(), self.id.as_str()])
    }
}

/// Newest-first log of console actions.
#[derive(Debug, Clone, Default)]
pub struct AuditTrail {
    entries: VecDeque<AuditEntry>,
    seq: u64,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an entry and return it.
    ///
    /// Ids are `LOG{millis}-{seq}` so two actions in the same millisecond
    /// still get distinct ids.
    pub fn record(
        &mut self,
        action: &str,
        details: impl Into<String>,
        ip_address: &str,
        now: Timestamp,
    ) -> &AuditEntry {
        self.seq += 1;
        let entry = AuditEntry {
            id: format!("LOG{}-{}", now.timestamp_millis(), self.seq),
            admin_id: DEFAULT_ADMIN_ID.to_string(),
            action: action.to_string(),
            timestamp: now,
            details: details.into(),
            ip_address: ip_address.to_string(),
        };
        self.entries.push_front(entry);
        &self.entries[0]
    }

    pub fn entries(&self) -> &VecDeque<AuditEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose action, details or id contain `query`, ignoring case.
    pub fn search(&self, query: Option<&str>) -> Vec<AuditEntry> {
        let query = query.unwrap_or("");
        self.entries
            .iter()
            .filter(|e| e.matches(query))
            .cloned()
            .collect()
    }

    /// Number of entries recorded on `day` (UTC).
    pub fn count_on(&self, day: chrono::NaiveDate) -> usize {
        self.entries
            .iter()
            .filter(|e| e.timestamp.date_naive() == day)
            .count()
    }
}

/// Render entries as CSV with a header row.
pub fn to_csv<'a>(entries: impl IntoIterator<Item = &'a AuditEntry>) -> String {
    let mut out = csv_row(&["id", "timestamp", "admin_id", "action", "details", "ip_address"]);
    for e in entries {
        let timestamp = e.timestamp.to_rfc3339();
        out.push_str(&csv_row(&[
            e.id.as_str(),
            timestamp.as_str(),
            e.admin_id.as_str(),
            e.action.as_str(),
            e.details.as_str(),
            e.ip_address.as_str(),
        ]));
    }
    out
}
