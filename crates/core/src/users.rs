//! End-user records and status changes.

use serde::{Deserialize, Serialize};

use crate::search::Searchable;
use crate::status::{HasStatus, Identified, UserStatus};
use crate::types::Timestamp;

/// Prefix the console puts in front of upstream numeric user ids.
pub const UPSTREAM_USER_PREFIX: &str = "user_";

/// An end user as listed on the users page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: UserStatus,
    pub joined_at: Option<Timestamp>,
    pub total_bookings: i64,
    pub total_spent: Option<f64>,
    pub city: Option<String>,
    pub wallet_balance: Option<f64>,
    pub user_type: Option<String>,
}

impl Identified for User {
    const ENTITY: &'static str = "User";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl HasStatus for User {
    type Status = UserStatus;

    fn set_status(&mut self, status: UserStatus) {
        self.status = status;
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.id.as_str()]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

/// Console id for an upstream user id.
pub fn console_user_id(upstream_id: i64) -> String {
    format!("{UPSTREAM_USER_PREFIX}{upstream_id}")
}

/// Recover the upstream numeric id from a console id (`user_123` → 123).
///
/// Returns `None` for ids that did not come from the upstream API.
pub fn upstream_user_id(console_id: &str) -> Option<i64> {
    console_id
        .strip_prefix(UPSTREAM_USER_PREFIX)
        .and_then(|n| n.parse().ok())
}

/// Status change requested from the users page.
#[derive(Debug, Clone, Deserialize)]
pub struct UserStatusChange {
    pub status: UserStatus,
    pub reason: Option<String>,
}

impl UserStatusChange {
    /// Whether the upstream `isActive` flag should be set.
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Audit detail line, with `: reason` appended when a reason is given.
    pub fn audit_details(&self, user_id: &str) -> String {
        let base = format!("Changed user {user_id} status to {}", self.status);
        match self.reason.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            Some(reason) => format!("{base}: {reason}"),
            None => base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_id_round_trip() {
        assert_eq!(console_user_id(17), "user_17");
        assert_eq!(upstream_user_id("user_17"), Some(17));
    }

    #[test]
    fn mock_ids_have_no_upstream_id() {
        assert_eq!(upstream_user_id("USR001"), None);
        assert_eq!(upstream_user_id("user_abc"), None);
    }

    #[test]
    fn audit_details_append_reason() {
        let change = UserStatusChange {
            status: UserStatus::Blocked,
            reason: Some("Repeated no-shows".into()),
        };
        assert_eq!(
            change.audit_details("USR001"),
            "Changed user USR001 status to blocked: Repeated no-shows"
        );
        assert!(!change.is_active());
    }

    #[test]
    fn blank_reason_is_ignored() {
        let change = UserStatusChange {
            status: UserStatus::Active,
            reason: Some("   ".into()),
        };
        assert_eq!(change.audit_details("user_3"), "Changed user user_3 status to active");
        assert!(change.is_active());
    }
}
