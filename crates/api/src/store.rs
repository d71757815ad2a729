//! In-memory working sets behind the console pages.
//!
//! Each page keeps its own list (owners, turfs, bookings, ...) that upstream
//! fetches replace and console actions mutate in place. Nothing outlives the
//! process.

use chrono::{NaiveDate, Utc};
use turfdesk_core::audit::{AuditEntry, AuditTrail};
use turfdesk_core::bookings::Booking;
use turfdesk_core::events::Event;
use turfdesk_core::featured::FeaturedTurf;
use turfdesk_core::mock;
use turfdesk_core::notifications::NotificationLog;
use turfdesk_core::owners::Owner;
use turfdesk_core::requests::{OwnerRequest, RequestStats};
use turfdesk_core::settlement::{week_start_of, WeeklySettlement};
use turfdesk_core::turfs::Turf;
use turfdesk_core::users::User;

#[derive(Debug, Clone, Default)]
pub struct ConsoleStore {
    pub owners: Vec<Owner>,
    pub turfs: Vec<Turf>,
    pub bookings: Vec<Booking>,
    pub users: Vec<User>,
    pub events: Vec<Event>,
    pub featured: Vec<FeaturedTurf>,
    pub requests: Vec<OwnerRequest>,
    pub request_stats: RequestStats,
    pub notifications: Vec<NotificationLog>,
    pub settlements: Vec<WeeklySettlement>,
    pub audit: AuditTrail,
}

impl ConsoleStore {
    /// A store with every working set empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store seeded with the bundled demo dataset, with settlements for
    /// the week containing `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            owners: mock::owners(),
            turfs: mock::turfs(),
            bookings: mock::bookings(),
            users: mock::users(),
            events: mock::events(),
            featured: mock::featured(),
            settlements: mock::settlements(week_start_of(today)),
            ..Self::default()
        }
    }

    /// Append an audit entry stamped now and return a copy of it.
    pub fn record(&mut self, action: &str, details: impl Into<String>, ip_address: &str) -> AuditEntry {
        let entry = self.audit.record(action, details, ip_address, Utc::now()).clone();
        tracing::info!(
            audit_id = %entry.id,
            action = %entry.action,
            details = %entry.details,
            "Console action recorded"
        );
        entry
    }

    /// Display name of a turf, if known.
    pub fn turf_name(&self, turf_id: &str) -> Option<&str> {
        self.turfs
            .iter()
            .find(|t| t.id == turf_id)
            .map(|t| t.name.as_str())
    }
}
