//! Turf events (tournaments, leagues) listed on the events page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::{EventStatus, HasStatus, Identified};
use crate::types::Rupees;

pub const DEFAULT_REGISTRATION_CAP: u32 = 50;
pub const DEFAULT_REGISTRATION_FEE: Rupees = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub turf_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub description: String,
    pub registration_cap: u32,
    pub registration_fee: Rupees,
    pub registered: u32,
    pub status: EventStatus,
}

impl Identified for Event {
    const ENTITY: &'static str = "Event";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl HasStatus for Event {
    type Status = EventStatus;

    fn set_status(&mut self, status: EventStatus) {
        self.status = status;
    }
}

impl Event {
    /// Share of the registration cap already taken, in whole percent.
    pub fn fill_percent(&self) -> u32 {
        if self.registration_cap == 0 {
            return 0;
        }
        let pct = u64::from(self.registered) * 100 / u64::from(self.registration_cap);
        pct.min(100) as u32
    }

    /// Seats still open.
    pub fn seats_left(&self) -> u32 {
        self.registration_cap.saturating_sub(self.registered)
    }
}

fn default_cap() -> u32 {
    DEFAULT_REGISTRATION_CAP
}

fn default_fee() -> Rupees {
    DEFAULT_REGISTRATION_FEE
}

/// Add-event form. Name, turf, date and time are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEvent {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    #[validate(length(min = 1, message = "required"))]
    pub turf_id: String,
    pub date: NaiveDate,
    #[validate(length(min = 1, message = "required"))]
    pub time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_cap")]
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub registration_cap: u32,
    #[serde(default = "default_fee")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub registration_fee: Rupees,
}

impl Event {
    /// Build a new upcoming event with no registrations.
    pub fn from_new(input: NewEvent, id: String) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            turf_id: input.turf_id,
            date: input.date,
            time: input.time,
            description: input.description,
            registration_cap: input.registration_cap,
            registration_fee: input.registration_fee,
            registered: 0,
            status: EventStatus::Upcoming,
        }
    }
}

/// Console id for a new event created at `millis` since the epoch.
pub fn event_id(millis: i64) -> String {
    format!("evt_{millis}")
}
