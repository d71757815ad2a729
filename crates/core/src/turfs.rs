//! Turf listings and the add-turf form.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::search::Searchable;
use crate::status::{HasStatus, Identified, TurfStatus};
use crate::types::Rupees;

/// Sport used when the add-turf form selects none.
pub const DEFAULT_SPORT: &str = "Football";

/// Hourly price used when the add-turf form gives none.
pub const DEFAULT_PRICE_PER_HOUR: f64 = 1500.0;

/// Cancellation policy applied to newly added turfs.
pub const DEFAULT_CANCELLATION_POLICY: &str = "Free cancellation up to 24 hours before booking";

/// Slots offered by newly added turfs.
pub const DEFAULT_SLOTS: &[&str] = &[
    "06:00-08:00",
    "08:00-10:00",
    "10:00-12:00",
    "18:00-20:00",
    "20:00-22:00",
];

/// Image shown for turfs without photos.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportPrice {
    pub sport: String,
    pub price_per_hour: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_name: String,
    pub account_number: String,
    pub ifsc: String,
}

/// A turf as listed on the turfs page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turf {
    pub id: String,
    pub owner_id: String,
    /// Owner name as reported upstream; resolved from the owner list otherwise.
    pub owner_name: Option<String>,
    pub name: String,
    pub city: String,
    pub address: String,
    pub description: Option<String>,
    pub sports: Vec<String>,
    pub images: Vec<String>,
    pub status: TurfStatus,
    pub total_bookings_30d: i64,
    pub revenue_30d: Rupees,
    pub pending_settlements: Rupees,
    pub pricing: Vec<SportPrice>,
    pub available_slots: Vec<String>,
    pub cancellation_policy: String,
    pub bank_details: Option<BankDetails>,
}

impl Identified for Turf {
    const ENTITY: &'static str = "Turf";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl HasStatus for Turf {
    type Status = TurfStatus;

    fn set_status(&mut self, status: TurfStatus) {
        self.status = status;
    }
}

impl Searchable for Turf {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.city.as_str(), self.id.as_str()];
        if let Some(owner) = &self.owner_name {
            fields.push(owner.as_str());
        }
        fields
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

/// Add-turf form. Name, city and owner are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTurf {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    #[validate(length(min = 1, message = "required"))]
    pub city: String,
    #[validate(length(min = 1, message = "required"))]
    pub owner_id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sports: Vec<String>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price_per_hour: Option<f64>,
    #[serde(default)]
    pub sport_ids: Vec<i64>,
    #[serde(default)]
    pub amenity_ids: Vec<i64>,
}

impl NewTurf {
    pub fn effective_price(&self) -> f64 {
        self.price_per_hour.unwrap_or(DEFAULT_PRICE_PER_HOUR)
    }
}

impl Turf {
    /// Build a freshly added turf: pending, with the default slots, policy and
    /// pricing for its first sport.
    pub fn from_new(input: NewTurf, id: String, owner_name: Option<String>) -> Self {
        let price = input.effective_price();
        let sports = if input.sports.is_empty() {
            vec![DEFAULT_SPORT.to_string()]
        } else {
            input.sports
        };
        let pricing = vec![SportPrice {
            sport: sports[0].clone(),
            price_per_hour: price,
        }];
        let description = Some(input.description).filter(|d| !d.trim().is_empty());

        Self {
            id,
            owner_id: input.owner_id,
            owner_name,
            name: input.name.trim().to_string(),
            city: input.city.trim().to_string(),
            address: input.address,
            description,
            sports,
            images: vec![PLACEHOLDER_IMAGE.to_string()],
            status: TurfStatus::Pending,
            total_bookings_30d: 0,
            revenue_30d: 0,
            pending_settlements: 0,
            pricing,
            available_slots: DEFAULT_SLOTS.iter().map(|s| s.to_string()).collect(),
            cancellation_policy: DEFAULT_CANCELLATION_POLICY.to_string(),
            bank_details: None,
        }
    }
}

/// Prefix for console-assigned turf ids (`TURF001`, `TURF002`, ...).
pub const LOCAL_TURF_ID_PREFIX: &str = "TURF";

/// Next console turf id, one past the highest `TURF<n>` already in use.
///
/// Upstream ids (`turf_<n>`) never match this prefix.
pub fn next_local_turf_id(turfs: &[Turf]) -> String {
    let highest = turfs
        .iter()
        .filter_map(|t| t.id.strip_prefix(LOCAL_TURF_ID_PREFIX)?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{LOCAL_TURF_ID_PREFIX}{:03}", highest + 1)
}

/// Resolve the display owner name of a turf, falling back to `"Unknown"`.
pub fn owner_display_name<'a>(turf: &'a Turf, owners: &'a [crate::owners::Owner]) -> &'a str {
    if let Some(name) = turf.owner_name.as_deref() {
        return name;
    }
    owners
        .iter()
        .find(|o| o.id == turf.owner_id)
        .map(|o| o.name.as_str())
        .unwrap_or("Unknown")
}
