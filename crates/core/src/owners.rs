//! Turf owner records, the add-owner form, and generated owner credentials.

use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::search::Searchable;
use crate::status::{Channel, HasStatus, Identified, OwnerStatus};
use crate::types::{Rupees, Timestamp};

/// Prefix for console-assigned owner ids (`OWN001`, `OWN002`, ...).
pub const OWNER_ID_PREFIX: &str = "OWN";

/// A turf owner as listed on the owners page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: OwnerStatus,
    pub created_at: Option<Timestamp>,
    pub city: Option<String>,
    pub total_turfs: i64,
    pub total_bookings_30d: i64,
    pub revenue_30d: Rupees,
    pub pending_settlements: Rupees,
}

impl Identified for Owner {
    const ENTITY: &'static str = "Turf owner";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl HasStatus for Owner {
    type Status = OwnerStatus;

    fn set_status(&mut self, status: OwnerStatus) {
        self.status = status;
    }
}

impl Searchable for Owner {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.id.as_str(),
        ]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

/// Add-owner form. Every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewOwner {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "required"))]
    pub phone: String,
}

impl Owner {
    /// Build a freshly added owner: pending, with zeroed 30-day stats.
    pub fn from_new(input: NewOwner, id: String, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            status: OwnerStatus::Pending,
            created_at: Some(now),
            city: None,
            total_turfs: 0,
            total_bookings_30d: 0,
            revenue_30d: 0,
            pending_settlements: 0,
        }
    }
}

/// Next console owner id given the current number of owners.
///
/// ```
/// use turfdesk_core::owners::next_owner_id;
/// assert_eq!(next_owner_id(3), "OWN004");
/// ```
pub fn next_owner_id(existing: usize) -> String {
    format!("{OWNER_ID_PREFIX}{:03}", existing + 1)
}

// ---------------------------------------------------------------------------
// Generated credentials
// ---------------------------------------------------------------------------

/// Request to generate login credentials for a new owner.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CredentialRequest {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    /// Delivery channel; only `email` and `sms` are accepted.
    pub send_via: Option<Channel>,
}

/// Generated owner login.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerCredentials {
    pub user_id: String,
    pub password: String,
}

/// Generate a temporary password: eight lowercase alphanumerics followed by
/// four uppercase alphanumerics.
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut password: String = (0..8)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
        .collect();
    password.extend((0..4).map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_uppercase()));
    password
}

/// Audit detail line for a credential generation.
pub fn credentials_audit_details(name: &str, send_via: Option<Channel>) -> String {
    match send_via {
        Some(channel) => format!("Generated credentials for {name} and sent via {channel}"),
        None => format!("Generated credentials for {name}"),
    }
}
