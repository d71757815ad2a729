//! Wire types of the marketplace REST API and their console conversions.
//!
//! Field names mirror the upstream camelCase JSON. Conversions into
//! `turfdesk_core` view records are plain `From` impls so the console can
//! map whole lists with `.into_iter().map(Into::into)`.

use serde::{Deserialize, Serialize};

use turfdesk_core::bookings::{self, Booking};
use turfdesk_core::owners::Owner;
use turfdesk_core::requests::{OwnerRequest, RequestStats};
use turfdesk_core::status::{OwnerStatus, RequestStatus, TurfStatus, UserStatus};
use turfdesk_core::turfs::{self, SportPrice, Turf};
use turfdesk_core::types::{parse_upstream_date, parse_upstream_timestamp};
use turfdesk_core::users::{console_user_id, User};

/// Console id prefix for upstream turfs (`turf_12`).
pub const TURF_ID_PREFIX: &str = "turf_";
/// Console id prefix for upstream owners (`owner_7`).
pub const OWNER_ID_PREFIX: &str = "owner_";

/// Recover the upstream numeric id from a prefixed console id.
pub fn upstream_id(console_id: &str, prefix: &str) -> Option<i64> {
    console_id.strip_prefix(prefix)?.parse().ok()
}

/// Upstream turf id carried by a create-turf response body.
///
/// The id sits under `id` or `turfId`, either at the top level or inside a
/// `data` envelope, as a number or a numeric string (`"77"`, `"turf_77"`).
pub fn created_turf_id(response: &serde_json::Value) -> Option<i64> {
    let body = response
        .get("data")
        .filter(|d| d.is_object())
        .unwrap_or(response);
    ["id", "turfId"]
        .iter()
        .filter_map(|key| body.get(key))
        .find_map(|value| match value {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => {
                s.strip_prefix(TURF_ID_PREFIX).unwrap_or(s.as_str()).parse().ok()
            }
            _ => None,
        })
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// Standard `{code, status, message, data}` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub code: i32,
    pub status: bool,
    #[serde(default)]
    pub message: String,
    /// Absent or null when `status` is false.
    pub data: Option<T>,
}

/// `{success, message, data}` envelope used by the sports and amenities
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

// ---------------------------------------------------------------------------
// Turfs and reference data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSport {
    pub sport_id: i64,
    pub sport_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAmenity {
    pub amenity_id: i64,
    pub amenity_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTurf {
    pub turf_id: i64,
    pub turf_name: String,
    pub owner_id: i64,
    #[serde(default)]
    pub owner_name: Option<String>,
    pub city: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub price_per_hour: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub sports: Vec<ApiSport>,
    #[serde(default)]
    pub amenities: Vec<ApiAmenity>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurfPage {
    pub turfs: Vec<ApiTurf>,
    #[serde(default)]
    pub total_turfs: i64,
}

impl From<ApiTurf> for Turf {
    fn from(t: ApiTurf) -> Self {
        let sports: Vec<String> = t.sports.into_iter().map(|s| s.sport_name).collect();
        let pricing = vec![SportPrice {
            sport: sports
                .first()
                .cloned()
                .unwrap_or_else(|| turfs::DEFAULT_SPORT.to_string()),
            price_per_hour: t.price_per_hour,
        }];
        Turf {
            id: format!("{TURF_ID_PREFIX}{}", t.turf_id),
            owner_id: format!("{OWNER_ID_PREFIX}{}", t.owner_id),
            owner_name: t.owner_name.filter(|n| !n.trim().is_empty()),
            name: t.turf_name,
            city: t.city,
            address: String::new(),
            description: t.description.filter(|d| !d.trim().is_empty()),
            sports,
            images: t.images,
            status: if t.is_active {
                TurfStatus::Active
            } else {
                TurfStatus::Inactive
            },
            total_bookings_30d: 0,
            revenue_30d: 0,
            pending_settlements: 0,
            pricing,
            available_slots: Vec::new(),
            cancellation_policy: turfs::DEFAULT_CANCELLATION_POLICY.to_string(),
            bank_details: None,
        }
    }
}

/// Create-turf payload for `POST /admin/turfs?ownerId=`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTurfDto {
    pub turf_name: String,
    pub city: String,
    pub price_per_hour: f64,
    pub description: String,
    pub sport_ids: Vec<i64>,
    pub amenity_ids: Vec<i64>,
    pub is_active: bool,
}

impl From<&turfs::NewTurf> for CreateTurfDto {
    fn from(input: &turfs::NewTurf) -> Self {
        Self {
            turf_name: input.name.trim().to_string(),
            city: input.city.trim().to_string(),
            price_per_hour: input.effective_price(),
            description: input.description.clone(),
            sport_ids: input.sport_ids.clone(),
            amenity_ids: input.amenity_ids.clone(),
            is_active: true,
        }
    }
}

/// Sport option as the console shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sport {
    pub id: i64,
    pub name: String,
}

impl From<ApiSport> for Sport {
    fn from(s: ApiSport) -> Self {
        Self {
            id: s.sport_id,
            name: s.sport_name,
        }
    }
}

/// Amenity option as the console shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl From<ApiAmenity> for Amenity {
    fn from(a: ApiAmenity) -> Self {
        Self {
            id: a.amenity_id,
            name: a.amenity_name,
            icon: None,
        }
    }
}

/// Sports offered when the sports endpoint is unreachable.
pub fn fallback_sports() -> Vec<Sport> {
    [
        "Football",
        "Cricket",
        "Basketball",
        "Badminton",
        "Tennis",
        "Volleyball",
    ]
    .into_iter()
    .zip(1..)
    .map(|(name, id)| Sport {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Amenities offered when the amenities endpoint is unreachable.
pub fn fallback_amenities() -> Vec<Amenity> {
    [
        ("Parking", "parking"),
        ("Changing Room", "door"),
        ("Floodlights", "lightbulb"),
        ("Water Facility", "droplet"),
        ("First Aid", "heart"),
        ("Washroom", "toilet"),
        ("Cafeteria", "coffee"),
        ("Equipment Rental", "box"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, icon), id)| Amenity {
        id,
        name: name.to_string(),
        icon: Some(icon.to_string()),
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: i64,
    pub name: String,
    pub state_id: i64,
}

// ---------------------------------------------------------------------------
// Owners
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTurfOwner {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub total_turfs: i64,
    #[serde(default)]
    pub owned_turfs: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPage {
    pub turf_owners: Vec<ApiTurfOwner>,
    #[serde(default)]
    pub total_owners: i64,
}

impl From<ApiTurfOwner> for Owner {
    fn from(o: ApiTurfOwner) -> Self {
        Owner {
            id: format!("{OWNER_ID_PREFIX}{}", o.user_id),
            name: o.name,
            email: o.email,
            phone: o.mobile,
            status: if o.is_active {
                OwnerStatus::Active
            } else {
                OwnerStatus::Suspended
            },
            created_at: o.created_at.as_deref().and_then(parse_upstream_timestamp),
            city: o.city,
            total_turfs: o.total_turfs,
            total_bookings_30d: 0,
            revenue_30d: 0,
            pending_settlements: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Owner registration requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurfOwnerRequest {
    pub request_id: i64,
    pub owner_name: String,
    pub mobile: String,
    pub email: String,
    pub proposed_turf_name: String,
    pub city: String,
    pub status: RequestStatus,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl From<TurfOwnerRequest> for OwnerRequest {
    fn from(r: TurfOwnerRequest) -> Self {
        OwnerRequest {
            request_id: r.request_id,
            owner_name: r.owner_name,
            mobile: r.mobile,
            email: r.email,
            proposed_turf_name: r.proposed_turf_name,
            city: r.city,
            status: r.status,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequestPage {
    pub requests: Vec<TurfOwnerRequest>,
    #[serde(default)]
    pub total_requests: u32,
    #[serde(default)]
    pub pending_requests: u32,
    #[serde(default)]
    pub approved_requests: u32,
    #[serde(default)]
    pub rejected_requests: u32,
}

impl OwnerRequestPage {
    pub fn stats(&self) -> RequestStats {
        RequestStats {
            total_requests: self.total_requests,
            pending_requests: self.pending_requests,
            approved_requests: self.approved_requests,
            rejected_requests: self.rejected_requests,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRequestBody {
    pub admin_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRequestBody {
    pub rejection_reason: String,
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBooking {
    pub booking_id: i64,
    pub booking_number: String,
    pub user_id: i64,
    pub user_name: String,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_mobile: Option<String>,
    pub turf_id: i64,
    pub turf_name: String,
    #[serde(default)]
    pub turf_city: Option<String>,
    #[serde(default)]
    pub sport_id: Option<i64>,
    pub sport_name: String,
    pub booking_date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub duration_hours: f64,
    #[serde(default)]
    pub number_of_players: Option<i64>,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub discount_amount: f64,
    #[serde(default)]
    pub tax_amount: f64,
    pub total_amount: f64,
    pub payment_status: String,
    pub booking_status: String,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPage {
    pub bookings: Vec<ApiBooking>,
    #[serde(default)]
    pub total_bookings: i64,
}

impl From<ApiBooking> for Booking {
    fn from(b: ApiBooking) -> Self {
        let date = parse_upstream_date(&b.booking_date)
            .or_else(|| b.created_at.as_deref().and_then(parse_upstream_date))
            .unwrap_or_default();
        Booking {
            id: b.booking_number,
            user_id: console_user_id(b.user_id),
            user_name: b.user_name,
            user_phone: b.user_mobile,
            turf_id: format!("{TURF_ID_PREFIX}{}", b.turf_id),
            turf_name: b.turf_name,
            sport: b.sport_name,
            date,
            time: bookings::format_slot(&b.start_time, &b.end_time),
            duration_hours: Some(bookings::round_duration(b.duration_hours)),
            amount: b.total_amount,
            status: bookings::map_upstream_status(&b.booking_status),
            payment_method: bookings::payment_method_label(&b.payment_status).to_string(),
            transaction_id: bookings::transaction_id(b.booking_id),
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub playing_role: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub game_preferences: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub profile_photo_file_name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub wallet_balance: Option<f64>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub users: Vec<ApiUser>,
    #[serde(default)]
    pub total_users: i64,
}

impl From<ApiUser> for User {
    fn from(u: ApiUser) -> Self {
        User {
            id: console_user_id(u.user_id),
            name: u.name,
            email: u.email,
            phone: u.mobile,
            status: if u.is_active {
                UserStatus::Active
            } else {
                UserStatus::Blocked
            },
            joined_at: u.created_at.as_deref().and_then(parse_upstream_timestamp),
            total_bookings: 0,
            total_spent: None,
            city: u.city.filter(|c| !c.is_empty()),
            wallet_balance: u.wallet_balance,
            user_type: u.user_type,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusBody {
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetric {
    pub value: f64,
    #[serde(default)]
    pub percentage_change: f64,
    #[serde(default)]
    pub comparison_period: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentBooking {
    pub booking_id: i64,
    pub customer_name: String,
    #[serde(default)]
    pub customer_initial: String,
    pub turf_name: String,
    pub amount: f64,
    #[serde(default)]
    pub time_slot: String,
    #[serde(default)]
    pub booking_date: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPerformingTurf {
    pub turf_id: i64,
    pub turf_name: String,
    pub total_bookings: i64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub todays_bookings: DashboardMetric,
    pub revenue_today: DashboardMetric,
    pub active_turfs: DashboardMetric,
    pub pending_settlements: DashboardMetric,
    #[serde(default)]
    pub recent_bookings: Vec<RecentBooking>,
    #[serde(default)]
    pub top_performing_turfs: Vec<TopPerformingTurf>,
}

// ---------------------------------------------------------------------------
// Featured turfs
// ---------------------------------------------------------------------------

/// Create/update payload for a featured-turf priority record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedTurfPriority {
    pub turf_id: i64,
    pub priority: u32,
    pub badge: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub is_active: bool,
}

impl FeaturedTurfPriority {
    /// Payload for a featured record whose turf came from the upstream API.
    ///
    /// Returns `None` for seeded and console-created (`TURF###`) turfs, which
    /// upstream cannot know.
    pub fn for_record(f: &turfdesk_core::featured::FeaturedTurf) -> Option<Self> {
        Some(Self {
            turf_id: upstream_id(&f.turf_id, TURF_ID_PREFIX)?,
            priority: f.position,
            badge: f.badge.clone(),
            start_date: f.start_date,
            end_date: f.end_date,
            is_active: f.active,
        })
    }
}
