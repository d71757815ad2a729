#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use turfdesk_api::auth::jwt::{JwtConfig, DEFAULT_EXPIRY_MINS};
use turfdesk_api::config::ServerConfig;
use turfdesk_api::router::build_app_router;
use turfdesk_api::state::AppState;
use turfdesk_api::store::ConsoleStore;
use turfdesk_client::dto::{
    Amenity, ApiBooking, ApiTurf, ApiTurfOwner, ApiUser, City, CreateTurfDto, DashboardData,
    FeaturedTurfPriority, OwnerRequestPage, Sport, State, TurfOwnerRequest,
};
use turfdesk_client::{MarketplaceApi, MarketplaceError};
use turfdesk_core::auth::{AdminCredentials, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};
use turfdesk_core::status::RequestStatus;

/// Build a test `ServerConfig` with safe defaults.
///
/// Simulated notifications never fail so sends are deterministic.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        upstream_base_url: "http://marketplace.test/api".to_string(),
        upstream_auth_token: None,
        admin: AdminCredentials::default(),
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            expiry_mins: DEFAULT_EXPIRY_MINS,
        },
        seed_mock_data: true,
        notification_failure_rate: 0.0,
    }
}

// ---------------------------------------------------------------------------
// In-memory marketplace
// ---------------------------------------------------------------------------

/// Stand-in for the marketplace API.
///
/// Every read fails with a 503 unless canned data was provided; writes
/// succeed only when `accept_writes` is set. Every call is logged.
#[derive(Default)]
pub struct FakeMarketplace {
    pub requests: Option<OwnerRequestPage>,
    pub states: Option<Vec<State>>,
    pub owners: Option<Vec<ApiTurfOwner>>,
    pub turfs: Option<Vec<ApiTurf>>,
    pub bookings: Option<Vec<ApiBooking>>,
    pub users: Option<Vec<ApiUser>>,
    /// Turf id returned in the create-turf response body.
    pub created_turf_id: Option<i64>,
    pub accept_writes: bool,
    /// Once set, canned reads fail like every other call.
    pub unreachable: AtomicBool,
    pub calls: Mutex<Vec<String>>,
    pub token: Mutex<Option<String>>,
}

impl FakeMarketplace {
    /// A marketplace that is unreachable for every call.
    pub fn offline() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A marketplace with one pending registration request (#11) and one
    /// already approved (#12), accepting decisions.
    pub fn with_requests() -> Arc<Self> {
        Arc::new(Self {
            requests: Some(OwnerRequestPage {
                requests: vec![
                    request(11, "Karan Mehta", RequestStatus::Pending),
                    request(12, "Neha Kapoor", RequestStatus::Approved),
                ],
                total_requests: 2,
                pending_requests: 1,
                approved_requests: 1,
                rejected_requests: 0,
            }),
            accept_writes: true,
            ..Self::default()
        })
    }

    /// Marketplace listings: owner #5 with turfs #3 and #4, booking
    /// BK-2025-0042 on turf #3, users #7 (active) and #8 (inactive). Writes
    /// are accepted and new turfs come back as #77.
    pub fn listings() -> Self {
        Self {
            owners: Some(vec![api(json!({
                "userId": 5,
                "name": "Sunil Rao",
                "email": "sunil@example.com",
                "mobile": "9876500005",
                "city": "Chennai",
                "isActive": true,
                "totalTurfs": 2
            }))]),
            turfs: Some(vec![
                api_turf(3, "Marina Kick Off", true),
                api_turf(4, "Adyar Box Cricket", true),
            ]),
            bookings: Some(vec![api(json!({
                "bookingId": 42,
                "bookingNumber": "BK-2025-0042",
                "userId": 7,
                "userName": "Vikram Singh",
                "turfId": 3,
                "turfName": "Marina Kick Off",
                "sportName": "Football",
                "bookingDate": "2025-10-20T00:00:00",
                "startTime": "18:00:00",
                "endTime": "19:00:00",
                "durationHours": 1.0,
                "totalAmount": 1200.0,
                "paymentStatus": "Paid",
                "bookingStatus": "Confirmed",
                "createdAt": "2025-10-19T10:00:00"
            }))]),
            users: Some(vec![
                api_user(7, "Vikram Singh", true),
                api_user(8, "Meera Iyer", false),
            ]),
            created_turf_id: Some(77),
            accept_writes: true,
            ..Self::default()
        }
    }

    pub fn with_listings() -> Arc<Self> {
        Arc::new(Self::listings())
    }

    /// Make every later call fail, canned reads included.
    pub fn go_offline(&self) {
        self.unreachable.store(true, Ordering::SeqCst);
    }

    /// A marketplace that accepts every write but serves no reads.
    pub fn accepting_writes() -> Arc<Self> {
        Arc::new(Self {
            accept_writes: true,
            ..Self::default()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn log(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn canned<T: Clone>(&self, data: &Option<T>) -> Result<T, MarketplaceError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        data.clone().ok_or_else(unavailable)
    }

    fn write_result(&self) -> Result<(), MarketplaceError> {
        if self.accept_writes && !self.unreachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(unavailable())
        }
    }
}

fn unavailable() -> MarketplaceError {
    MarketplaceError::Api {
        status: 503,
        body: "Service Unavailable".to_string(),
    }
}

fn api<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}

fn api_turf(id: i64, name: &str, is_active: bool) -> ApiTurf {
    api(json!({
        "turfId": id,
        "turfName": name,
        "ownerId": 5,
        "ownerName": "Sunil Rao",
        "city": "Chennai",
        "pricePerHour": 1200.0,
        "isActive": is_active,
        "sports": [{ "sportId": 1, "sportName": "Football" }]
    }))
}

fn api_user(id: i64, name: &str, is_active: bool) -> ApiUser {
    api(json!({
        "userId": id,
        "name": name,
        "email": format!("user{id}@example.com"),
        "mobile": "9876500007",
        "city": "Chennai",
        "isActive": is_active,
        "createdAt": "2025-09-01T08:00:00"
    }))
}

fn request(id: i64, name: &str, status: RequestStatus) -> TurfOwnerRequest {
    TurfOwnerRequest {
        request_id: id,
        owner_name: name.to_string(),
        mobile: "9876501234".to_string(),
        email: format!("{}@example.com", name.split(' ').next().unwrap_or(name).to_lowercase()),
        proposed_turf_name: "Green Meadows".to_string(),
        city: "Pune".to_string(),
        status,
        created_at: "2025-10-18T09:30:00".to_string(),
        updated_at: None,
    }
}

#[async_trait]
impl MarketplaceApi for FakeMarketplace {
    async fn set_auth_token(&self, token: Option<String>) {
        self.log("set_auth_token");
        *self.token.lock().unwrap() = token;
    }

    async fn dashboard(&self) -> Result<DashboardData, MarketplaceError> {
        self.log("dashboard");
        Err(unavailable())
    }

    async fn turf_owners(&self) -> Result<Vec<ApiTurfOwner>, MarketplaceError> {
        self.log("turf_owners");
        self.canned(&self.owners)
    }

    async fn owner_requests(&self) -> Result<OwnerRequestPage, MarketplaceError> {
        self.log("owner_requests");
        self.canned(&self.requests)
    }

    async fn approve_owner_request(&self, request_id: i64, _admin_id: i64) -> Result<(), MarketplaceError> {
        self.log(format!("approve_owner_request:{request_id}"));
        self.write_result()
    }

    async fn reject_owner_request(&self, request_id: i64, reason: &str) -> Result<(), MarketplaceError> {
        self.log(format!("reject_owner_request:{request_id}:{reason}"));
        self.write_result()
    }

    async fn turfs(&self) -> Result<Vec<ApiTurf>, MarketplaceError> {
        self.log("turfs");
        self.canned(&self.turfs)
    }

    async fn create_turf(
        &self,
        owner_id: &str,
        _turf: &CreateTurfDto,
    ) -> Result<serde_json::Value, MarketplaceError> {
        self.log(format!("create_turf:{owner_id}"));
        self.write_result()?;
        Ok(match self.created_turf_id {
            Some(id) => json!({ "id": id.to_string(), "ownerId": owner_id, "isActive": false }),
            None => serde_json::Value::Null,
        })
    }

    async fn sports(&self) -> Result<Vec<Sport>, MarketplaceError> {
        self.log("sports");
        Err(unavailable())
    }

    async fn amenities(&self) -> Result<Vec<Amenity>, MarketplaceError> {
        self.log("amenities");
        Err(unavailable())
    }

    async fn states(&self) -> Result<Vec<State>, MarketplaceError> {
        self.log("states");
        self.canned(&self.states)
    }

    async fn cities(&self, state_id: i64) -> Result<Vec<City>, MarketplaceError> {
        self.log(format!("cities:{state_id}"));
        Err(unavailable())
    }

    async fn bookings(&self) -> Result<Vec<ApiBooking>, MarketplaceError> {
        self.log("bookings");
        self.canned(&self.bookings)
    }

    async fn users(&self) -> Result<Vec<ApiUser>, MarketplaceError> {
        self.log("users");
        self.canned(&self.users)
    }

    async fn update_user_status(&self, user_id: i64, is_active: bool) -> Result<(), MarketplaceError> {
        self.log(format!("update_user_status:{user_id}:{is_active}"));
        self.write_result()
    }

    async fn create_featured(&self, record: &FeaturedTurfPriority) -> Result<(), MarketplaceError> {
        self.log(format!("create_featured:{}:{}", record.turf_id, record.priority));
        self.write_result()
    }

    async fn update_featured(&self, record: &FeaturedTurfPriority) -> Result<(), MarketplaceError> {
        self.log(format!("update_featured:{}:{}", record.turf_id, record.priority));
        self.write_result()
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build the full application router over the seeded demo data, using the
/// same middleware stack as production.
pub fn build_test_app(upstream: Arc<FakeMarketplace>) -> Router {
    let state = AppState::new(
        test_config(),
        ConsoleStore::seeded(Utc::now().date_naive()),
        upstream,
    );
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header("authorization", format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, None).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::GET, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, None, body).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send_json(app, Method::POST, uri, Some(token), body).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send_json(app, Method::PUT, uri, Some(token), body).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, builder(Method::DELETE, uri, Some(token)).body(Body::empty()).unwrap()).await
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = builder(method, uri, token)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Log in with the default admin credential and return the session token.
pub async fn login_token(app: Router) -> String {
    let body = serde_json::json!({
        "email": DEFAULT_ADMIN_EMAIL,
        "password": DEFAULT_ADMIN_PASSWORD,
    });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}
