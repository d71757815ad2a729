//! REST client for the marketplace admin API.
//!
//! One method per upstream endpoint, each returning the unwrapped `data`
//! payload. The console talks to the client through [`MarketplaceApi`] so
//! tests can substitute an in-memory fake.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::dto::{
    Amenity, ApiAmenity, ApiBooking, ApiSport, ApiTurf, ApiTurfOwner, ApiUser,
    ApproveRequestBody, BookingPage, City, CreateTurfDto, DashboardData, Envelope,
    FeaturedTurfPriority, OwnerPage, OwnerRequestPage, RejectRequestBody, Sport, State,
    SuccessEnvelope, TurfPage, UserPage, UserStatusBody,
};
use crate::error::MarketplaceError;

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://spoortx.onrender.com/api";

/// Operations the console needs from the marketplace API.
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// Replace (or clear) the bearer token sent with every request.
    async fn set_auth_token(&self, token: Option<String>);

    async fn dashboard(&self) -> Result<DashboardData, MarketplaceError>;

    async fn turf_owners(&self) -> Result<Vec<ApiTurfOwner>, MarketplaceError>;

    async fn owner_requests(&self) -> Result<OwnerRequestPage, MarketplaceError>;
    async fn approve_owner_request(&self, request_id: i64, admin_id: i64) -> Result<(), MarketplaceError>;
    async fn reject_owner_request(&self, request_id: i64, reason: &str) -> Result<(), MarketplaceError>;

    async fn turfs(&self) -> Result<Vec<ApiTurf>, MarketplaceError>;
    async fn create_turf(
        &self,
        owner_id: &str,
        turf: &CreateTurfDto,
    ) -> Result<serde_json::Value, MarketplaceError>;

    async fn sports(&self) -> Result<Vec<Sport>, MarketplaceError>;
    async fn amenities(&self) -> Result<Vec<Amenity>, MarketplaceError>;
    async fn states(&self) -> Result<Vec<State>, MarketplaceError>;
    async fn cities(&self, state_id: i64) -> Result<Vec<City>, MarketplaceError>;

    async fn bookings(&self) -> Result<Vec<ApiBooking>, MarketplaceError>;

    async fn users(&self) -> Result<Vec<ApiUser>, MarketplaceError>;
    async fn update_user_status(&self, user_id: i64, is_active: bool) -> Result<(), MarketplaceError>;

    async fn create_featured(&self, record: &FeaturedTurfPriority) -> Result<(), MarketplaceError>;
    async fn update_featured(&self, record: &FeaturedTurfPriority) -> Result<(), MarketplaceError>;
}

/// HTTP client for the marketplace API.
pub struct MarketplaceClient {
    client: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl MarketplaceClient {
    /// Create a client for `base_url` (e.g. `https://host/api`), with an
    /// optional initial bearer token.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, token)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: RwLock::new(token.filter(|t| !t.is_empty())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- request helpers ----

    async fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%method, %url, "Marketplace request");
        let builder = self.client.request(method, url);
        match self.token.read().await.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, MarketplaceError> {
        let response = self.request(reqwest::Method::GET, path).await.send().await?;
        parse_response(response).await
    }

    /// GET a `{code, status, message, data}` envelope and unwrap `data`.
    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, MarketplaceError> {
        let envelope: Envelope<T> = self.get(path).await?;
        unwrap_envelope(envelope)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, MarketplaceError> {
        let response = self.request(method, path).await.json(body).send().await?;
        ensure_success(response).await
    }
}

#[async_trait]
impl MarketplaceApi for MarketplaceClient {
    async fn set_auth_token(&self, token: Option<String>) {
        *self.token.write().await = token.filter(|t| !t.is_empty());
    }

    async fn dashboard(&self) -> Result<DashboardData, MarketplaceError> {
        self.get_data("/Admin/dashboard").await
    }

    async fn turf_owners(&self) -> Result<Vec<ApiTurfOwner>, MarketplaceError> {
        let page: OwnerPage = self.get_data("/Admin/turf-owners").await?;
        Ok(page.turf_owners)
    }

    async fn owner_requests(&self) -> Result<OwnerRequestPage, MarketplaceError> {
        self.get_data("/admin/turf-owner-requests").await
    }

    async fn approve_owner_request(&self, request_id: i64, admin_id: i64) -> Result<(), MarketplaceError> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/admin/turf-owner-requests/{request_id}/approve"),
            &ApproveRequestBody { admin_id },
        )
        .await?;
        Ok(())
    }

    async fn reject_owner_request(&self, request_id: i64, reason: &str) -> Result<(), MarketplaceError> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/admin/turf-owner-requests/{request_id}/reject"),
            &RejectRequestBody {
                rejection_reason: reason.to_string(),
            },
        )
        .await?;
        Ok(())
    }

    async fn turfs(&self) -> Result<Vec<ApiTurf>, MarketplaceError> {
        let page: TurfPage = self.get_data("/admin/turfs/all").await?;
        Ok(page.turfs)
    }

    async fn create_turf(
        &self,
        owner_id: &str,
        turf: &CreateTurfDto,
    ) -> Result<serde_json::Value, MarketplaceError> {
        let response = self
            .send_json(
                reqwest::Method::POST,
                &format!("/admin/turfs?ownerId={owner_id}"),
                turf,
            )
            .await?;
        // The create endpoint's body is informational; an empty body is fine.
        let text = response.text().await?;
        Ok(serde_json::from_str(&text).unwrap_or(serde_json::Value::Null))
    }

    async fn sports(&self) -> Result<Vec<Sport>, MarketplaceError> {
        let envelope: SuccessEnvelope<Vec<ApiSport>> = self.get("/Sports").await?;
        Ok(envelope.data.into_iter().map(Into::into).collect())
    }

    async fn amenities(&self) -> Result<Vec<Amenity>, MarketplaceError> {
        let envelope: SuccessEnvelope<Vec<ApiAmenity>> = self.get("/Amenities").await?;
        Ok(envelope.data.into_iter().map(Into::into).collect())
    }

    async fn states(&self) -> Result<Vec<State>, MarketplaceError> {
        self.get("/Location/states").await
    }

    async fn cities(&self, state_id: i64) -> Result<Vec<City>, MarketplaceError> {
        self.get(&format!("/Location/states/{state_id}/cities")).await
    }

    async fn bookings(&self) -> Result<Vec<ApiBooking>, MarketplaceError> {
        let page: BookingPage = self.get_data("/Admin/bookings/history").await?;
        Ok(page.bookings)
    }

    async fn users(&self) -> Result<Vec<ApiUser>, MarketplaceError> {
        let page: UserPage = self.get_data("/admin/users").await?;
        Ok(page.users)
    }

    async fn update_user_status(&self, user_id: i64, is_active: bool) -> Result<(), MarketplaceError> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/admin/users/{user_id}/status"),
            &UserStatusBody { is_active },
        )
        .await?;
        Ok(())
    }

    async fn create_featured(&self, record: &FeaturedTurfPriority) -> Result<(), MarketplaceError> {
        self.send_json(reqwest::Method::POST, "/admin/featured-turfs", record)
            .await?;
        Ok(())
    }

    async fn update_featured(&self, record: &FeaturedTurfPriority) -> Result<(), MarketplaceError> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/admin/featured-turfs/{}", record.turf_id),
            record,
        )
        .await?;
        Ok(())
    }
}

// ---- response helpers ----

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or a [`MarketplaceError::Api`] with the status and
/// body text on failure.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, MarketplaceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(MarketplaceError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, MarketplaceError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}

fn unwrap_envelope<T>(envelope: Envelope<T>) -> Result<T, MarketplaceError> {
    match envelope.data {
        Some(data) if envelope.status => Ok(data),
        _ => Err(MarketplaceError::Envelope {
            message: envelope.message,
        }),
    }
}
