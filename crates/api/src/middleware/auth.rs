//! Session-token authentication extractor for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use turfdesk_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Address recorded when the caller's address is unknown.
pub const UNKNOWN_IP: &str = "unknown";

/// Caller address taken from `X-Forwarded-For` (first hop) or `X-Real-IP`.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl<S: Send + Sync> FromRequestParts<S> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };
        let ip = header("x-forwarded-for")
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .or_else(|| header("x-real-ip"))
            .unwrap_or(UNKNOWN_IP);
        Ok(ClientIp(ip.to_string()))
    }
}

/// The logged-in console admin, extracted from a Bearer session token.
///
/// ```ignore
/// async fn my_handler(admin: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin = %admin.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    /// Email the session was issued to.
    pub email: String,
    /// Caller address for the audit trail.
    pub ip_address: String,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let ClientIp(ip_address) = ClientIp::from_request_parts(parts, state)
            .await
            .unwrap_or_else(|never| match never {});

        Ok(AuthAdmin {
            email: claims.sub,
            ip_address,
        })
    }
}
