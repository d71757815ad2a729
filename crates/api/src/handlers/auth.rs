//! Handlers for the `/auth` resource (login, logout).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use turfdesk_core::audit::actions;
use turfdesk_core::auth::LoginRequest;
use validator::Validate;

use crate::auth::jwt::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthAdmin, ClientIp};
use crate::response::DataResponse;
use crate::state::AppState;

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Session lifetime in seconds.
    pub expires_in: i64,
    pub email: String,
}

/// POST /api/v1/auth/login
///
/// Check the admin credential and issue a session token. An `auth_token` in
/// the body becomes the bearer token for marketplace API calls.
pub async fn login(
    State(state): State<AppState>,
    ClientIp(ip): ClientIp,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<SessionResponse>>> {
    input.validate()?;
    if let Err(err) = state.config.admin.verify(&input.email, &input.password) {
        tracing::warn!(email = %input.email, %ip, "Rejected console login");
        return Err(err.into());
    }

    let email = state.config.admin.email.clone();
    let access_token = generate_session_token(&email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    if let Some(token) = input.auth_token.filter(|t| !t.trim().is_empty()) {
        state.upstream.set_auth_token(Some(token)).await;
    }

    state
        .store
        .write()
        .await
        .record(actions::LOGIN, format!("Admin {email} logged in"), &ip);

    Ok(Json(DataResponse {
        data: SessionResponse {
            access_token,
            token_type: "Bearer",
            expires_in: state.config.jwt.expiry_mins * 60,
            email,
        },
    }))
}

/// POST /api/v1/auth/logout
///
/// Record the logout and restore the configured upstream token.
pub async fn logout(State(state): State<AppState>, admin: AuthAdmin) -> AppResult<StatusCode> {
    state
        .upstream
        .set_auth_token(state.config.upstream_auth_token.clone())
        .await;

    state.store.write().await.record(
        actions::LOGOUT,
        format!("Admin {} logged out", admin.email),
        &admin.ip_address,
    );

    Ok(StatusCode::NO_CONTENT)
}
