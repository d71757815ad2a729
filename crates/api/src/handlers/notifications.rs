//! Handlers for notification templates and the simulated send log.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use turfdesk_core::audit::actions;
use turfdesk_core::notifications::{
    find_template, notification_id, simulate_delivery, NotificationLog, SendNotification, Template,
    TEMPLATES,
};
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/notifications/templates
pub async fn list_templates(_admin: AuthAdmin) -> Json<DataResponse<&'static [Template]>> {
    Json(DataResponse { data: TEMPLATES })
}

/// GET /api/v1/notifications/logs
pub async fn list_logs(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<Vec<NotificationLog>>>> {
    let logs = state.store.read().await.notifications.clone();
    Ok(Json(DataResponse { data: logs }))
}

/// POST /api/v1/notifications/send
///
/// Delivery is simulated; the outcome is recorded in the log either way.
pub async fn send_notification(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<SendNotification>,
) -> AppResult<(StatusCode, Json<DataResponse<NotificationLog>>)> {
    input.validate()?;
    let template = find_template(&input.template_id)?;
    let message = input.compose(template)?;

    let delivery = simulate_delivery(&mut rand::rng(), state.config.notification_failure_rate);
    let now = Utc::now();
    let log = NotificationLog {
        id: notification_id(now.timestamp_millis()),
        template_id: template.id.to_string(),
        kind: template.name.to_string(),
        recipient: input.recipient.trim().to_string(),
        message,
        status: delivery,
        timestamp: now,
        channel: input.channel,
    };
    tracing::info!(
        notification_id = %log.id,
        channel = %log.channel,
        status = %log.status,
        "Notification sent"
    );

    let mut store = state.store.write().await;
    store.notifications.insert(0, log.clone());
    store.record(
        actions::SEND_NOTIFICATION,
        input.audit_details(template),
        &admin.ip_address,
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: log })))
}
