//! Notification templates, rendering, and the simulated send log.

use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::status::{Channel, DeliveryStatus};
use crate::types::Timestamp;

/// A message template with `{variable}` placeholders.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub variables: &'static [&'static str],
    pub body: &'static str,
}

pub const TEMPLATES: &[Template] = &[
    Template {
        id: "booking_confirmation",
        name: "Booking Confirmation",
        variables: &["user_name", "turf_name", "date", "time", "booking_id", "amount"],
        body: "Hi {user_name}! Your booking at {turf_name} on {date} at {time} is confirmed. \
               Booking ID: {booking_id}. Amount: ₹{amount}",
    },
    Template {
        id: "payment_reminder",
        name: "Payment Due Reminder",
        variables: &["user_name", "due_amount", "due_date", "booking_link"],
        body: "Hi {user_name}, you have a pending payment of ₹{due_amount} due on {due_date}. \
               Pay now: {booking_link}",
    },
    Template {
        id: "event_offer",
        name: "Event/Offer Notification",
        variables: &["user_name", "event_name", "signup_link"],
        body: "Hi {user_name}! Exciting news! {event_name} is happening soon. \
               Register now: {signup_link}",
    },
];

pub fn find_template(id: &str) -> Result<&'static Template, CoreError> {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| CoreError::not_found("Notification template", id))
}

/// Substitute every `{name}` placeholder that has a value in `vars`.
///
/// Placeholders without a value are left as they are.
pub fn render(body: &str, vars: &HashMap<String, String>) -> String {
    vars.iter().fold(body.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{name}}}"), value)
    })
}

/// One entry of the notification log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationLog {
    pub id: String,
    pub template_id: String,
    /// Template display name.
    pub kind: String,
    pub recipient: String,
    pub message: String,
    pub status: DeliveryStatus,
    pub timestamp: Timestamp,
    pub channel: Channel,
}

/// Send form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendNotification {
    #[validate(length(min = 1, message = "required"))]
    pub template_id: String,
    #[validate(length(min = 1, message = "required"))]
    pub recipient: String,
    pub channel: Channel,
    /// Message text; the template body is used when absent.
    pub message: Option<String>,
    #[serde(default)]
    pub variables: HashMap<String, String>,
}

impl SendNotification {
    /// Final message text: the given message (or the template body) with
    /// placeholders filled in. Fails when the result is blank.
    pub fn compose(&self, template: &Template) -> Result<String, CoreError> {
        let raw = self.message.as_deref().unwrap_or(template.body);
        let message = render(raw, &self.variables);
        if message.trim().is_empty() {
            return Err(CoreError::Validation("message: required".into()));
        }
        Ok(message)
    }

    pub fn audit_details(&self, template: &Template) -> String {
        format!(
            "Sent {} via {} to {}",
            template.name,
            self.channel,
            self.recipient.trim()
        )
    }
}

/// Simulated delivery outcome: failed with probability `failure_rate`.
pub fn simulate_delivery<R: Rng + ?Sized>(rng: &mut R, failure_rate: f64) -> DeliveryStatus {
    let rate = failure_rate.clamp(0.0, 1.0);
    if rng.random_bool(rate) {
        DeliveryStatus::Failed
    } else {
        DeliveryStatus::Delivered
    }
}

pub fn notification_id(millis: i64) -> String {
    format!("NOT{millis}")
}
