//! Booking records and the transforms applied to upstream booking history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::search::Searchable;
use crate::status::{BookingStatus, HasStatus, Identified};

/// A booking as listed on the bookings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_phone: Option<String>,
    pub turf_id: String,
    pub turf_name: String,
    pub sport: String,
    pub date: NaiveDate,
    /// Display slot, e.g. `"18:00 - 20:00"`.
    pub time: String,
    pub duration_hours: Option<f64>,
    pub amount: f64,
    pub status: BookingStatus,
    pub payment_method: String,
    pub transaction_id: String,
}

impl Identified for Booking {
    const ENTITY: &'static str = "Booking";

    fn record_id(&self) -> &str {
        &self.id
    }
}

impl HasStatus for Booking {
    type Status = BookingStatus;

    fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
    }
}

impl Searchable for Booking {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.user_name.as_str(), self.turf_name.as_str(), self.id.as_str()]
    }

    fn status_label(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

// ---------------------------------------------------------------------------
// Upstream transforms
// ---------------------------------------------------------------------------

/// Map an upstream booking status to the console status.
///
/// Pending and Completed bookings show as confirmed; unknown values default
/// to confirmed.
pub fn map_upstream_status(raw: &str) -> BookingStatus {
    match raw {
        "Cancelled" => BookingStatus::Cancelled,
        "Refunded" => BookingStatus::Refunded,
        "No-Show" => BookingStatus::NoShow,
        _ => BookingStatus::Confirmed,
    }
}

/// Build the `"HH:MM - HH:MM"` slot label from upstream `HH:MM:SS` times.
pub fn format_slot(start: &str, end: &str) -> String {
    fn hhmm(t: &str) -> &str {
        t.get(..5).unwrap_or(t)
    }
    format!("{} - {}", hhmm(start), hhmm(end))
}

/// Round a duration to one decimal place.
pub fn round_duration(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

/// Console payment method label for an upstream payment status.
pub fn payment_method_label(payment_status: &str) -> &'static str {
    if payment_status == "Pending" {
        "Pending"
    } else {
        "Online"
    }
}

/// Synthetic transaction id for an upstream booking id (`TXN00000042`).
pub fn transaction_id(booking_id: i64) -> String {
    format!("TXN{booking_id:08}")
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Counts and revenue shown above the bookings table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingSummary {
    pub total: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub refunded: usize,
    pub no_show: usize,
    pub revenue: f64,
}

/// Summarize a set of bookings. Revenue is the sum of every amount.
pub fn summarize(bookings: &[Booking]) -> BookingSummary {
    bookings
        .iter()
        .fold(BookingSummary::default(), |mut acc, b| {
            acc.total += 1;
            acc.revenue += b.amount;
            match b.status {
                BookingStatus::Confirmed => acc.confirmed += 1,
                BookingStatus::Cancelled => acc.cancelled += 1,
                BookingStatus::Refunded => acc.refunded += 1,
                BookingStatus::NoShow => acc.no_show += 1,
            }
            acc
        })
}
