//! Per-turf seven-day performance metrics and their CSV export.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::bookings::Booking;
use crate::export::csv_row;
use crate::money::to_rupees;
use crate::owners::Owner;
use crate::settlement::owner_amount;
use crate::status::TurfStatus;
use crate::turfs::{owner_display_name, Turf};
use crate::types::Rupees;

/// Length of the analytics window, ending on (and including) the as-of day.
pub const WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurfMetrics {
    pub turf_id: String,
    pub turf_name: String,
    pub city: String,
    pub status: TurfStatus,
    pub owner_name: String,
    pub total_bookings: usize,
    pub total_revenue: Rupees,
    /// Owner share of the window's revenue after the admin commission.
    pub settlement_amount: Rupees,
}

/// First day of the window ending on `as_of`.
pub fn window_start(as_of: NaiveDate) -> NaiveDate {
    as_of - Duration::days(WINDOW_DAYS - 1)
}

/// Metrics for every turf over the window ending on `as_of`.
pub fn turf_metrics(
    turfs: &[Turf],
    owners: &[Owner],
    bookings: &[Booking],
    as_of: NaiveDate,
) -> Vec<TurfMetrics> {
    let from = window_start(as_of);
    turfs
        .iter()
        .map(|turf| {
            let in_window: Vec<&Booking> = bookings
                .iter()
                .filter(|b| b.turf_id == turf.id && b.date >= from && b.date <= as_of)
                .collect();
            let total_revenue = to_rupees(in_window.iter().map(|b| b.amount).sum());
            TurfMetrics {
                turf_id: turf.id.clone(),
                turf_name: turf.name.clone(),
                city: turf.city.clone(),
                status: turf.status,
                owner_name: owner_display_name(turf, owners).to_string(),
                total_bookings: in_window.len(),
                total_revenue,
                settlement_amount: owner_amount(total_revenue),
            }
        })
        .collect()
}

pub fn to_csv(rows: &[TurfMetrics]) -> String {
    let mut out = csv_row(&[
        "turf_id",
        "turf_name",
        "city",
        "status",
        "owner_name",
        "bookings_7d",
        "revenue_7d",
        "settlement_7d",
    ]);
    for m in rows {
        out.push_str(&csv_row(&[
            m.turf_id.clone(),
            m.turf_name.clone(),
            m.city.clone(),
            m.status.to_string(),
            m.owner_name.clone(),
            m.total_bookings.to_string(),
            m.total_revenue.to_string(),
            m.settlement_amount.to_string(),
        ]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    #[test]
    fn window_is_seven_days_inclusive() {
        assert_eq!(window_start(day(21)), day(15));
    }

    #[test]
    fn metrics_over_mock_data() {
        let rows = turf_metrics(&mock::turfs(), &mock::owners(), &mock::bookings(), day(21));
        assert_eq!(rows.len(), 2);
        let elite = &rows[0];
        assert_eq!(elite.turf_id, "TURF001");
        assert_eq!(elite.owner_name, "Rajesh Kumar");
        assert_eq!(elite.total_bookings, 1);
        assert_eq!(elite.total_revenue, 1_600);
        assert_eq!(elite.settlement_amount, 1_488);
    }

    #[test]
    fn bookings_outside_window_are_ignored() {
        let rows = turf_metrics(&mock::turfs(), &mock::owners(), &mock::bookings(), day(20));
        assert_eq!(rows[0].total_bookings, 1);
        assert_eq!(rows[1].total_bookings, 0);
        assert_eq!(rows[1].settlement_amount, 0);

        let later = turf_metrics(&mock::turfs(), &mock::owners(), &mock::bookings(), day(31));
        assert!(later.iter().all(|m| m.total_bookings == 0));
    }

    #[test]
    fn csv_export() {
        let rows = turf_metrics(&mock::turfs(), &mock::owners(), &mock::bookings(), day(21));
        let csv = to_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("turf_id,turf_name"));
        assert_eq!(
            lines[1],
            "TURF001,Elite Sports Arena,Mumbai,active,Rajesh Kumar,1,1600,1488"
        );
    }
}
