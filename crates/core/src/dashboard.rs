//! Dashboard KPI cards.

use serde::Serialize;

use crate::bookings::Booking;
use crate::money::format_inr_thousands;
use crate::owners::Owner;
use crate::status::{BookingStatus, TurfStatus};
use crate::turfs::Turf;

/// Number of rows shown in the recent-bookings and top-turfs panels.
pub const PANEL_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else if change < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub name: &'static str,
    pub value: String,
    pub change: Option<String>,
    pub trend: Trend,
    pub comparison_period: Option<String>,
}

impl KpiCard {
    pub fn new(name: &'static str, value: String) -> Self {
        Self {
            name,
            value,
            change: None,
            trend: Trend::Flat,
            comparison_period: None,
        }
    }

    /// Attach a percentage change, e.g. `12.5` renders as `+12.5%`.
    pub fn with_change(mut self, percent: f64, comparison_period: Option<String>) -> Self {
        self.change = Some(format_change(percent));
        self.trend = Trend::of(percent);
        self.comparison_period = comparison_period;
        self
    }
}

/// Signed percentage with at most one decimal (`+8%`, `-5.5%`, `0%`).
pub fn format_change(percent: f64) -> String {
    let rounded = (percent * 10.0).round() / 10.0;
    let sign = if rounded > 0.0 { "+" } else { "" };
    if rounded.fract() == 0.0 {
        format!("{sign}{}%", rounded as i64)
    } else {
        format!("{sign}{rounded:.1}%")
    }
}

pub const TODAYS_BOOKINGS: &str = "Today's Bookings";
pub const REVENUE_TODAY: &str = "Revenue Today";
pub const ACTIVE_TURFS: &str = "Active Turfs";
pub const PENDING_SETTLEMENTS: &str = "Pending Settlements";

/// KPIs derived from the console's own working sets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalKpis {
    pub total_revenue: f64,
    pub active_bookings: usize,
    pub active_turfs: usize,
    pub pending_settlements: i64,
}

impl LocalKpis {
    pub fn derive(bookings: &[Booking], turfs: &[Turf], owners: &[Owner]) -> Self {
        Self {
            total_revenue: bookings.iter().map(|b| b.amount).sum(),
            active_bookings: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Confirmed)
                .count(),
            active_turfs: turfs
                .iter()
                .filter(|t| t.status == TurfStatus::Active)
                .count(),
            pending_settlements: owners.iter().map(|o| o.pending_settlements).sum(),
        }
    }

    pub fn cards(&self) -> Vec<KpiCard> {
        vec![
            KpiCard::new(TODAYS_BOOKINGS, self.active_bookings.to_string()),
            KpiCard::new(REVENUE_TODAY, format_inr_thousands(self.total_revenue)),
            KpiCard::new(ACTIVE_TURFS, self.active_turfs.to_string()),
            KpiCard::new(
                PENDING_SETTLEMENTS,
                format_inr_thousands(self.pending_settlements as f64),
            ),
        ]
    }
}

/// Turfs with the highest 30-day revenue, best first.
pub fn top_turfs(turfs: &[Turf], limit: usize) -> Vec<Turf> {
    let mut ranked = turfs.to_vec();
    ranked.sort_by(|a, b| b.revenue_30d.cmp(&a.revenue_30d));
    ranked.truncate(limit);
    ranked
}
