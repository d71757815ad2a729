//! Weekly revenue settlement arithmetic.
//!
//! Each turf's weekly revenue is split into a fixed admin commission and the
//! owner's share. The owner share can be paid out early in part ("urgent
//! settlement") and the rest is settled at the end of the week.
//!
//! Invariants held by [`WeeklySettlement`]:
//!
//! - `admin_commission + owner_amount == total_revenue`
//! - `admin_commission == round(total_revenue * 7 / 100)`
//! - `remaining == owner_amount - urgent_settled - settled_payout`, never negative

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::bookings::Booking;
use crate::error::CoreError;
use crate::money::{format_inr, to_rupees};
use crate::status::{BookingStatus, SettlementStatus};
use crate::types::{Rupees, Timestamp};

/// Admin commission on every rupee of turf revenue.
pub const ADMIN_COMMISSION_PERCENT: Rupees = 7;

/// Admin commission on `revenue`, rounded half away from zero to whole rupees.
///
/// ```
/// use turfdesk_core::settlement::admin_commission;
/// assert_eq!(admin_commission(15_000), 1_050);
/// assert_eq!(admin_commission(50), 4); // 3.5 rounds up
/// ```
pub fn admin_commission(revenue: Rupees) -> Rupees {
    let scaled = revenue * ADMIN_COMMISSION_PERCENT;
    if scaled >= 0 {
        (scaled + 50) / 100
    } else {
        -((-scaled + 50) / 100)
    }
}

/// Owner's share of `revenue` after the admin commission.
pub fn owner_amount(revenue: Rupees) -> Rupees {
    revenue - admin_commission(revenue)
}

/// Monday of the week containing `day`.
pub fn week_start_of(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_monday()))
}

/// An early partial payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgentPayout {
    pub amount: Rupees,
    pub note: Option<String>,
    pub paid_at: Timestamp,
}

/// One turf's settlement for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySettlement {
    pub turf_id: String,
    pub turf_name: String,
    pub owner_id: String,
    pub week_start: NaiveDate,
    pub total_revenue: Rupees,
    pub admin_commission: Rupees,
    pub owner_amount: Rupees,
    pub urgent_settled: Rupees,
    /// Final payout made when the week was settled.
    pub settled_payout: Rupees,
    pub remaining: Rupees,
    pub status: SettlementStatus,
    pub urgent_payouts: Vec<UrgentPayout>,
    pub settled_at: Option<Timestamp>,
}

impl WeeklySettlement {
    pub fn new(
        turf_id: impl Into<String>,
        turf_name: impl Into<String>,
        owner_id: impl Into<String>,
        week_start: NaiveDate,
        total_revenue: Rupees,
    ) -> Self {
        let mut s = Self {
            turf_id: turf_id.into(),
            turf_name: turf_name.into(),
            owner_id: owner_id.into(),
            week_start: week_start_of(week_start),
            total_revenue: 0,
            admin_commission: 0,
            owner_amount: 0,
            urgent_settled: 0,
            settled_payout: 0,
            remaining: 0,
            status: SettlementStatus::Pending,
            urgent_payouts: Vec::new(),
            settled_at: None,
        };
        s.set_revenue(total_revenue);
        s
    }

    /// Replace the week's revenue and recompute the split.
    ///
    /// Urgent payouts already made are kept. If they exceed the new owner
    /// share the remaining balance floors at zero.
    pub fn set_revenue(&mut self, total_revenue: Rupees) {
        self.total_revenue = total_revenue.max(0);
        self.admin_commission = admin_commission(self.total_revenue);
        self.owner_amount = self.total_revenue - self.admin_commission;
        self.refresh();
    }

    fn refresh(&mut self) {
        self.remaining = (self.owner_amount - self.urgent_settled - self.settled_payout).max(0);
        self.status = if self.settled_at.is_some() {
            SettlementStatus::Settled
        } else if self.urgent_settled > 0 {
            SettlementStatus::PartiallySettled
        } else {
            SettlementStatus::Pending
        };
    }

    /// Record an urgent partial payout.
    ///
    /// Rejected when `amount <= 0`, `amount > remaining`, or the week is
    /// already settled.
    pub fn record_urgent(
        &mut self,
        amount: Rupees,
        note: Option<String>,
        now: Timestamp,
    ) -> Result<UrgentPayout, CoreError> {
        if self.status == SettlementStatus::Settled {
            return Err(CoreError::Conflict(format!(
                "Week of {} for {} is already settled",
                self.week_start, self.turf_id
            )));
        }
        if amount <= 0 {
            return Err(CoreError::Validation(
                "amount: must be greater than zero".into(),
            ));
        }
        if amount > self.remaining {
            return Err(CoreError::Validation(format!(
                "amount: {} exceeds the remaining balance of {}",
                format_inr(amount),
                format_inr(self.remaining)
            )));
        }

        let payout = UrgentPayout {
            amount,
            note: note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
            paid_at: now,
        };
        self.urgent_payouts.push(payout.clone());
        self.urgent_settled += amount;
        self.refresh();
        Ok(payout)
    }

    /// Pay out the remaining balance and close the week. Returns the amount paid.
    pub fn settle(&mut self, now: Timestamp) -> Result<Rupees, CoreError> {
        if self.status == SettlementStatus::Settled {
            return Err(CoreError::Conflict(format!(
                "Week of {} for {} is already settled",
                self.week_start, self.turf_id
            )));
        }
        let payout = self.remaining;
        self.settled_payout = payout;
        self.settled_at = Some(now);
        self.refresh();
        Ok(payout)
    }

    pub fn urgent_audit_details(&self, amount: Rupees) -> String {
        format!(
            "Urgent settlement of {} for {} ({}), remaining {}",
            format_inr(amount),
            self.turf_name,
            self.turf_id,
            format_inr(self.remaining)
        )
    }

    pub fn settle_audit_details(&self, payout: Rupees) -> String {
        format!(
            "Settled week of {} for {} ({}): paid {}",
            self.week_start,
            self.turf_name,
            self.turf_id,
            format_inr(payout)
        )
    }
}

/// Revenue per turf from confirmed bookings dated within the week starting
/// at `week_start`.
pub fn weekly_revenue_by_turf(bookings: &[Booking], week_start: NaiveDate) -> BTreeMap<String, Rupees> {
    let start = week_start_of(week_start);
    let end = start + Duration::days(7);
    let mut revenue = BTreeMap::new();
    for b in bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed && b.date >= start && b.date < end)
    {
        *revenue.entry(b.turf_id.clone()).or_insert(0) += to_rupees(b.amount);
    }
    revenue
}

/// Minimal turf identity needed to build settlement rows.
#[derive(Debug, Clone)]
pub struct TurfRef<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub owner_id: &'a str,
}

/// Rebuild a week's settlements from booking revenue.
///
/// One row per turf in `turfs`. Pending and partially settled rows keep their
/// urgent payouts and take the new revenue. Settled rows are frozen: their
/// revenue and payouts stay as they were paid.
pub fn rebuild_week(
    existing: &mut Vec<WeeklySettlement>,
    turfs: &[TurfRef<'_>],
    bookings: &[Booking],
    week_start: NaiveDate,
) {
    let week = week_start_of(week_start);
    let revenue = weekly_revenue_by_turf(bookings, week);
    for turf in turfs {
        let total = revenue.get(turf.id).copied().unwrap_or(0);
        match existing
            .iter()
            .position(|s| s.week_start == week && s.turf_id == turf.id)
        {
            Some(i) if existing[i].status == SettlementStatus::Settled => {}
            Some(i) => existing[i].set_revenue(total),
            None => existing.push(WeeklySettlement::new(
                turf.id, turf.name, turf.owner_id, week, total,
            )),
        }
    }
}

/// Find the settlement of `turf_id` for `week_start`.
pub fn find_mut<'a>(
    settlements: &'a mut [WeeklySettlement],
    turf_id: &str,
    week_start: NaiveDate,
) -> Result<&'a mut WeeklySettlement, CoreError> {
    let week = week_start_of(week_start);
    settlements
        .iter_mut()
        .find(|s| s.turf_id == turf_id && s.week_start == week)
        .ok_or_else(|| CoreError::not_found("Settlement", format!("{turf_id}@{week}")))
}

/// Totals over the rows of one week.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SettlementSummary {
    pub turfs: usize,
    pub total_revenue: Rupees,
    pub admin_commission: Rupees,
    pub owner_amount: Rupees,
    pub urgent_settled: Rupees,
    pub remaining: Rupees,
    pub settled: usize,
}

pub fn summarize(rows: &[WeeklySettlement]) -> SettlementSummary {
    rows.iter().fold(SettlementSummary::default(), |mut acc, s| {
        acc.turfs += 1;
        acc.total_revenue += s.total_revenue;
        acc.admin_commission += s.admin_commission;
        acc.owner_amount += s.owner_amount;
        acc.urgent_settled += s.urgent_settled;
        acc.remaining += s.remaining;
        if s.status == SettlementStatus::Settled {
            acc.settled += 1;
        }
        acc
    })
}
