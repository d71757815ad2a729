//! Rupee formatting helpers for display values.

use crate::types::Rupees;

/// Format an amount with the rupee sign and Indian digit grouping
/// (last three digits, then groups of two).
///
/// # Examples
///
/// ```
/// use turfdesk_core::money::format_inr;
/// assert_eq!(format_inr(15_000), "₹15,000");
/// assert_eq!(format_inr(1_234_567), "₹12,34,567");
/// assert_eq!(format_inr(-950), "-₹950");
/// ```
pub fn format_inr(amount: Rupees) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();

    if digits.len() <= 3 {
        return format!("{sign}₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("{sign}₹{},{tail}", groups.join(","))
}

/// Format an amount in thousands with one decimal, e.g. `₹87.5K`.
pub fn format_inr_thousands(amount: f64) -> String {
    format!("₹{:.1}K", amount / 1000.0)
}

/// Round a floating amount from the upstream API to whole rupees.
pub fn to_rupees(amount: f64) -> Rupees {
    amount.round() as Rupees
}
