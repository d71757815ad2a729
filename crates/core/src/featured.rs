//! Featured-listing promotions.
//!
//! Featured turfs carry a 1-based position that stays contiguous: adding
//! appends at `len + 1`, removing and moving renumber the rest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::status::Identified;
use crate::turfs::Turf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedTurf {
    pub turf_id: String,
    pub position: u32,
    pub badge: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
}

impl Identified for FeaturedTurf {
    const ENTITY: &'static str = "Featured turf";

    fn record_id(&self) -> &str {
        &self.turf_id
    }
}

impl FeaturedTurf {
    /// Whether the promotion window covers `day` (inclusive on both ends).
    pub fn is_running_on(&self, day: NaiveDate) -> bool {
        self.active && self.start_date <= day && day <= self.end_date
    }
}

/// Add-featured form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewFeatured {
    #[validate(length(min = 1, message = "required"))]
    pub turf_id: String,
    #[validate(length(min = 1, message = "required"))]
    pub badge: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Add a turf to the featured list at the next position.
///
/// Fails when the date range is inverted, the turf is unknown, or the turf is
/// already featured.
pub fn add(
    featured: &mut Vec<FeaturedTurf>,
    turfs: &[Turf],
    input: NewFeatured,
) -> Result<FeaturedTurf, CoreError> {
    if input.end_date < input.start_date {
        return Err(CoreError::Validation(
            "end_date must not be before start_date".into(),
        ));
    }
    if !turfs.iter().any(|t| t.id == input.turf_id) {
        return Err(CoreError::not_found(Turf::ENTITY, input.turf_id));
    }
    if featured.iter().any(|f| f.turf_id == input.turf_id) {
        return Err(CoreError::Conflict(format!(
            "Turf {} is already featured",
            input.turf_id
        )));
    }

    let record = FeaturedTurf {
        turf_id: input.turf_id,
        position: featured.len() as u32 + 1,
        badge: input.badge.trim().to_string(),
        start_date: input.start_date,
        end_date: input.end_date,
        active: true,
    };
    featured.push(record.clone());
    Ok(record)
}

/// Remove a featured turf and close the gap in positions.
pub fn remove(featured: &mut Vec<FeaturedTurf>, turf_id: &str) -> Result<FeaturedTurf, CoreError> {
    sort_by_position(featured);
    let removed = crate::status::remove(featured, turf_id)?;
    renumber(featured);
    Ok(removed)
}

/// Flip the active flag of one featured turf, returning the new value.
pub fn toggle(featured: &mut [FeaturedTurf], turf_id: &str) -> Result<FeaturedTurf, CoreError> {
    let record = featured
        .iter_mut()
        .find(|f| f.turf_id == turf_id)
        .ok_or_else(|| CoreError::not_found(FeaturedTurf::ENTITY, turf_id))?;
    record.active = !record.active;
    Ok(record.clone())
}

/// Move a featured turf to `position` (1-based), shifting the others.
///
/// Positions beyond the end clamp to the last slot.
pub fn move_to(
    featured: &mut Vec<FeaturedTurf>,
    turf_id: &str,
    position: u32,
) -> Result<FeaturedTurf, CoreError> {
    if position == 0 {
        return Err(CoreError::Validation("position must be at least 1".into()));
    }
    sort_by_position(featured);
    let record = crate::status::remove(featured, turf_id)?;
    let index = (position as usize - 1).min(featured.len());
    featured.insert(index, record);
    renumber(featured);
    Ok(featured[index].clone())
}

/// Records of `after` whose position differs from the same turf in `before`.
///
/// Records new to `after` count as repositioned; records that left are
/// not returned.
pub fn repositioned<'a>(before: &[FeaturedTurf], after: &'a [FeaturedTurf]) -> Vec<&'a FeaturedTurf> {
    after
        .iter()
        .filter(|a| {
            !before
                .iter()
                .any(|b| b.turf_id == a.turf_id && b.position == a.position)
        })
        .collect()
}

/// Turfs that are not featured yet, in their original order.
pub fn available_turfs<'a>(turfs: &'a [Turf], featured: &[FeaturedTurf]) -> Vec<&'a Turf> {
    turfs
        .iter()
        .filter(|t| !featured.iter().any(|f| f.turf_id == t.id))
        .collect()
}

/// Audit detail for a toggle.
pub fn toggle_audit_details(turf_name: &str, now_active: bool) -> String {
    let verb = if now_active { "Activated" } else { "Deactivated" };
    format!("{verb} {turf_name}")
}

fn sort_by_position(featured: &mut [FeaturedTurf]) {
    featured.sort_by_key(|f| f.position);
}

fn renumber(featured: &mut [FeaturedTurf]) {
    for (i, f) in featured.iter_mut().enumerate() {
        f.position = i as u32 + 1;
    }
}
