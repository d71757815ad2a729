//! Owner registration requests (enquiries) and their decision bookkeeping.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::search::matches_status;
use crate::status::RequestStatus;

/// A prospective owner's registration request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerRequest {
    pub request_id: i64,
    pub owner_name: String,
    pub mobile: String,
    pub email: String,
    pub proposed_turf_name: String,
    pub city: String,
    pub status: RequestStatus,
    /// Upstream timestamp string, passed through as received.
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl OwnerRequest {
    /// Entity name used in not-found errors. Requests are keyed by a numeric
    /// id, so they do not implement `Identified`.
    pub const ENTITY: &'static str = "Owner request";

    /// Free-text match: name, email, city and proposed turf name ignore case,
    /// the mobile number is matched as a plain substring.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let lower = query.to_lowercase();
        self.owner_name.to_lowercase().contains(&lower)
            || self.email.to_lowercase().contains(&lower)
            || self.mobile.contains(query)
            || self.city.to_lowercase().contains(&lower)
            || self.proposed_turf_name.to_lowercase().contains(&lower)
    }
}

/// Filter requests by free text and a case-insensitive status (`all` = any).
pub fn filter_requests(
    requests: &[OwnerRequest],
    query: Option<&str>,
    status: Option<&str>,
) -> Vec<OwnerRequest> {
    requests
        .iter()
        .filter(|r| matches_status(status, r.status.as_str()))
        .filter(|r| r.matches(query.unwrap_or("")))
        .cloned()
        .collect()
}

/// Counters shown above the requests table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStats {
    pub total_requests: u32,
    pub pending_requests: u32,
    pub approved_requests: u32,
    pub rejected_requests: u32,
}

impl RequestStats {
    /// Count a list of requests from scratch.
    pub fn tally(requests: &[OwnerRequest]) -> Self {
        let mut stats = Self {
            total_requests: requests.len() as u32,
            ..Self::default()
        };
        for r in requests {
            match r.status {
                RequestStatus::Pending => stats.pending_requests += 1,
                RequestStatus::Approved => stats.approved_requests += 1,
                RequestStatus::Rejected => stats.rejected_requests += 1,
            }
        }
        stats
    }

    /// Move one request out of pending into `decision`.
    pub fn record_decision(&mut self, decision: RequestStatus) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
        match decision {
            RequestStatus::Approved => self.approved_requests += 1,
            RequestStatus::Rejected => self.rejected_requests += 1,
            RequestStatus::Pending => self.pending_requests += 1,
        }
    }
}

/// Body of a reject action.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectRequest {
    #[serde(default)]
    pub reason: String,
}

impl RejectRequest {
    /// The trimmed reason, or a validation error when it is blank.
    pub fn trimmed_reason(&self) -> Result<&str, CoreError> {
        let reason = self.reason.trim();
        if reason.is_empty() {
            return Err(CoreError::Validation(
                "reason: a rejection reason is required".into(),
            ));
        }
        Ok(reason)
    }
}

/// Find a request by its numeric id.
pub fn find_request(
    requests: &mut [OwnerRequest],
    request_id: i64,
) -> Result<&mut OwnerRequest, CoreError> {
    requests
        .iter_mut()
        .find(|r| r.request_id == request_id)
        .ok_or_else(|| CoreError::not_found(OwnerRequest::ENTITY, request_id.to_string()))
}

/// Apply an upstream-confirmed decision to the local copy of a request.
pub fn apply_decision(
    requests: &mut [OwnerRequest],
    stats: &mut RequestStats,
    request_id: i64,
    decision: RequestStatus,
    now: &str,
) -> Result<OwnerRequest, CoreError> {
    let request = find_request(requests, request_id)?;
    if request.status != RequestStatus::Pending {
        return Err(CoreError::Conflict(format!(
            "Request {request_id} is already {}",
            request.status
        )));
    }
    request.status = decision;
    request.updated_at = Some(now.to_string());
    stats.record_decision(decision);
    Ok(request.clone())
}
