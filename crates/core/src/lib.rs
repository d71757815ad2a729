//! Domain logic for the turf marketplace admin console.
//!
//! Pure and synchronous: view records, status enums and transitions, search
//! predicates, settlement arithmetic, notification templates, the audit trail
//! and the bundled demo dataset. Network access lives in `turfdesk-client`.

pub mod analytics;
pub mod audit;
pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod export;
pub mod featured;
pub mod mock;
pub mod money;
pub mod notifications;
pub mod owners;
pub mod requests;
pub mod search;
pub mod settlement;
pub mod status;
pub mod turfs;
pub mod types;
pub mod users;
