//! Request extractors.
//!
//! - [`auth::AuthAdmin`] -- Requires a valid console session token.
//! - [`auth::ClientIp`] -- Caller address recorded in the audit trail.

pub mod auth;
