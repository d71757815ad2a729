//! Typed client for the turf marketplace REST API.

pub mod api;
pub mod dto;
pub mod error;

pub use api::{MarketplaceApi, MarketplaceClient, DEFAULT_BASE_URL};
pub use error::MarketplaceError;
