//! Client for the remote people catalog (SWAPI-compatible).

pub mod client;
pub mod messages;

pub use client::{CatalogClient, CatalogError, DEFAULT_BASE_URL, DEFAULT_PAGE_LIMIT};
