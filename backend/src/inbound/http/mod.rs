//! HTTP inbound adapter exposing REST and GeoJSON endpoints.

pub mod error;
pub mod feed;
pub mod health;
pub mod observations;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
