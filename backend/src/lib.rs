//! Observation map service.
//!
//! Records named point observations, rejects coordinates outside a configured
//! bounding box, and serves stored observations as a GeoJSON feed.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
