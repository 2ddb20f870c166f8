//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ObservationCommand, ObservationQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Submission use case.
    pub observations: Arc<dyn ObservationCommand>,
    /// Read use cases and the map feed.
    pub observations_query: Arc<dyn ObservationQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use observation_map::domain::BoundingBox;
    /// use observation_map::domain::ports::{FixtureObservationCommand, FixtureObservationQuery};
    /// use observation_map::inbound::http::state::HttpState;
    ///
    /// let bounds = BoundingBox::new(-44.887212, -40.95975, -23.366868, -20.764962)
    ///     .expect("valid bounds");
    /// let state = HttpState::new(
    ///     Arc::new(FixtureObservationCommand::new(bounds)),
    ///     Arc::new(FixtureObservationQuery),
    /// );
    /// let _query = state.observations_query.clone();
    /// ```
    pub const fn new(
        observations: Arc<dyn ObservationCommand>,
        observations_query: Arc<dyn ObservationQuery>,
    ) -> Self {
        Self {
            observations,
            observations_query,
        }
    }
}
