//! Port for observation persistence.
//!
//! Adapters receive finished [`Observation`]s only; validation never reaches
//! storage. Identifiers are assigned by the adapter on insert.

use async_trait::async_trait;

use crate::domain::{Observation, ObservationId, ObservationRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by observation repository adapters.
    pub enum ObservationRepositoryError {
        /// Storage could not be reached.
        Connection { message: String } =>
            "observation repository connection failed: {message}",
        /// A read or write failed during execution.
        Query { message: String } =>
            "observation repository query failed: {message}",
    }
}

/// Port for storing and reading observations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObservationRepository: Send + Sync {
    /// Persist an observation and return it with its new identifier.
    async fn insert(
        &self,
        observation: Observation,
    ) -> Result<ObservationRecord, ObservationRepositoryError>;

    /// Every stored observation in ascending id order.
    async fn list(&self) -> Result<Vec<ObservationRecord>, ObservationRepositoryError>;

    /// Fetch one observation, `None` when the id is unknown.
    async fn find_by_id(
        &self,
        id: ObservationId,
    ) -> Result<Option<ObservationRecord>, ObservationRepositoryError>;
}
