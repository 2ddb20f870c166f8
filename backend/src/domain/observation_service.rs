//! Observation use cases on top of the repository port.
//!
//! Submissions are cleaned against the injected bounding box before anything
//! reaches storage.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    ObservationCommand, ObservationQuery, ObservationRepository, ObservationRepositoryError,
};
use crate::domain::{
    BoundingBox, Error, FeatureCollection, ObservationForm, ObservationId, ObservationRecord,
};

/// Observation service implementing the driving ports.
#[derive(Clone)]
pub struct ObservationService<R> {
    repository: Arc<R>,
    bounds: BoundingBox,
}

impl<R> ObservationService<R> {
    /// Create a service validating against `bounds`.
    pub const fn new(repository: Arc<R>, bounds: BoundingBox) -> Self {
        Self { repository, bounds }
    }

    /// Bounding box submissions are checked against.
    #[must_use]
    pub const fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }
}

impl<R> ObservationService<R>
where
    R: ObservationRepository,
{
    fn map_repository_error(error: ObservationRepositoryError) -> Error {
        warn!(%error, "observation repository failure");
        match error {
            ObservationRepositoryError::Connection { message } => {
                Error::service_unavailable(format!("observation store unavailable: {message}"))
            }
            ObservationRepositoryError::Query { message } => {
                Error::service_unavailable(format!("observation store error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> ObservationCommand for ObservationService<R>
where
    R: ObservationRepository,
{
    async fn submit(&self, form: ObservationForm) -> Result<ObservationRecord, Error> {
        let observation = form.clean(&self.bounds).map_err(|errors| {
            debug!(fields = ?errors.fields(), "observation rejected");
            Error::from(errors)
        })?;

        let record = self
            .repository
            .insert(observation)
            .await
            .map_err(Self::map_repository_error)?;
        info!(id = %record.id, "observation recorded");
        Ok(record)
    }
}

#[async_trait]
impl<R> ObservationQuery for ObservationService<R>
where
    R: ObservationRepository,
{
    async fn list(&self) -> Result<Vec<ObservationRecord>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn find(&self, id: ObservationId) -> Result<ObservationRecord, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| Error::not_found(format!("observation {id} not found")))
    }

    async fn feed(&self) -> Result<FeatureCollection, Error> {
        let records = self.list().await?;
        debug!(count = records.len(), "building observation feed");
        Ok(FeatureCollection::from_records(records))
    }
}

#[cfg(test)]
#[path = "observation_service_tests.rs"]
mod tests;
