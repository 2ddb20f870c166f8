//! Driving port for reading observations and the map feed.

use async_trait::async_trait;

use crate::domain::{Error, FeatureCollection, ObservationId, ObservationRecord};

/// Use-case port for observation reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObservationQuery: Send + Sync {
    /// Every stored observation in ascending id order.
    async fn list(&self) -> Result<Vec<ObservationRecord>, Error>;

    /// One observation.
    ///
    /// # Errors
    ///
    /// Returns `not_found` when no observation has `id`.
    async fn find(&self, id: ObservationId) -> Result<ObservationRecord, Error>;

    /// GeoJSON feed of every stored observation.
    async fn feed(&self) -> Result<FeatureCollection, Error>;
}

/// Fixture query over an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureObservationQuery;

#[async_trait]
impl ObservationQuery for FixtureObservationQuery {
    async fn list(&self) -> Result<Vec<ObservationRecord>, Error> {
        Ok(Vec::new())
    }

    async fn find(&self, id: ObservationId) -> Result<ObservationRecord, Error> {
        Err(Error::not_found(format!("observation {id} not found")))
    }

    async fn feed(&self) -> Result<FeatureCollection, Error> {
        Ok(FeatureCollection::from_records(Vec::new()))
    }
}
