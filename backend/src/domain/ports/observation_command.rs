//! Driving port for recording observations.

use async_trait::async_trait;

use crate::domain::{BoundingBox, Error, ObservationForm, ObservationId, ObservationRecord};

/// Use-case port for submitting raw observation input.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObservationCommand: Send + Sync {
    /// Clean, validate, and persist a submission.
    ///
    /// # Errors
    ///
    /// Returns `invalid_request` carrying `fieldErrors` details when any field
    /// is rejected, or `service_unavailable` when storage fails.
    async fn submit(&self, form: ObservationForm) -> Result<ObservationRecord, Error>;
}

/// Fixture command that validates against its bounds and never persists.
///
/// Accepted submissions are returned with id 1.
#[derive(Debug, Clone, Copy)]
pub struct FixtureObservationCommand {
    bounds: BoundingBox,
}

impl FixtureObservationCommand {
    /// Validate against `bounds`.
    #[must_use]
    pub const fn new(bounds: BoundingBox) -> Self {
        Self { bounds }
    }
}

#[async_trait]
impl ObservationCommand for FixtureObservationCommand {
    async fn submit(&self, form: ObservationForm) -> Result<ObservationRecord, Error> {
        let observation = form.clean(&self.bounds)?;
        Ok(ObservationRecord {
            id: ObservationId::new(1),
            observation,
        })
    }
}
