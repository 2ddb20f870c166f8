//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (repositories) are implemented by outbound adapters; driving
//! ports (commands and queries) are consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod observation_command;
mod observation_query;
mod observation_repository;

#[cfg(test)]
pub use observation_command::MockObservationCommand;
pub use observation_command::{FixtureObservationCommand, ObservationCommand};
#[cfg(test)]
pub use observation_query::MockObservationQuery;
pub use observation_query::{FixtureObservationQuery, ObservationQuery};
#[cfg(test)]
pub use observation_repository::MockObservationRepository;
pub use observation_repository::{ObservationRepository, ObservationRepositoryError};
