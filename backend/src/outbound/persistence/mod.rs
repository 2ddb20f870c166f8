//! Persistence adapters for the observation repository port.
//!
//! Storage receives finished observations only. Identifiers are assigned
//! sequentially from 1 in insertion order.

mod in_memory_observation_repository;

pub use in_memory_observation_repository::InMemoryObservationRepository;
