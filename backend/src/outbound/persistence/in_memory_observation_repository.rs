//! Process-local observation store.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{ObservationRepository, ObservationRepositoryError};
use crate::domain::{Observation, ObservationId, ObservationRecord};

#[derive(Debug)]
struct Store {
    next_id: u64,
    observations: BTreeMap<ObservationId, Observation>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            observations: BTreeMap::new(),
        }
    }
}

/// Observation repository backed by an in-process map.
///
/// Writes are serialised behind a mutex; a poisoned lock surfaces as
/// [`ObservationRepositoryError::Connection`].
#[derive(Debug, Default)]
pub struct InMemoryObservationRepository {
    store: Mutex<Store>,
}

impl InMemoryObservationRepository {
    /// Empty repository whose first insert receives id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, ObservationRepositoryError> {
        self.store.lock().map_err(|_| {
            ObservationRepositoryError::connection("observation store lock poisoned")
        })
    }
}

#[async_trait]
impl ObservationRepository for InMemoryObservationRepository {
    async fn insert(
        &self,
        observation: Observation,
    ) -> Result<ObservationRecord, ObservationRepositoryError> {
        let mut store = self.lock()?;
        let id = ObservationId::new(store.next_id);
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| ObservationRepositoryError::query("observation ids exhausted"))?;
        store.observations.insert(id, observation.clone());
        debug!(%id, "stored observation");
        Ok(ObservationRecord { id, observation })
    }

    async fn list(&self) -> Result<Vec<ObservationRecord>, ObservationRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .observations
            .iter()
            .map(|(id, observation)| ObservationRecord {
                id: *id,
                observation: observation.clone(),
            })
            .collect())
    }

    async fn find_by_id(
        &self,
        id: ObservationId,
    ) -> Result<Option<ObservationRecord>, ObservationRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .observations
            .get(&id)
            .map(|observation| ObservationRecord {
                id,
                observation: observation.clone(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveTime};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{ObservationName, build_geometry};

    fn observation(name: &str, longitude: f64, latitude: f64) -> Observation {
        Observation::new(
            ObservationName::new(name).expect("valid name"),
            NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
            NaiveTime::from_hms_opt(9, 12, 12).expect("valid time"),
            build_geometry(longitude, latitude),
        )
    }

    #[fixture]
    fn repo() -> InMemoryObservationRepository {
        InMemoryObservationRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_sequential_from_one(repo: InMemoryObservationRepository) {
        let first = repo
            .insert(observation("Teste", -42.0, -22.0))
            .await
            .expect("first insert");
        let second = repo
            .insert(observation("Ipê", -43.0, -21.5))
            .await
            .expect("second insert");

        assert_eq!(first.id, ObservationId::new(1));
        assert_eq!(second.id, ObservationId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_ascending_ids(repo: InMemoryObservationRepository) {
        for name in ["Primeiro", "Segundo", "Terceiro"] {
            repo.insert(observation(name, -42.0, -22.0))
                .await
                .expect("insert");
        }

        let ids: Vec<u64> = repo
            .list()
            .await
            .expect("list")
            .iter()
            .map(|record| record.id.get())
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_id_distinguishes_known_and_unknown(repo: InMemoryObservationRepository) {
        let stored = repo
            .insert(observation("Teste", -42.0, -22.0))
            .await
            .expect("insert");

        let found = repo.find_by_id(stored.id).await.expect("lookup");
        let missing = repo.find_by_id(ObservationId::new(99)).await.expect("lookup");

        assert_eq!(found, Some(stored));
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn poisoned_lock_is_a_connection_error() {
        let repo = Arc::new(InMemoryObservationRepository::new());
        let poisoner = Arc::clone(&repo);
        let outcome = std::thread::spawn(move || {
            let _guard = poisoner.store.lock().expect("lock before poisoning");
            panic!("poison the store");
        })
        .join();
        assert!(outcome.is_err());

        let error = repo.list().await.expect_err("poisoned");
        assert!(matches!(
            error,
            ObservationRepositoryError::Connection { .. }
        ));
    }
}
