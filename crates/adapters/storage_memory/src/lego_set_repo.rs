//! In-memory implementation of [`LegoSetRepository`].

use std::future::Future;

use tokio::sync::RwLock;

use bricklog_app::ports::LegoSetRepository;
use bricklog_domain::error::CatalogError;
use bricklog_domain::id::LegoSetId;
use bricklog_domain::lego_set::LegoSet;

use crate::error::StorageError;
use crate::seed::initial_lego_sets;

/// `Vec`-backed LEGO set repository.
///
/// Every lookup is a linear scan; the catalog is expected to stay small.
#[derive(Debug, Default)]
pub struct InMemoryLegoSetRepository {
    sets: RwLock<Vec<LegoSet>>,
}

impl InMemoryLegoSetRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `sets`, in the given order.
    #[must_use]
    pub fn with_sets(sets: Vec<LegoSet>) -> Self {
        Self {
            sets: RwLock::new(sets),
        }
    }

    /// Create a repository holding the starter catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_sets(initial_lego_sets())
    }
}

impl LegoSetRepository for InMemoryLegoSetRepository {
    fn create(&self, set: LegoSet) -> impl Future<Output = Result<LegoSet, CatalogError>> + Send {
        async move {
            let mut sets = self.sets.write().await;
            if sets.iter().any(|stored| stored.id == set.id) {
                return Err(StorageError::DuplicateId(set.id).into());
            }
            sets.push(set.clone());
            tracing::debug!(id = %set.id, total = sets.len(), "stored LEGO set");
            Ok(set)
        }
    }

    fn get_by_id(
        &self,
        id: LegoSetId,
    ) -> impl Future<Output = Result<Option<LegoSet>, CatalogError>> + Send {
        async move {
            let sets = self.sets.read().await;
            Ok(sets.iter().find(|set| set.id == id).cloned())
        }
    }

    fn find_by_set_number(
        &self,
        set_number: &str,
    ) -> impl Future<Output = Result<Option<LegoSet>, CatalogError>> + Send {
        async move {
            let sets = self.sets.read().await;
            Ok(sets.iter().find(|set| set.set_number == set_number).cloned())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<LegoSet>, CatalogError>> + Send {
        async move { Ok(self.sets.read().await.clone()) }
    }

    fn max_id(&self) -> impl Future<Output = Result<Option<LegoSetId>, CatalogError>> + Send {
        async move { Ok(self.sets.read().await.iter().map(|set| set.id).max()) }
    }

    fn update(
        &self,
        set: LegoSet,
    ) -> impl Future<Output = Result<Option<LegoSet>, CatalogError>> + Send {
        async move {
            let mut sets = self.sets.write().await;
            let Some(slot) = sets.iter_mut().find(|stored| stored.id == set.id) else {
                return Ok(None);
            };
            *slot = set.clone();
            Ok(Some(set))
        }
    }

    fn delete(&self, id: LegoSetId) -> impl Future<Output = Result<bool, CatalogError>> + Send {
        async move {
            let mut sets = self.sets.write().await;
            let Some(index) = sets.iter().position(|set| set.id == id) else {
                return Ok(false);
            };
            sets.remove(index);
            Ok(true)
        }
    }
}
