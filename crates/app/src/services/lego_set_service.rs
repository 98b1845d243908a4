//! LEGO set service — use-cases for managing the catalog.

use tokio::sync::Mutex;

use bricklog_domain::error::{CatalogError, ConflictError, NotFoundError};
use bricklog_domain::id::LegoSetId;
use bricklog_domain::lego_set::{LegoSet, LegoSetChanges, NewLegoSet};
use bricklog_domain::time;

use crate::ports::LegoSetRepository;

fn not_found(id: LegoSetId) -> CatalogError {
    NotFoundError::lego_set(id).into()
}

/// Application service for LEGO set CRUD operations.
///
/// Mutations are serialised through a single writer lock, so the
/// check-then-write sequences (uniqueness, identifier assignment) never
/// interleave. Reads go straight to the repository.
pub struct LegoSetService<R> {
    repo: R,
    writer: Mutex<()>,
}

impl<R: LegoSetRepository> LegoSetService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            writer: Mutex::new(()),
        }
    }

    /// Add a set to the catalog.
    ///
    /// The new set receives one more than the highest identifier in use
    /// (`1` for an empty catalog) and both timestamps are set to now.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if invariants fail,
    /// [`CatalogError::Conflict`] if the set number is already taken, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, new), fields(set_number = %new.set_number))]
    pub async fn create_lego_set(&self, new: NewLegoSet) -> Result<LegoSet, CatalogError> {
        new.validate()?;

        let _guard = self.writer.lock().await;
        if self
            .repo
            .find_by_set_number(&new.set_number)
            .await?
            .is_some()
        {
            return Err(ConflictError {
                set_number: new.set_number,
            }
            .into());
        }

        let id = LegoSetId::next_after(self.repo.max_id().await?);
        let created = self.repo.create(new.into_lego_set(id, time::now())).await?;
        tracing::info!(id = %created.id, set_number = %created.set_number, "LEGO set created");
        Ok(created)
    }

    /// List every set in catalog order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_lego_sets(&self) -> Result<Vec<LegoSet>, CatalogError> {
        self.repo.get_all().await
    }

    /// Look up a set by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no set with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_lego_set(&self, id: LegoSetId) -> Result<LegoSet, CatalogError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Merge `changes` into an existing set and refresh its `updated_at`.
    ///
    /// Absent and blank fields keep their stored value.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no set with `id` exists,
    /// [`CatalogError::Conflict`] when the requested set number belongs to
    /// another set, [`CatalogError::Validation`] for an invalid price, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_lego_set(
        &self,
        id: LegoSetId,
        changes: LegoSetChanges,
    ) -> Result<LegoSet, CatalogError> {
        let _guard = self.writer.lock().await;
        let mut set = self.get_lego_set(id).await?;
        changes.validate()?;

        if let Some(requested) = changes.requested_set_number()
            && requested != set.set_number
            && self
                .repo
                .find_by_set_number(requested)
                .await?
                .is_some_and(|other| other.id != id)
        {
            return Err(ConflictError {
                set_number: requested.to_string(),
            }
            .into());
        }

        changes.apply_to(&mut set, time::now());
        let updated = self.repo.update(set).await?.ok_or_else(|| not_found(id))?;
        tracing::info!(id = %updated.id, set_number = %updated.set_number, "LEGO set updated");
        Ok(updated)
    }

    /// Remove a set from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no set with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_lego_set(&self, id: LegoSetId) -> Result<(), CatalogError> {
        let _guard = self.writer.lock().await;
        if !self.repo.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(%id, "LEGO set deleted");
        Ok(())
    }
}
