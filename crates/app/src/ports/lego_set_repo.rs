//! LEGO set repository port — the ordered catalog store.

use std::future::Future;

use bricklog_domain::error::CatalogError;
use bricklog_domain::id::LegoSetId;
use bricklog_domain::lego_set::LegoSet;

/// Ordered storage for [`LegoSet`]s.
///
/// Implementations keep sets in insertion order. Uniqueness and identifier
/// assignment are the caller's job; the repository stores what it is given.
pub trait LegoSetRepository {
    /// Append a set at the end of the catalog.
    fn create(&self, set: LegoSet) -> impl Future<Output = Result<LegoSet, CatalogError>> + Send;

    /// Get a set by its identifier.
    fn get_by_id(
        &self,
        id: LegoSetId,
    ) -> impl Future<Output = Result<Option<LegoSet>, CatalogError>> + Send;

    /// Find the set carrying the given catalog number.
    fn find_by_set_number(
        &self,
        set_number: &str,
    ) -> impl Future<Output = Result<Option<LegoSet>, CatalogError>> + Send;

    /// Get all sets in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<LegoSet>, CatalogError>> + Send;

    /// Highest identifier currently stored, `None` when empty.
    fn max_id(&self) -> impl Future<Output = Result<Option<LegoSetId>, CatalogError>> + Send;

    /// Replace the stored set with the same identifier, keeping its position.
    ///
    /// Returns `None` when no set with that identifier exists.
    fn update(
        &self,
        set: LegoSet,
    ) -> impl Future<Output = Result<Option<LegoSet>, CatalogError>> + Send;

    /// Remove a set, preserving the order of the others.
    ///
    /// Returns `false` when no set with that identifier exists.
    fn delete(&self, id: LegoSetId) -> impl Future<Output = Result<bool, CatalogError>> + Send;
}
