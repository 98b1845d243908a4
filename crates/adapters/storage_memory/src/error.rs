//! Storage-specific error type.

use bricklog_domain::error::CatalogError;
use bricklog_domain::id::LegoSetId;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A set with this identifier is already stored.
    #[error("duplicate LEGO set identifier {0}")]
    DuplicateId(LegoSetId),
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
