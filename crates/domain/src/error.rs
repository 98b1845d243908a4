//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CatalogError`]
//! via `#[from]`, so use-cases only ever return one error type.

/// Top-level error returned by domain logic and application services.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// Unexpected failure in a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that violates a domain invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is absent or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The price is negative, `NaN` or infinite.
    #[error("price must be a positive finite number")]
    InvalidPrice,

    /// The request body could not be decoded.
    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    /// No LEGO set is stored under `id`.
    #[must_use]
    pub fn lego_set(id: impl ToString) -> Self {
        Self {
            entity: "LEGO set",
            id: id.to_string(),
        }
    }
}

/// A uniqueness constraint would be broken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("LEGO set with set number {set_number} already exists")]
pub struct ConflictError {
    pub set_number: String,
}
