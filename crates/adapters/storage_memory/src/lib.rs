//! # bricklog-adapter-storage-memory
//!
//! In-process persistence adapter: the catalog lives in an ordered `Vec`
//! guarded by a [`tokio::sync::RwLock`] and is lost when the process exits.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `bricklog-app::ports`
//! - Provide the starter catalog the daemon is seeded with
//! - Keep sets in insertion order and refuse duplicate identifiers
//!
//! ## Dependency rule
//! Depends on `bricklog-app` (for port traits) and `bricklog-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod lego_set_repo;
pub mod seed;

pub use error::StorageError;
pub use lego_set_repo::InMemoryLegoSetRepository;
