//! # bricklog-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** storage adapters must implement:
//!   - `LegoSetRepository` — ordered storage for LEGO sets
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `LegoSetService` — create, list, get, update, delete
//! - Enforce catalog-wide rules that need more than one record
//!   (identifier assignment, set-number uniqueness)
//!
//! ## Dependency rule
//! Depends on `bricklog-domain` only (plus `tokio::sync` for the writer lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
