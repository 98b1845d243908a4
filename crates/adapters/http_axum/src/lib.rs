//! # bricklog-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON REST API** for the catalog (`/api/lego-sets`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Attach CORS headers so a browser frontend on another origin can call it
//!
//! ## Dependency rule
//! Depends on `bricklog-app` (for port traits and services) and `bricklog-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod cors;
pub mod error;
pub mod router;
pub mod state;
